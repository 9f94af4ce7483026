//! Search result records

use kcdb_domain::{
    ChemistryBiologyResult, CmcRecord, GeneralPhysicsResult, IonizingRadiationResult, PageInfo,
    QuickSearchResults, Result, ResultAggregation, ResultEquation, ResultFilter, ResultParam,
    ResultTable, ResultUnit, SearchResults,
};

use super::record::{map_fields, FromRecord, Record};

impl FromRecord for PageInfo {
    const ENTITY: &'static str = "PageInfo";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            number_of_elements: record.required_u64("numberOfElements")?,
            page_number: record.required_u64("pageNumber")?,
            page_size: record.required_u64("pageSize")?,
            total_elements: record.required_u64("totalElements")?,
            total_pages: record.required_u64("totalPages")?,
            version_api_kcdb: record.text("versionApiKcdb")?,
        })
    }
}

impl FromRecord for ResultUnit {
    const ENTITY: &'static str = "ResultUnit";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            lower_limit: record.number("lowerLimit")?,
            unit: record.text("unit")?,
            upper_limit: record.number("upperLimit")?,
        })
    }
}

impl FromRecord for ResultEquation {
    const ENTITY: &'static str = "ResultEquation";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            equation: record.text("equation")?,
            equation_comment: record.text("equationComment")?,
        })
    }
}

impl FromRecord for ResultTable {
    const ENTITY: &'static str = "ResultTable";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mut table = Self {
            table_rows: record.required_i64("tableRows")?,
            table_cols: record.required_i64("tableCols")?,
            ..Self::default()
        };
        map_fields!(record => table, text {
            "tableName" => table_name,
            "tableComment" => table_comment,
            "tableContents" => table_contents,
        });
        Ok(table)
    }
}

impl FromRecord for ResultParam {
    const ENTITY: &'static str = "ResultParam";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            parameter_name: record.text("parameterName")?,
            parameter_value: record.text("parameterValue")?,
        })
    }
}

impl FromRecord for ResultAggregation {
    const ENTITY: &'static str = "ResultAggregation";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self { name: record.text("name")?, values: record.strings("values")? })
    }
}

impl FromRecord for ResultFilter {
    const ENTITY: &'static str = "ResultFilter";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            children: record.list("children")?,
            code: record.text("code")?,
            count: record.required_i64("count")?,
            name: record.text("name")?,
            order: record.required_i64("order")?,
        })
    }
}

impl FromRecord for CmcRecord {
    const ENTITY: &'static str = "CmcRecord";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mut row = Self { id: record.required_i64("id")?, ..Self::default() };
        map_fields!(record => row, text {
            "approvalDate" => approval_date,
            "comments" => comments,
            "countryValue" => country_value,
            "domainCode" => domain_code,
            "groupIdentifier" => group_identifier,
            "kcdbCode" => kcdb_code,
            "metrologyAreaLabel" => metrology_area_label,
            "nmiCode" => nmi_code,
            "nmiName" => nmi_name,
            "nmiServiceCode" => nmi_service_code,
            "nmiServiceLink" => nmi_service_link,
            "publicationDate" => publication_date,
            "quantityValue" => quantity_value,
            "rmo" => rmo,
            "status" => status,
            "statusDate" => status_date,
            "traceabilitySource" => traceability_source,
        });
        map_fields!(record => row, nested {
            "cmc" => cmc,
            "cmcBaseUnit" => cmc_base_unit,
            "cmcUncertainty" => cmc_uncertainty,
            "cmcUncertaintyBaseUnit" => cmc_uncertainty_base_unit,
            "uncertaintyEquation" => uncertainty_equation,
            "uncertaintyTable" => uncertainty_table,
        });
        map_fields!(record => row, number {
            "confidenceLevel" => confidence_level,
            "coverageFactor" => coverage_factor,
        });
        row.uncertainty_mode = record.wire_enum("uncertaintyMode")?;
        Ok(row)
    }
}

impl FromRecord for ChemistryBiologyResult {
    const ENTITY: &'static str = "ChemistryBiologyResult";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mut row = Self { common: CmcRecord::from_record(record)?, ..Self::default() };
        map_fields!(record => row, text {
            "analyteMatrix" => analyte_matrix,
            "analyteValue" => analyte_value,
            "categoryValue" => category_value,
            "measurmentTechnique" => measurement_technique,
            "mechanism" => mechanism,
            "subCategoryValue" => sub_category_value,
        });
        map_fields!(record => row, nested {
            "crm" => crm,
            "crmUncertainty" => crm_uncertainty,
            "crmUncertaintyEquation" => crm_uncertainty_equation,
            "crmUncertaintyTable" => crm_uncertainty_table,
        });
        map_fields!(record => row, number {
            "crmConfidenceLevel" => crm_confidence_level,
            "crmCoverageFactor" => crm_coverage_factor,
        });
        row.crm_uncertainty_mode = record.wire_enum("crmUncertaintyMode")?;
        row.uncertainty_convention = record.wire_enum("uncertaintyConvention")?;
        Ok(row)
    }
}

impl FromRecord for GeneralPhysicsResult {
    const ENTITY: &'static str = "GeneralPhysicsResult";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mut row = Self {
            common: CmcRecord::from_record(record)?,
            parameters: record.list("parameters")?,
            ..Self::default()
        };
        map_fields!(record => row, text {
            "branchValue" => branch_value,
            "individualServiceValue" => individual_service_value,
            "instrument" => instrument,
            "instrumentMethod" => instrument_method,
            "internationalStandard" => international_standard,
            "serviceValue" => service_value,
            "subServiceValue" => sub_service_value,
        });
        Ok(row)
    }
}

impl FromRecord for IonizingRadiationResult {
    const ENTITY: &'static str = "IonizingRadiationResult";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mut row = Self { common: CmcRecord::from_record(record)?, ..Self::default() };
        map_fields!(record => row, text {
            "branchValue" => branch_value,
            "instrument" => instrument,
            "instrumentMethod" => instrument_method,
            "internationalStandard" => international_standard,
            "mediumValue" => medium_value,
            "nuclideValue" => nuclide_value,
            "radiationCode" => radiation_code,
            "radiationSpecification" => radiation_specification,
            "referenceStandard" => reference_standard,
            "sourceValue" => source_value,
        });
        Ok(row)
    }
}

/// Page metadata sits beside `data` at the top level of a search response.
macro_rules! search_results {
    ($($row:ty => $entity:literal),+ $(,)?) => {
        $(
            impl FromRecord for SearchResults<$row> {
                const ENTITY: &'static str = $entity;

                fn from_record(record: &Record<'_>) -> Result<Self> {
                    Ok(Self { page: PageInfo::from_record(record)?, data: record.list("data")? })
                }
            }
        )+
    };
}

search_results! {
    ChemistryBiologyResult => "ChemistryBiologyResults",
    GeneralPhysicsResult => "GeneralPhysicsResults",
    IonizingRadiationResult => "IonizingRadiationResults",
}

impl FromRecord for QuickSearchResults {
    const ENTITY: &'static str = "QuickSearchResults";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            page: PageInfo::from_record(record)?,
            aggregations: record.list("aggregations")?,
            data: record.array("data")?.to_vec(),
            filters_list: record.list("filtersList")?,
        })
    }
}
