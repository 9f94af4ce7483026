//! CMC search results
//!
//! Every search endpoint answers with the same page envelope around a list of
//! domain-specific rows. Rows share the fields in [`CmcRecord`] and add their
//! own on top.
//!
//! These types are built from server JSON by the schema mapper in
//! `kcdb-infra`, never by `serde`; `Serialize` writes the Rust field names.

use serde::Serialize;

/// CRM uncertainty mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbsoluteRelative {
    Absolute,
    Relative,
}

/// Chemistry and Biology uncertainty convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UncertaintyConvention {
    One,
    Two,
}

crate::impl_wire_enum!(AbsoluteRelative {
    Absolute => "Absolute",
    Relative => "Relative",
});

crate::impl_wire_enum!(UncertaintyConvention {
    One => "One",
    Two => "Two",
});

/// Pagination metadata of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Number of elements on this page.
    pub number_of_elements: u64,
    /// The page number (first page is 0) of the request.
    pub page_number: u64,
    /// The page size that was requested.
    pub page_size: u64,
    /// Total number of elements available (in all pages).
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// KCDB API version, e.g. `"1.0.7"`.
    pub version_api_kcdb: String,
}

impl PageInfo {
    /// Whether this page is past the end of the result set.
    pub fn is_empty(&self) -> bool {
        self.number_of_elements == 0
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub page: PageInfo,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }
}

/// Unit with an optional range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultUnit {
    pub lower_limit: Option<f64>,
    /// Unit symbol, e.g. `"%"`.
    pub unit: String,
    pub upper_limit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultEquation {
    pub equation: String,
    pub equation_comment: String,
}

/// Table attached to a row when `show_table` is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    pub table_rows: i64,
    pub table_cols: i64,
    /// Table name, e.g. `"CH_Scatt-Atten_Mag"`.
    pub table_name: String,
    pub table_comment: String,
    /// Raw JSON text of the table, e.g. `{"row_1":{"col_1":"val1"}}`.
    pub table_contents: String,
}

/// Named parameter of a General Physics row, e.g. `S21 and S12` / `-80 dB to 0 dB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultParam {
    pub parameter_name: String,
    pub parameter_value: String,
}

/// Aggregation returned by a quick search, e.g. `cmcCountries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultAggregation {
    pub name: String,
    pub values: Vec<String>,
}

/// Filter facet returned by a quick search. Facets nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultFilter {
    pub children: Vec<ResultFilter>,
    pub code: String,
    pub count: i64,
    pub name: String,
    pub order: i64,
}

/// Fields shared by the rows of every domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CmcRecord {
    /// Document database id.
    pub id: i64,
    /// Approval date (YYYY-MM-DD).
    pub approval_date: String,
    pub cmc: Option<ResultUnit>,
    pub cmc_base_unit: Option<ResultUnit>,
    pub cmc_uncertainty: Option<ResultUnit>,
    pub cmc_uncertainty_base_unit: Option<ResultUnit>,
    pub comments: String,
    pub confidence_level: Option<f64>,
    /// Country full name, e.g. `"China"`.
    pub country_value: String,
    pub coverage_factor: Option<f64>,
    /// Domain code, e.g. `"CHEM-BIO"`.
    pub domain_code: String,
    pub group_identifier: String,
    /// Document KCDB code, e.g. `"APMP-QM-CN-00000JZR-1"`.
    pub kcdb_code: String,
    pub metrology_area_label: String,
    /// NMI code, e.g. `"NIM"`.
    pub nmi_code: String,
    pub nmi_name: String,
    /// NMI service code, e.g. `"NIM/11.1.4a"`.
    pub nmi_service_code: String,
    pub nmi_service_link: String,
    /// Publication date (YYYY-MM-DD).
    pub publication_date: String,
    pub quantity_value: String,
    /// RMO acronym, e.g. `"EURAMET"`.
    pub rmo: String,
    /// CMC status, e.g. `"Published"`.
    pub status: String,
    pub status_date: String,
    pub traceability_source: String,
    pub uncertainty_equation: Option<ResultEquation>,
    pub uncertainty_mode: Option<AbsoluteRelative>,
    pub uncertainty_table: Option<ResultTable>,
}

/// Chemistry and Biology row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChemistryBiologyResult {
    pub common: CmcRecord,
    /// Analyte matrix, e.g. `"high purity antimony"`.
    pub analyte_matrix: String,
    /// Analyte value, e.g. `"antimony"`.
    pub analyte_value: String,
    pub category_value: String,
    pub crm: Option<ResultUnit>,
    pub crm_confidence_level: Option<f64>,
    pub crm_coverage_factor: Option<f64>,
    pub crm_uncertainty: Option<ResultUnit>,
    pub crm_uncertainty_equation: Option<ResultEquation>,
    pub crm_uncertainty_mode: Option<AbsoluteRelative>,
    pub crm_uncertainty_table: Option<ResultTable>,
    pub measurement_technique: String,
    pub mechanism: String,
    pub sub_category_value: String,
    pub uncertainty_convention: Option<UncertaintyConvention>,
}

/// General Physics row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneralPhysicsResult {
    pub common: CmcRecord,
    pub branch_value: String,
    pub individual_service_value: String,
    pub instrument: String,
    pub instrument_method: String,
    pub international_standard: String,
    pub parameters: Vec<ResultParam>,
    pub service_value: String,
    pub sub_service_value: String,
}

/// Ionizing Radiation row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IonizingRadiationResult {
    pub common: CmcRecord,
    pub branch_value: String,
    pub instrument: String,
    pub instrument_method: String,
    pub international_standard: String,
    pub medium_value: String,
    pub nuclide_value: String,
    /// Dotted branch.quantity.source.medium code, e.g. `"2.1.3.2"`.
    pub radiation_code: String,
    pub radiation_specification: String,
    pub reference_standard: String,
    pub source_value: String,
}

/// Quick-search page. Rows mix domains and are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickSearchResults {
    pub page: PageInfo,
    pub aggregations: Vec<ResultAggregation>,
    pub data: Vec<serde_json::Value>,
    pub filters_list: Vec<ResultFilter>,
}

pub type ChemistryBiologyResults = SearchResults<ChemistryBiologyResult>;
pub type GeneralPhysicsResults = SearchResults<GeneralPhysicsResult>;
pub type IonizingRadiationResults = SearchResults<IonizingRadiationResult>;
