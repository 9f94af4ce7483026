//! Search criteria
//!
//! Builders for the JSON bodies POSTed to `/cmc/searchData/*`. Unset or
//! empty criteria are left out of the body entirely; the server treats a
//! missing key as "no constraint".

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::{
    CHEMISTRY_BIOLOGY_AREA, DEFAULT_PAGE_SIZE, IONIZING_RADIATION_AREA, MAX_PAGE_SIZE,
};
use crate::errors::{KcdbError, Result};
use crate::types::reference::{AsLabel, AsPhysicsCode};

/// Paging fields shared by every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// Page number requested (0 means first page).
    pub page: u32,
    /// Maximum number of elements in a page.
    pub page_size: u32,
    /// Whether table data is returned with each row.
    pub show_table: bool,
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: 0, page_size: DEFAULT_PAGE_SIZE, show_table: false }
    }
}

impl Paging {
    /// Reject page sizes outside `[1, max_page_size]`.
    pub fn validate(&self, max_page_size: u32) -> Result<()> {
        if self.page_size < 1 || self.page_size > max_page_size {
            return Err(KcdbError::Usage(format!(
                "Invalid page size, {}. Must be in the range [1, {}]",
                self.page_size, max_page_size
            )));
        }
        Ok(())
    }
}

/// Behaviour common to every search-criteria builder.
pub trait SearchCriteria: Serialize + Clone + Send + Sync {
    fn paging(&self) -> &Paging;

    fn paging_mut(&mut self) -> &mut Paging;

    /// Publication date window, if any.
    fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (None, None)
    }

    /// Validate the criteria before a request is built.
    fn validate(&self, max_page_size: u32) -> Result<()> {
        self.paging().validate(max_page_size)?;
        if let (Some(from), Some(to)) = self.date_range() {
            if from > to {
                return Err(KcdbError::Usage(format!(
                    "Invalid publication date range, {from} is after {to}"
                )));
            }
        }
        Ok(())
    }

    /// Copy of these criteria pointing at another page.
    fn at_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.paging_mut().page = page;
        next
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

fn labels<I, L>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = L>,
    L: AsLabel,
{
    items.into_iter().map(|item| item.as_label().to_owned()).collect()
}

/// Generates the builder methods every domain search shares.
macro_rules! common_builders {
    () => {
        /// Country label(s), e.g. `["CH", "FR", "JP"]`.
        pub fn countries<I, L>(mut self, countries: I) -> Self
        where
            I: IntoIterator<Item = L>,
            L: AsLabel,
        {
            self.countries = labels(countries);
            self
        }

        /// Search keywords in elasticsearch format, e.g. `"phase OR water"`.
        pub fn keywords(mut self, keywords: impl AsRef<str>) -> Self {
            self.keywords = non_empty(keywords.as_ref());
            self
        }

        /// Minimal publication date.
        pub fn public_date_from(mut self, date: NaiveDate) -> Self {
            self.public_date_from = Some(date);
            self
        }

        /// Maximal publication date.
        pub fn public_date_to(mut self, date: NaiveDate) -> Self {
            self.public_date_to = Some(date);
            self
        }

        pub fn page(mut self, page: u32) -> Self {
            self.paging.page = page;
            self
        }

        pub fn page_size(mut self, page_size: u32) -> Self {
            self.paging.page_size = page_size;
            self
        }

        pub fn show_table(mut self, show_table: bool) -> Self {
            self.paging.show_table = show_table;
            self
        }
    };
}

macro_rules! impl_search_criteria {
    ($name:ident) => {
        impl SearchCriteria for $name {
            fn paging(&self) -> &Paging {
                &self.paging
            }

            fn paging_mut(&mut self) -> &mut Paging {
                &mut self.paging
            }

            fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
                (self.public_date_from, self.public_date_to)
            }
        }
    };
}

/// Chemistry and Biology search criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemistryBiologySearch {
    #[serde(rename = "metrologyAreaLabel")]
    metrology_area: String,
    #[serde(rename = "analyteLabel", skip_serializing_if = "Option::is_none")]
    analyte: Option<String>,
    #[serde(rename = "categoryLabel", skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_to: Option<NaiveDate>,
    #[serde(flatten)]
    paging: Paging,
}

impl Default for ChemistryBiologySearch {
    fn default() -> Self {
        Self {
            metrology_area: CHEMISTRY_BIOLOGY_AREA.to_owned(),
            analyte: None,
            category: None,
            countries: Vec::new(),
            keywords: None,
            public_date_from: None,
            public_date_to: None,
            paging: Paging::default(),
        }
    }
}

impl ChemistryBiologySearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyte label, e.g. `"antimony"`.
    pub fn analyte(mut self, analyte: impl AsLabel) -> Self {
        self.analyte = non_empty(analyte.as_label());
        self
    }

    /// Category label, e.g. `"5"`.
    pub fn category(mut self, category: impl AsLabel) -> Self {
        self.category = non_empty(category.as_label());
        self
    }

    /// Metrology area label, defaults to `"QM"`.
    pub fn metrology_area(mut self, area: impl AsLabel) -> Self {
        self.metrology_area = area.as_label().to_owned();
        self
    }

    common_builders!();
}

impl_search_criteria!(ChemistryBiologySearch);

/// General Physics search criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralPhysicsSearch {
    #[serde(rename = "metrologyAreaLabel")]
    metrology_area: String,
    #[serde(rename = "branchLabel", skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    physics_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_to: Option<NaiveDate>,
    #[serde(flatten)]
    paging: Paging,
}

impl GeneralPhysicsSearch {
    /// General Physics searches are always scoped to a metrology area,
    /// e.g. `"EM"`.
    pub fn new(metrology_area: impl AsLabel) -> Self {
        Self {
            metrology_area: metrology_area.as_label().to_owned(),
            branch: None,
            physics_code: None,
            countries: Vec::new(),
            keywords: None,
            public_date_from: None,
            public_date_to: None,
            paging: Paging::default(),
        }
    }

    /// Branch label, e.g. `"EM/RF"`.
    pub fn branch(mut self, branch: impl AsLabel) -> Self {
        self.branch = non_empty(branch.as_label());
        self
    }

    /// Dotted service code, e.g. `"11.3.3"`, or a service entity.
    pub fn physics_code(mut self, code: impl AsPhysicsCode) -> Self {
        self.physics_code = non_empty(code.as_physics_code());
        self
    }

    common_builders!();
}

impl_search_criteria!(GeneralPhysicsSearch);

/// Ionizing Radiation search criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IonizingRadiationSearch {
    #[serde(rename = "metrologyAreaLabel")]
    metrology_area: String,
    #[serde(rename = "branchLabel", skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(rename = "quantityLabel", skip_serializing_if = "Option::is_none")]
    quantity: Option<String>,
    #[serde(rename = "mediumLabel", skip_serializing_if = "Option::is_none")]
    medium: Option<String>,
    #[serde(rename = "sourceLabel", skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(rename = "nuclideLabel", skip_serializing_if = "Option::is_none")]
    nuclide: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_date_to: Option<NaiveDate>,
    #[serde(flatten)]
    paging: Paging,
}

impl Default for IonizingRadiationSearch {
    fn default() -> Self {
        Self {
            metrology_area: IONIZING_RADIATION_AREA.to_owned(),
            branch: None,
            quantity: None,
            medium: None,
            source: None,
            nuclide: None,
            countries: Vec::new(),
            keywords: None,
            public_date_from: None,
            public_date_to: None,
            paging: Paging::default(),
        }
    }
}

impl IonizingRadiationSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrology area label, defaults to `"RI"`.
    pub fn metrology_area(mut self, area: impl AsLabel) -> Self {
        self.metrology_area = area.as_label().to_owned();
        self
    }

    /// Branch label, e.g. `"RAD"`.
    pub fn branch(mut self, branch: impl AsLabel) -> Self {
        self.branch = non_empty(branch.as_label());
        self
    }

    /// Quantity label, e.g. `"1"`.
    pub fn quantity(mut self, quantity: impl AsLabel) -> Self {
        self.quantity = non_empty(quantity.as_label());
        self
    }

    /// Medium label, e.g. `"3"`.
    pub fn medium(mut self, medium: impl AsLabel) -> Self {
        self.medium = non_empty(medium.as_label());
        self
    }

    /// Source label, e.g. `"2"`.
    pub fn source(mut self, source: impl AsLabel) -> Self {
        self.source = non_empty(source.as_label());
        self
    }

    /// Nuclide label, e.g. `"Co-60"`.
    pub fn nuclide(mut self, nuclide: impl AsLabel) -> Self {
        self.nuclide = non_empty(nuclide.as_label());
        self
    }

    common_builders!();
}

impl_search_criteria!(IonizingRadiationSearch);

/// Quick-search criteria, spanning every domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    included_filters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    excluded_filters: Vec<String>,
    #[serde(flatten)]
    paging: Paging,
}

impl QuickSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search keywords in elasticsearch format, e.g. `"phase OR test"`.
    pub fn keywords(mut self, keywords: impl AsRef<str>) -> Self {
        self.keywords = non_empty(keywords.as_ref());
        self
    }

    /// Included filters, e.g. `["cmcDomain.CHEM-BIO"]`.
    pub fn included_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Excluded filters, e.g. `["cmcServices.AC current"]`.
    pub fn excluded_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.paging.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.paging.page_size = page_size;
        self
    }

    pub fn show_table(mut self, show_table: bool) -> Self {
        self.paging.show_table = show_table;
        self
    }
}

impl SearchCriteria for QuickSearch {
    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

/// Validate against the server-wide page ceiling.
pub fn validate_default<C: SearchCriteria>(criteria: &C) -> Result<()> {
    criteria.validate(MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::reference::Country;

    #[test]
    fn chemistry_defaults_only_send_paging_and_area() {
        let body = serde_json::to_value(ChemistryBiologySearch::new()).unwrap();
        assert_eq!(
            body,
            json!({
                "metrologyAreaLabel": "QM",
                "page": 0,
                "pageSize": 100,
                "showTable": false,
            })
        );
    }

    #[test]
    fn labels_and_entities_are_interchangeable() {
        let nz = Country { id: 58, label: "NZ".into(), value: "New Zealand".into() };
        let search = ChemistryBiologySearch::new()
            .analyte("boron")
            .category("5")
            .countries([&nz])
            .public_date_from(NaiveDate::from_ymd_opt(2005, 1, 31).unwrap());

        let body = serde_json::to_value(&search).unwrap();
        assert_eq!(body["analyteLabel"], "boron");
        assert_eq!(body["categoryLabel"], "5");
        assert_eq!(body["countries"], json!(["NZ"]));
        assert_eq!(body["publicDateFrom"], "2005-01-31");
        assert!(body.get("publicDateTo").is_none());
    }

    #[test]
    fn empty_strings_are_treated_as_unset() {
        let search = IonizingRadiationSearch::new().branch("").nuclide("Co-60").keywords("");
        let body = serde_json::to_value(&search).unwrap();
        assert!(body.get("branchLabel").is_none());
        assert!(body.get("keywords").is_none());
        assert_eq!(body["nuclideLabel"], "Co-60");
        assert_eq!(body["metrologyAreaLabel"], "RI");
    }

    #[test]
    fn physics_requires_an_area_and_accepts_codes() {
        let search = GeneralPhysicsSearch::new("EM").branch("EM/RF").physics_code("11.3.3");
        let body = serde_json::to_value(&search).unwrap();
        assert_eq!(body["metrologyAreaLabel"], "EM");
        assert_eq!(body["branchLabel"], "EM/RF");
        assert_eq!(body["physicsCode"], "11.3.3");
    }

    #[test]
    fn page_size_is_bounded() {
        assert!(validate_default(&QuickSearch::new().page_size(MAX_PAGE_SIZE)).is_ok());

        let too_big = validate_default(&QuickSearch::new().page_size(MAX_PAGE_SIZE + 1));
        assert!(matches!(too_big, Err(KcdbError::Usage(msg)) if msg.contains("Invalid page size")));

        let zero = validate_default(&ChemistryBiologySearch::new().page_size(0));
        assert!(matches!(zero, Err(KcdbError::Usage(_))));
    }

    #[test]
    fn inverted_date_range_is_rejected() {
        let search = GeneralPhysicsSearch::new("L")
            .public_date_from(NaiveDate::from_ymd_opt(2020, 6, 30).unwrap())
            .public_date_to(NaiveDate::from_ymd_opt(2005, 1, 31).unwrap());
        let err = validate_default(&search).unwrap_err();
        assert_eq!(err.kind(), "usage");
    }

    #[test]
    fn at_page_only_moves_the_page() {
        let search = QuickSearch::new().keywords("phase").page_size(50);
        let next = search.at_page(3);
        assert_eq!(next.paging().page, 3);
        assert_eq!(next.paging().page_size, 50);
        assert_eq!(search.paging().page, 0);
    }

    #[test]
    fn quick_search_serializes_filters() {
        let search = QuickSearch::new()
            .keywords("phase OR test")
            .included_filters(["cmcDomain.CHEM-BIO"])
            .excluded_filters(vec!["cmcServices.AC current".to_string()]);
        let body = serde_json::to_value(&search).unwrap();
        assert_eq!(body["includedFilters"], json!(["cmcDomain.CHEM-BIO"]));
        assert_eq!(body["excludedFilters"], json!(["cmcServices.AC current"]));
        assert_eq!(body["keywords"], "phase OR test");
    }
}
