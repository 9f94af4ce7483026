use kcdb_core::QueryParams;
use kcdb_domain::{
    Analyte, Category, ChemistryBiologyResult, ChemistryBiologyResults, ChemistryBiologySearch,
    Domain, Result,
};

use super::{facade, paged_search, Kcdb};

/// The Chemistry and Biology domain (`CHEM-BIO`).
#[derive(Debug, Clone)]
pub struct ChemistryBiology {
    base: Kcdb,
}

facade!(ChemistryBiology, Domain::chemistry_biology());
paged_search!(ChemistryBiology, ChemistryBiologySearch, ChemistryBiologyResult);

impl ChemistryBiology {
    pub async fn analytes(&self) -> Result<Vec<Analyte>> {
        let rows = self.reference("/referenceData/analyte", QueryParams::new()).await?;
        Ok(rows.into_iter().map(|r| Analyte { id: r.id, label: r.label, value: r.value }).collect())
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let rows = self.reference("/referenceData/category", QueryParams::new()).await?;
        Ok(rows.into_iter().map(|r| Category { id: r.id, label: r.label, value: r.value }).collect())
    }

    /// Fetch one page of Chemistry and Biology CMCs.
    ///
    /// # Errors
    /// `KcdbError::Usage` for invalid criteria, raised before any request.
    pub async fn search(&self, criteria: &ChemistryBiologySearch) -> Result<ChemistryBiologyResults> {
        self.post_search("/cmc/searchData/chemistryAndBiology", criteria).await
    }
}
