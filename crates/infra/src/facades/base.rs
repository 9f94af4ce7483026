use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use kcdb_core::{QueryParams, Transport};
use kcdb_domain::constants::MAX_PAGE_SIZE;
use kcdb_domain::{
    Country, Domain, MetrologyArea, NonIonizingQuantity, QuickSearch, QuickSearchResults, Result,
    SearchCriteria,
};
use tracing::{debug, info};

use crate::schema::{self, FromRecord, QuantityFields, ReferenceFields};

/// Envelope key of every `/referenceData/*` response except domains.
const REFERENCE_KEY: &str = "referenceData";

/// State and accessors shared by every domain facade.
#[derive(Clone)]
pub struct Kcdb {
    transport: Arc<dyn Transport>,
    domain: Domain,
    max_page_size: u32,
}

impl fmt::Debug for Kcdb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kcdb")
            .field("domain", &self.domain)
            .field("max_page_size", &self.max_page_size)
            .field("timeout", &self.transport.timeout())
            .finish_non_exhaustive()
    }
}

impl Kcdb {
    /// `max_page_size` is clamped to `[1, MAX_PAGE_SIZE]`.
    pub(crate) fn new(transport: Arc<dyn Transport>, domain: Domain, max_page_size: u32) -> Self {
        Self { transport, domain, max_page_size: max_page_size.clamp(1, MAX_PAGE_SIZE) }
    }

    /// The domain this facade is fixed to.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Request timeout; `None` means requests wait indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.transport.timeout()
    }

    /// All countries known to the KCDB.
    pub async fn countries(&self) -> Result<Vec<Country>> {
        let rows = self.reference("/referenceData/country", QueryParams::new()).await?;
        Ok(rows
            .into_iter()
            .map(|r| Country { id: r.id, label: r.label, value: r.value })
            .collect())
    }

    /// Every domain, not only this facade's.
    pub async fn domains(&self) -> Result<Vec<Domain>> {
        let bytes = self.transport.get("/referenceData/domain", &QueryParams::new()).await?;
        schema::parse_list(&bytes, "domains")
    }

    /// Metrology areas of this facade's domain.
    pub async fn metrology_areas(&self) -> Result<Vec<MetrologyArea>> {
        let query = QueryParams::new().with("domainCode", self.domain.code.as_str());
        let rows = self.reference("/referenceData/metrologyArea", query).await?;
        Ok(rows
            .into_iter()
            .map(|r| MetrologyArea {
                id: r.id,
                label: r.label,
                value: r.value,
                domain: self.domain.clone(),
            })
            .collect())
    }

    /// Quantities outside ionizing radiation, i.e. those without a label.
    pub async fn non_ionizing_quantities(&self) -> Result<Vec<NonIonizingQuantity>> {
        let rows = self.quantities_raw().await?;
        Ok(rows
            .into_iter()
            .filter(|q| q.label.is_none())
            .map(|q| NonIonizingQuantity { id: q.id, label: String::new(), value: q.value })
            .collect())
    }

    /// Search every domain at once.
    ///
    /// # Errors
    /// `KcdbError::Usage` for an out-of-range page size, before any request.
    pub async fn quick_search(&self, criteria: &QuickSearch) -> Result<QuickSearchResults> {
        self.post_search("/cmc/searchData/quickSearch", criteria).await
    }

    pub(crate) async fn reference(
        &self,
        path: &str,
        query: QueryParams,
    ) -> Result<Vec<ReferenceFields>> {
        let bytes = self.transport.get(path, &query).await?;
        let rows: Vec<ReferenceFields> = schema::parse_list(&bytes, REFERENCE_KEY)?;
        debug!(path, count = rows.len(), "fetched reference data");
        Ok(rows)
    }

    pub(crate) async fn quantities_raw(&self) -> Result<Vec<QuantityFields>> {
        let bytes = self.transport.get("/referenceData/quantity", &QueryParams::new()).await?;
        schema::parse_list(&bytes, REFERENCE_KEY)
    }

    /// Validate, POST and decode one search page.
    pub(crate) async fn post_search<C, R>(&self, path: &str, criteria: &C) -> Result<R>
    where
        C: SearchCriteria,
        R: FromRecord + Pages,
    {
        criteria.validate(self.max_page_size)?;

        let body = serde_json::to_value(criteria).map_err(|e| {
            kcdb_domain::KcdbError::Usage(format!("Cannot encode search criteria: {e}"))
        })?;
        let bytes = self.transport.post(path, &body).await?;
        let results: R = schema::parse(&bytes)?;

        let (page, rows, total) = results.summary();
        info!(domain = %self.domain.code, path, page, rows, total, "search completed");
        Ok(results)
    }
}

/// Page counters reported in the search log line.
pub(crate) trait Pages {
    fn summary(&self) -> (u64, u64, u64);
}

impl<T> Pages for kcdb_domain::SearchResults<T> {
    fn summary(&self) -> (u64, u64, u64) {
        (self.page.page_number, self.page.number_of_elements, self.page.total_elements)
    }
}

impl Pages for QuickSearchResults {
    fn summary(&self) -> (u64, u64, u64) {
        (self.page.page_number, self.page.number_of_elements, self.page.total_elements)
    }
}
