//! Client-driven pagination
//!
//! The server answers one page per request. Callers walk the pages by
//! increasing `page` from the requested start until a page reports zero
//! elements. These helpers run that loop on top of any [`PagedSearch`]
//! without changing what a single search call does.

use std::pin::pin;

use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use kcdb_domain::{Result, SearchCriteria, SearchResults};
use tracing::debug;

/// A facade that can fetch one page of results for its criteria type.
#[async_trait]
pub trait PagedSearch: Send + Sync {
    type Criteria: SearchCriteria + 'static;
    type Row: Send + 'static;

    /// Fetch exactly the page named by `criteria`.
    async fn search_page(&self, criteria: &Self::Criteria) -> Result<SearchResults<Self::Row>>;
}

/// Stream successive non-empty pages, starting at the criteria's page.
///
/// The stream ends after the first empty page, or after yielding the first
/// error.
pub fn pages<S>(
    searcher: &S,
    criteria: S::Criteria,
) -> impl Stream<Item = Result<SearchResults<S::Row>>> + '_
where
    S: PagedSearch,
{
    let first = criteria.paging().page;
    stream::try_unfold(Some(first), move |next| fetch_page(searcher, criteria.clone(), next))
}

async fn fetch_page<S>(
    searcher: &S,
    criteria: S::Criteria,
    next: Option<u32>,
) -> Result<Option<(SearchResults<S::Row>, Option<u32>)>>
where
    S: PagedSearch,
{
    let Some(page) = next else {
        return Ok(None);
    };

    let results = searcher.search_page(&criteria.at_page(page)).await?;
    if results.is_empty() {
        debug!(page, "reached empty page");
        return Ok(None);
    }

    debug!(page, rows = results.data.len(), "fetched page");
    Ok(Some((results, page.checked_add(1))))
}

/// Fetch every page and concatenate the rows in page order.
///
/// # Errors
/// The first error returned by any page request.
pub async fn collect_all<S>(searcher: &S, criteria: S::Criteria) -> Result<Vec<S::Row>>
where
    S: PagedSearch,
{
    let mut rows = Vec::new();
    let mut stream = pin!(pages(searcher, criteria));
    while let Some(page) = stream.try_next().await? {
        rows.extend(page.data);
    }
    Ok(rows)
}
