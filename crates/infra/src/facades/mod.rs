//! Domain facades over the KCDB REST API
//!
//! [`Kcdb`] carries the accessors shared by every domain. Each facade wraps
//! one and adds its domain's reference data and search.

mod base;
mod chemistry_biology;
mod general_physics;
mod ionizing_radiation;

pub use base::Kcdb;
pub use chemistry_biology::ChemistryBiology;
pub use general_physics::GeneralPhysics;
pub use ionizing_radiation::IonizingRadiation;

/// Wire the shared constructors and `Deref<Target = Kcdb>` into a facade.
macro_rules! facade {
    ($name:ident, $domain:expr) => {
        impl $name {
            /// Facade talking to the public KCDB server with default settings.
            ///
            /// # Errors
            /// Returns `KcdbError::Config` if the HTTP client cannot be built.
            pub fn new() -> kcdb_domain::Result<Self> {
                Self::from_config(&kcdb_domain::ClientConfig::default())
            }

            /// Facade built from loaded configuration.
            ///
            /// # Errors
            /// Returns `KcdbError::Config` for invalid configuration.
            pub fn from_config(config: &kcdb_domain::ClientConfig) -> kcdb_domain::Result<Self> {
                let client = $crate::http::HttpClient::from_config(config)?;
                Ok(Self::with_transport(std::sync::Arc::new(client), config.max_page_size))
            }

            /// Facade over any transport, e.g. a test double.
            ///
            /// `max_page_size` is clamped to `[1, MAX_PAGE_SIZE]`.
            pub fn with_transport(
                transport: std::sync::Arc<dyn kcdb_core::Transport>,
                max_page_size: u32,
            ) -> Self {
                Self { base: $crate::facades::Kcdb::new(transport, $domain, max_page_size) }
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::facades::Kcdb;

            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }
    };
}

/// Implement [`kcdb_core::PagedSearch`] by forwarding to the facade's `search`.
macro_rules! paged_search {
    ($name:ident, $criteria:ty, $row:ty) => {
        #[async_trait::async_trait]
        impl kcdb_core::PagedSearch for $name {
            type Criteria = $criteria;
            type Row = $row;

            async fn search_page(
                &self,
                criteria: &Self::Criteria,
            ) -> kcdb_domain::Result<kcdb_domain::SearchResults<Self::Row>> {
                self.search(criteria).await
            }
        }
    };
}

use facade;
use paged_search;
