use kcdb_core::QueryParams;
use kcdb_domain::{
    Branch, Domain, GeneralPhysicsResult, GeneralPhysicsResults, GeneralPhysicsSearch,
    IndividualService, MetrologyArea, Result, Service, SubService,
};
use tracing::warn;

use super::{facade, paged_search, Kcdb};

/// Dosimetry, Radioactivity and Neutron Measurements have no services.
const BRANCHES_WITHOUT_SERVICES: [i64; 3] = [32, 33, 34];

/// The General Physics domain (`PHYSICS`).
#[derive(Debug, Clone)]
pub struct GeneralPhysics {
    base: Kcdb,
}

facade!(GeneralPhysics, Domain::general_physics());
paged_search!(GeneralPhysics, GeneralPhysicsSearch, GeneralPhysicsResult);

impl GeneralPhysics {
    /// Branches of a General Physics metrology area.
    ///
    /// Areas of other domains yield an empty list without a request.
    pub async fn branches(&self, metrology_area: &MetrologyArea) -> Result<Vec<Branch>> {
        if !metrology_area.belongs_to(self.domain()) {
            return Ok(Vec::new());
        }
        let query = QueryParams::new().with("areaId", metrology_area.id);
        let rows = self.reference("/referenceData/branch", query).await?;
        Ok(rows
            .into_iter()
            .map(|r| Branch {
                id: r.id,
                label: r.label,
                value: r.value,
                metrology_area: metrology_area.clone(),
            })
            .collect())
    }

    pub async fn services(&self, branch: &Branch) -> Result<Vec<Service>> {
        if BRANCHES_WITHOUT_SERVICES.contains(&branch.id) {
            return Ok(Vec::new());
        }
        let query = QueryParams::new().with("branchId", branch.id);
        let rows = self.reference("/referenceData/service", query).await?;
        Ok(rows
            .into_iter()
            .map(|r| Service::new(branch.clone(), r.id, r.label, r.value))
            .collect())
    }

    pub async fn sub_services(&self, service: &Service) -> Result<Vec<SubService>> {
        let query = QueryParams::new().with("serviceId", service.id);
        let rows = self.reference("/referenceData/subService", query).await?;
        Ok(rows
            .into_iter()
            .map(|r| SubService::new(service.clone(), r.id, r.label, r.value))
            .collect())
    }

    /// Individual services of a sub-service.
    ///
    /// The server answers 404 for sub-services without individual services;
    /// that is reported as an empty list.
    pub async fn individual_services(
        &self,
        sub_service: &SubService,
    ) -> Result<Vec<IndividualService>> {
        let query = QueryParams::new().with("subServiceId", sub_service.id);
        let rows = match self.reference("/referenceData/individualService", query).await {
            Ok(rows) => rows,
            Err(err) if err.is_not_found() => {
                warn!(sub_service = sub_service.id, "no individual services");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        Ok(rows
            .into_iter()
            .map(|r| IndividualService::new(sub_service.clone(), r.id, r.label, r.value))
            .collect())
    }

    /// Fetch one page of General Physics CMCs.
    ///
    /// # Errors
    /// `KcdbError::Usage` for invalid criteria, raised before any request.
    pub async fn search(&self, criteria: &GeneralPhysicsSearch) -> Result<GeneralPhysicsResults> {
        self.post_search("/cmc/searchData/physics", criteria).await
    }
}
