use std::ops::Range;

use kcdb_core::QueryParams;
use kcdb_domain::{
    Branch, Domain, IonizingRadiationResult, IonizingRadiationResults, IonizingRadiationSearch,
    Medium, MetrologyArea, Nuclide, Quantity, Result, Source,
};

use super::{facade, paged_search, Kcdb};

/// The reference endpoints below take no branch parameter; records are
/// assigned to a branch by id range instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RadiationBranch {
    Dosimetry,
    Radioactivity,
    Neutron,
}

impl RadiationBranch {
    fn of(branch: &Branch) -> Option<Self> {
        match branch.label.as_str() {
            "DOS" => Some(Self::Dosimetry),
            "RAD" => Some(Self::Radioactivity),
            "NEU" => Some(Self::Neutron),
            _ => None,
        }
    }

    fn quantity_ids(self) -> Range<i64> {
        match self {
            Self::Dosimetry => 1..32,
            Self::Radioactivity => 32..47,
            Self::Neutron => 47..78,
        }
    }

    fn medium_ids(self) -> Range<i64> {
        match self {
            Self::Radioactivity => i64::MIN..17,
            Self::Dosimetry => 17..24,
            Self::Neutron => 24..i64::MAX,
        }
    }

    fn source_ids(self) -> Range<i64> {
        match self {
            Self::Dosimetry => i64::MIN..32,
            Self::Radioactivity => 32..35,
            Self::Neutron => 35..i64::MAX,
        }
    }
}

/// The Ionizing Radiation domain (`RADIATION`).
#[derive(Debug, Clone)]
pub struct IonizingRadiation {
    base: Kcdb,
}

facade!(IonizingRadiation, Domain::ionizing_radiation());
paged_search!(IonizingRadiation, IonizingRadiationSearch, IonizingRadiationResult);

impl IonizingRadiation {
    /// Branches of an Ionizing Radiation metrology area.
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

    pub async fn nuclides(&self) -> Result<Vec<Nuclide>> {
        let rows = self.reference("/referenceData/nuclide", QueryParams::new()).await?;
        Ok(rows.into_iter().map(|r| Nuclide { id: r.id, label: r.label, value: r.value }).collect())
    }

    /// Quantities measured in `branch`; unknown branches yield an empty list
    /// without a request.
    pub async fn quantities(&self, branch: &Branch) -> Result<Vec<Quantity>> {
        let Some(ids) = RadiationBranch::of(branch).map(RadiationBranch::quantity_ids) else {
            return Ok(Vec::new());
        };
        let rows = self.quantities_raw().await?;
        Ok(rows
            .into_iter()
            .filter(|q| ids.contains(&q.id))
            .map(|q| Quantity {
                id: q.id,
                label: q.label.unwrap_or_default(),
                value: q.value,
                branch: branch.clone(),
            })
            .collect())
    }

    pub async fn mediums(&self, branch: &Branch) -> Result<Vec<Medium>> {
        let Some(ids) = RadiationBranch::of(branch).map(RadiationBranch::medium_ids) else {
            return Ok(Vec::new());
        };
        let rows = self.reference("/referenceData/radiationMedium", QueryParams::new()).await?;
        Ok(rows
            .into_iter()
            .filter(|r| ids.contains(&r.id))
            .map(|r| Medium { id: r.id, label: r.label, value: r.value, branch: branch.clone() })
            .collect())
    }

    pub async fn sources(&self, branch: &Branch) -> Result<Vec<Source>> {
        let Some(ids) = RadiationBranch::of(branch).map(RadiationBranch::source_ids) else {
            return Ok(Vec::new());
        };
        let rows = self.reference("/referenceData/radiationSource", QueryParams::new()).await?;
        Ok(rows
            .into_iter()
            .filter(|r| ids.contains(&r.id))
            .map(|r| Source { id: r.id, label: r.label, value: r.value, branch: branch.clone() })
            .collect())
    }

    /// Fetch one page of Ionizing Radiation CMCs.
    ///
    /// # Errors
    /// `KcdbError::Usage` for invalid criteria, raised before any request.
    pub async fn search(
        &self,
        criteria: &IonizingRadiationSearch,
    ) -> Result<IonizingRadiationResults> {
        self.post_search("/cmc/searchData/radiation", criteria).await
    }
}
