//! Reference data returned by the `/referenceData/*` endpoints
//!
//! Entities are read-only snapshots of server state. Scoped kinds carry their
//! parent by value, so a [`Branch`] always knows its [`MetrologyArea`] and,
//! through it, its [`Domain`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CHEMISTRY_BIOLOGY_CODE, CHEMISTRY_BIOLOGY_NAME, GENERAL_PHYSICS_CODE, GENERAL_PHYSICS_NAME,
    IONIZING_RADIATION_CODE, IONIZING_RADIATION_NAME,
};
use crate::reference_data;

/// Common accessors shared by every reference-data kind.
pub trait ReferenceItem {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
    fn value(&self) -> &str;
}

/// Anything that can stand in for a label in search criteria.
///
/// Implemented for plain strings and for references to reference-data
/// entities, whose `label` is used.
pub trait AsLabel {
    fn as_label(&self) -> &str;
}

impl AsLabel for &str {
    fn as_label(&self) -> &str {
        self
    }
}

impl AsLabel for String {
    fn as_label(&self) -> &str {
        self
    }
}

impl AsLabel for &String {
    fn as_label(&self) -> &str {
        self
    }
}

/// Anything that can stand in for a General Physics physics code.
///
/// Services, sub services and individual services expose their dotted code
/// (e.g. `"11.3.3"`).
pub trait AsPhysicsCode {
    fn as_physics_code(&self) -> &str;
}

impl AsPhysicsCode for &str {
    fn as_physics_code(&self) -> &str {
        self
    }
}

impl AsPhysicsCode for String {
    fn as_physics_code(&self) -> &str {
        self
    }
}

/// One of General Physics, Chemistry and Biology or Ionizing Radiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Domain {
    /// Domain code, e.g. `"PHYSICS"`.
    pub code: String,
    /// Domain name, e.g. `"General physics"`.
    pub name: String,
}

impl Domain {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }

    pub fn chemistry_biology() -> Self {
        Self::new(CHEMISTRY_BIOLOGY_CODE, CHEMISTRY_BIOLOGY_NAME)
    }

    pub fn general_physics() -> Self {
        Self::new(GENERAL_PHYSICS_CODE, GENERAL_PHYSICS_NAME)
    }

    pub fn ionizing_radiation() -> Self {
        Self::new(IONIZING_RADIATION_CODE, IONIZING_RADIATION_NAME)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

reference_data!(
    /// Information about a country, e.g. `NZ` / `New Zealand`.
    Country
);

reference_data!(
    /// An analyte of Chemistry and Biology, e.g. `nitrogen`.
    Analyte
);

reference_data!(
    /// A category of Chemistry and Biology, e.g. `2` / `Inorganic solutions`.
    Category
);

reference_data!(
    /// A nuclide of Ionizing Radiation, e.g. `C-14`.
    Nuclide
);

reference_data!(
    /// A quantity that is not Ionizing Radiation. The label is always empty.
    NonIonizingQuantity
);

reference_data!(
    /// A metrology area of a domain, e.g. `EM` / `Electricity and Magnetism`.
    MetrologyArea {
        /// The domain that the metrology area belongs to.
        domain: Domain,
    }
);

reference_data!(
    /// A branch of General Physics or Ionizing Radiation, e.g. `PR/Fibre`.
    Branch {
        /// The metrology area that the branch belongs to.
        metrology_area: MetrologyArea,
    }
);

reference_data!(
    /// A service of General Physics, e.g. `6` / `AC current`.
    Service {
        /// The branch that the service belongs to.
        branch: Branch,
        /// The physics code for this service, e.g. `"6"`.
        physics_code: String,
    }
);

reference_data!(
    /// A sub service of General Physics, e.g. `1` / `AC-DC current transfer`.
    SubService {
        /// The service that the sub service belongs to.
        service: Service,
        /// The physics code for this sub service, e.g. `"6.1"`.
        physics_code: String,
    }
);

reference_data!(
    /// An individual service of General Physics.
    IndividualService {
        /// The sub service that the individual service belongs to.
        sub_service: SubService,
        /// The physics code for this individual service, e.g. `"11.1.1"`.
        physics_code: String,
    }
);

reference_data!(
    /// A quantity of Ionizing Radiation, e.g. `1` / `Absorbed dose/rate to air`.
    Quantity {
        /// The branch that the quantity belongs to.
        branch: Branch,
    }
);

reference_data!(
    /// A medium of Ionizing Radiation, e.g. `5` / `Aerosol`.
    Medium {
        /// The branch that the medium belongs to.
        branch: Branch,
    }
);

reference_data!(
    /// A source of Ionizing Radiation, e.g. `3` / `Beta radiation`.
    Source {
        /// The branch that the source belongs to.
        branch: Branch,
    }
);

impl MetrologyArea {
    /// Whether this area belongs to `domain`.
    pub fn belongs_to(&self, domain: &Domain) -> bool {
        self.domain.code == domain.code
    }
}

impl Branch {
    pub fn domain(&self) -> &Domain {
        &self.metrology_area.domain
    }
}

impl Service {
    /// Build a service under `branch`; its physics code is its label.
    pub fn new(branch: Branch, id: i64, label: String, value: String) -> Self {
        Self { physics_code: label.clone(), id, label, value, branch }
    }
}

impl SubService {
    /// Build a sub service under `service`, extending the service's code.
    pub fn new(service: Service, id: i64, label: String, value: String) -> Self {
        let physics_code = format!("{}.{}", service.physics_code, label);
        Self { id, label, value, service, physics_code }
    }
}

impl IndividualService {
    /// Build an individual service under `sub_service`, extending its code.
    pub fn new(sub_service: SubService, id: i64, label: String, value: String) -> Self {
        let physics_code = format!("{}.{}", sub_service.physics_code, label);
        Self { id, label, value, sub_service, physics_code }
    }
}

impl AsPhysicsCode for &Service {
    fn as_physics_code(&self) -> &str {
        &self.physics_code
    }
}

impl AsPhysicsCode for &SubService {
    fn as_physics_code(&self) -> &str {
        &self.physics_code
    }
}

impl AsPhysicsCode for &IndividualService {
    fn as_physics_code(&self) -> &str {
        &self.physics_code
    }
}
