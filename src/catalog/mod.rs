//! Catalog module
//!
//! Static reference data for the questionnaire: the business needs a
//! customer can select and the plan definitions each tier maps to.

pub mod needs;
pub mod plans;

pub use needs::{find_need, resolve_needs, BusinessNeed, BUSINESS_NEEDS};
pub use plans::{get_default_plans, PlanCatalog, PlanDefinition};
