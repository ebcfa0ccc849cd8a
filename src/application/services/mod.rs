/// Module containing the external identifier sub-API
pub mod external_id_service;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the generic resource service and capability implementations
pub mod resource_service;
/// Module containing common types used by services
mod types;

pub use external_id_service::*;
pub use interfaces::resource::*;
pub use resource_service::*;
pub use types::*;
