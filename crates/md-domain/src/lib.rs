// md-domain library entry point
pub mod error;
pub mod integrator;
pub mod thermostat;
pub use error::DomainError;
pub use integrator::{DrudeLangevinIntegrator, DrudeNoseHooverIntegrator, ALL_FORCE_GROUPS};
pub use thermostat::{NoseHooverChainOptions, SubsystemThermostat};
