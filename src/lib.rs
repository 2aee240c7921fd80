//! mdserial-rust: fachada del workspace de serialización de integradores.
//!
//! Re-exporta las piezas de los crates miembro para consumidores que quieren
//! un único punto de entrada: objetos de dominio (`md-domain`), la
//! infraestructura de nodos/registry (`md-serialize`) y los proxies built-in
//! (`md-proxies`).
pub use md_domain::{
    DomainError, DrudeLangevinIntegrator, DrudeNoseHooverIntegrator, NoseHooverChainOptions,
    SubsystemThermostat, ALL_FORCE_GROUPS,
};
pub use md_proxies::{builtin_registry, shared_registry, DrudeLangevinIntegratorProxy, DrudeNoseHooverIntegratorProxy};
pub use md_serialize::{
    node_fingerprint, PropertyNode, PropertyValue, ProxyRegistry, Serializable, SerializationError,
    SerializationProxy, TYPE_TAG,
};
