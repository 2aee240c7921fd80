//! md-proxies: proxies concretos + armado del registry built-in.
//!
//! Cada proxy mapea campo a campo un objeto de `md-domain` hacia/desde un
//! `PropertyNode` plano, escribiendo `version` primero y aplicando el version
//! gate al leer. El armado del registry es explícito (`builtin_registry`);
//! `shared_registry` expone una instancia de proceso de sólo lectura para
//! entry points que no enhebran un registry propio.

use std::sync::Arc;

use md_domain::DomainError;
use md_serialize::{ProxyRegistry, SerializationError};
use once_cell::sync::Lazy;

pub mod drude_langevin;
pub mod drude_nose_hoover;

pub use drude_langevin::DrudeLangevinIntegratorProxy;
pub use drude_nose_hoover::DrudeNoseHooverIntegratorProxy;

/// Registry con todos los proxies built-in registrados. Construcción
/// explícita: el llamador decide dónde vive y a quién se lo pasa.
pub fn builtin_registry() -> ProxyRegistry {
    let mut registry = ProxyRegistry::new();
    registry.register(Arc::new(DrudeNoseHooverIntegratorProxy));
    registry.register(Arc::new(DrudeLangevinIntegratorProxy));
    registry
}

static SHARED: Lazy<ProxyRegistry> = Lazy::new(builtin_registry);

/// Instancia compartida de proceso, inicializada en el primer uso y nunca
/// mutada después; las lecturas concurrentes son seguras.
pub fn shared_registry() -> &'static ProxyRegistry {
    &SHARED
}

/// Un nodo bien tipado cuyos valores violan la validación de dominio (p. ej.
/// `chainLength` 0) debe fallar sin producir objeto; la taxonomía lo expresa
/// como violación de invariante.
pub(crate) fn invalid(e: DomainError) -> SerializationError {
    SerializationError::InvariantViolation(e.to_string())
}
