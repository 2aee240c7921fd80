//! md-serialize: infraestructura de serialización tipada y versionada.
//!
//! Piezas:
//! - `node`: `PropertyNode`, el árbol de propiedades tipadas que sirve de
//!   formato de intercambio neutral (más su forma documento JSON).
//! - `proxy`: contratos `Serializable` / `SerializationProxy` (estrategia
//!   encode/decode ligada a un nombre de tipo estable).
//! - `registry`: `ProxyRegistry`, la tabla de despacho nombre de tipo →
//!   proxy, con ciclo de vida registro-luego-sólo-lectura.
//! - `hashing`: JSON canónico + blake3 para fingerprints de nodos.
//!
//! Este crate no conoce ningún tipo de dominio; los proxies concretos viven
//! en `md-proxies` y los objetos en `md-domain`.
pub mod errors;
pub mod hashing;
pub mod node;
pub mod proxy;
pub mod registry;

pub use errors::SerializationError;
pub use hashing::node_fingerprint;
pub use node::{PropertyNode, PropertyValue};
pub use proxy::{Serializable, SerializationProxy};
pub use registry::{ProxyRegistry, TYPE_TAG};
