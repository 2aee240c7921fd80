//! Hashing y canonicalización JSON.
//!
//! El fingerprint de un nodo es el hash de su forma JSON canónica: dos
//! configuraciones iguales producen el mismo digest, lo que habilita
//! deduplicación y trazabilidad de configuraciones guardadas.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::hash_str;

use crate::errors::SerializationError;
use crate::node::PropertyNode;

/// Digest estable (hex) de un nodo de propiedades.
pub fn node_fingerprint(node: &PropertyNode) -> Result<String, SerializationError> {
    let value = serde_json::to_value(node).map_err(|e| SerializationError::Malformed(e.to_string()))?;
    Ok(hash_str(&to_canonical_json(&value)))
}
