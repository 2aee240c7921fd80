//! Hash helper – abstrae el algoritmo para poder cambiarlo sin tocar el
//! resto de la capa.

use blake3::Hasher;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}
