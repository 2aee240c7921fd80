//! Errores de la capa de serialización (taxonomía cerrada).
//!
//! Todas las variantes se propagan al llamador sin reintentos ni recuperación
//! parcial: cada (de)serialización es una transformación pura y determinista,
//! reintentar no cambiaría el resultado.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// El nodo declara una revisión de esquema que este proxy no sabe leer.
    /// No hay compatibilidad hacia adelante: versiones desconocidas se
    /// rechazan, nunca se parsean "best effort".
    #[error("unsupported version {found} for type '{type_name}'")]
    UnsupportedVersion { type_name: String, found: i64 },

    /// Propiedad escalar requerida ausente y sin default documentado.
    #[error("missing required property '{0}'")]
    MissingProperty(String),

    /// Nodo hijo requerido ausente.
    #[error("missing child node '{0}'")]
    MissingChild(String),

    /// La propiedad existe pero con otro tipo escalar. Aplica también a los
    /// getters con default: un valor presente mal tipado es un documento
    /// corrupto, no un valor ausente.
    #[error("property '{name}' holds {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// El registry no tiene proxy registrado bajo ese nombre de tipo.
    #[error("no proxy registered for type '{0}'")]
    UnknownType(String),

    /// El estado del objeto viola una precondición de serialización sin
    /// pérdida bajo el esquema actual (p. ej. un campo deprecado fuera de su
    /// estado default). Falla antes de escribir propiedad alguna.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// El objeto con borrado de tipo no corresponde al tipo concreto que el
    /// proxy o el llamador esperaba.
    #[error("object is not a '{0}'")]
    ObjectMismatch(String),

    /// Documento JSON ilegible o mal formado (mapea errores de serde_json).
    #[error("malformed document: {0}")]
    Malformed(String),
}
