//! Contratos de (de)serialización: `Serializable` y `SerializationProxy`.
//!
//! El proxy es un objeto estrategia inmutable: liga un nombre de tipo estable
//! a dos operaciones puras (serialize / deserialize). En la frontera el
//! objeto viaja con borrado de tipo (`&dyn Any`); dentro de cada
//! implementación se trabaja con el tipo concreto vía downcast.

use std::any::Any;

use crate::errors::SerializationError;
use crate::node::PropertyNode;

/// Implementado por cada objeto de dominio que el registry sabe despachar.
/// `type_name` es el tag estable que enruta hacia el proxy correspondiente;
/// debe coincidir con `SerializationProxy::type_name` del proxy registrado.
pub trait Serializable: Any {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

/// Estrategia de serialización para un tipo concreto.
///
/// Contrato:
/// - `serialize` valida precondiciones (fallando con `InvariantViolation`
///   antes de escribir propiedad alguna), escribe `version` primero y luego
///   cada campo del estado reconstruible. Sólo muta el nodo, nunca el objeto.
/// - `deserialize` aplica el version gate (`UnsupportedVersion` para toda
///   revisión distinta a la soportada), lee cada propiedad requerida y
///   construye un objeto nuevo cuya propiedad pasa al llamador. Todo o nada:
///   si falla, ningún objeto fue producido.
pub trait SerializationProxy: Send + Sync {
    /// Tag estable bajo el cual este proxy se registra.
    fn type_name(&self) -> &'static str;

    fn serialize(&self, object: &dyn Any, node: &mut PropertyNode) -> Result<(), SerializationError>;

    fn deserialize(&self, node: &PropertyNode) -> Result<Box<dyn Any>, SerializationError>;
}
