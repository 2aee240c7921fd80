//! Registry de proxies: despacho polimórfico por nombre de tipo.
//!
//! Objeto explícito (nada de estado global mutable): se construye durante el
//! arranque con `register` (`&mut self`) y después se consulta de sólo
//! lectura (`&self`). El borrow checker impone el ciclo de vida en dos fases;
//! las entradas `Arc<dyn SerializationProxy>` hacen seguras las lecturas
//! concurrentes posteriores a la inicialización.
//!
//! Ruteo:
//! - al serializar, por el `type_name()` dinámico del objeto;
//! - al deserializar, por la propiedad string `type` grabada en el nodo.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::errors::SerializationError;
use crate::node::PropertyNode;
use crate::proxy::{Serializable, SerializationProxy};

/// Nombre de la propiedad que etiqueta el nodo envolvente con el tipo.
pub const TYPE_TAG: &str = "type";

#[derive(Default)]
pub struct ProxyRegistry {
    proxies: IndexMap<String, Arc<dyn SerializationProxy>>,
}

impl ProxyRegistry {
    pub fn new() -> Self {
        Self { proxies: IndexMap::new() }
    }

    /// Inserta o reemplaza el proxy ligado a su `type_name`.
    pub fn register(&mut self, proxy: Arc<dyn SerializationProxy>) {
        self.proxies.insert(proxy.type_name().to_string(), proxy);
    }

    pub fn lookup(&self, type_name: &str) -> Result<&Arc<dyn SerializationProxy>, SerializationError> {
        self.proxies
            .get(type_name)
            .ok_or_else(|| SerializationError::UnknownType(type_name.to_string()))
    }

    /// Tipos registrados, en orden de registro.
    pub fn registered_types(&self) -> impl Iterator<Item = &str> {
        self.proxies.keys().map(|k| k.as_str())
    }

    /// Serializa despachando por el tipo dinámico del objeto. El nodo
    /// resultante lleva el nombre del tipo y la propiedad `type`, de modo que
    /// `deserialize_object` pueda rutear de vuelta al mismo proxy.
    pub fn serialize_object(&self, object: &dyn Serializable) -> Result<PropertyNode, SerializationError> {
        let type_name = object.type_name();
        let proxy = self.lookup(type_name)?;
        let mut node = PropertyNode::new(type_name);
        node.set_string_property(TYPE_TAG, type_name);
        proxy.serialize(object.as_any(), &mut node)?;
        Ok(node)
    }

    /// Deserializa ruteando por el tag `type` del nodo. Devuelve el objeto
    /// con borrado de tipo; la propiedad es exclusiva del llamador.
    pub fn deserialize_object(&self, node: &PropertyNode) -> Result<Box<dyn Any>, SerializationError> {
        let type_name = node.get_string_property(TYPE_TAG)?;
        let proxy = self.lookup(type_name)?;
        proxy.deserialize(node)
    }

    /// Conveniencia tipada sobre `deserialize_object`.
    pub fn deserialize_object_as<T: 'static>(&self, node: &PropertyNode) -> Result<T, SerializationError> {
        let tag = node.get_string_property(TYPE_TAG)?.to_string();
        let boxed = self.deserialize_object(node)?;
        boxed
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| SerializationError::ObjectMismatch(tag))
    }
}
