//! Nodo de propiedades: el formato de intercambio neutral.
//!
//! Un `PropertyNode` es un contenedor de datos puro: propiedades escalares
//! tipadas (int, double, string) con nombre único dentro del nodo, más cero o
//! más nodos hijos con nombre. No interpreta semántica ni impone esquema; los
//! proxies son quienes fijan qué propiedades existen y con qué tipo.
//!
//! Reglas clave:
//! - Orden de inserción preservado (`IndexMap`), también a través del
//!   documento JSON.
//! - Los escalares pasan bit a bit: ninguna conversión, redondeo ni clamping
//!   ocurre en esta capa.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::SerializationError;

/// Valor escalar tipado de una propiedad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Int(i64),
    Double(f64),
    Str(String),
}

impl PropertyValue {
    /// Nombre del tipo escalar, para diagnósticos de `TypeMismatch`.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "int",
            PropertyValue::Double(_) => "double",
            PropertyValue::Str(_) => "string",
        }
    }
}

/// Árbol de propiedades con nombre, ordenado y tipado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyNode {
    name: String,
    properties: IndexMap<String, PropertyValue>,
    children: Vec<PropertyNode>,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ------------------------------------------------------------------
    // Setters: insertar-o-reemplazar (nombres únicos dentro del nodo).
    // ------------------------------------------------------------------

    pub fn set_int_property(&mut self, name: impl Into<String>, value: i64) -> &mut Self {
        self.properties.insert(name.into(), PropertyValue::Int(value));
        self
    }

    pub fn set_double_property(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.properties.insert(name.into(), PropertyValue::Double(value));
        self
    }

    pub fn set_string_property(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(name.into(), PropertyValue::Str(value.into()));
        self
    }

    // ------------------------------------------------------------------
    // Getters tipados. Ausente => MissingProperty; presente con otro tipo
    // => TypeMismatch.
    // ------------------------------------------------------------------

    pub fn get_int_property(&self, name: &str) -> Result<i64, SerializationError> {
        match self.properties.get(name) {
            Some(PropertyValue::Int(v)) => Ok(*v),
            Some(other) => Err(mismatch(name, "int", other)),
            None => Err(SerializationError::MissingProperty(name.to_string())),
        }
    }

    pub fn get_double_property(&self, name: &str) -> Result<f64, SerializationError> {
        match self.properties.get(name) {
            Some(PropertyValue::Double(v)) => Ok(*v),
            Some(other) => Err(mismatch(name, "double", other)),
            None => Err(SerializationError::MissingProperty(name.to_string())),
        }
    }

    pub fn get_string_property(&self, name: &str) -> Result<&str, SerializationError> {
        match self.properties.get(name) {
            Some(PropertyValue::Str(v)) => Ok(v),
            Some(other) => Err(mismatch(name, "string", other)),
            None => Err(SerializationError::MissingProperty(name.to_string())),
        }
    }

    // Variantes con default: sólo la ausencia activa el default.

    pub fn get_int_property_or(&self, name: &str, default: i64) -> Result<i64, SerializationError> {
        match self.properties.get(name) {
            None => Ok(default),
            Some(PropertyValue::Int(v)) => Ok(*v),
            Some(other) => Err(mismatch(name, "int", other)),
        }
    }

    pub fn get_double_property_or(&self, name: &str, default: f64) -> Result<f64, SerializationError> {
        match self.properties.get(name) {
            None => Ok(default),
            Some(PropertyValue::Double(v)) => Ok(*v),
            Some(other) => Err(mismatch(name, "double", other)),
        }
    }

    pub fn get_string_property_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, SerializationError> {
        match self.properties.get(name) {
            None => Ok(default),
            Some(PropertyValue::Str(v)) => Ok(v),
            Some(other) => Err(mismatch(name, "string", other)),
        }
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Itera las propiedades en orden de inserción.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ------------------------------------------------------------------
    // Nodos hijos (con nombre o posicionales).
    // ------------------------------------------------------------------

    /// Crea un hijo al final y devuelve una referencia mutable a él.
    pub fn create_child(&mut self, name: impl Into<String>) -> &mut PropertyNode {
        self.children.push(PropertyNode::new(name));
        self.children.last_mut().unwrap() // recién insertado
    }

    pub fn children(&self) -> &[PropertyNode] {
        &self.children
    }

    /// Primer hijo con ese nombre, si existe.
    pub fn find_child(&self, name: &str) -> Option<&PropertyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child(&self, name: &str) -> Result<&PropertyNode, SerializationError> {
        self.find_child(name)
            .ok_or_else(|| SerializationError::MissingChild(name.to_string()))
    }

    // ------------------------------------------------------------------
    // Forma documento (JSON) para entry points de guardar/cargar.
    // ------------------------------------------------------------------

    pub fn to_json_string(&self) -> Result<String, SerializationError> {
        serde_json::to_string(self).map_err(|e| SerializationError::Malformed(e.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self, SerializationError> {
        serde_json::from_str(text).map_err(|e| SerializationError::Malformed(e.to_string()))
    }
}

fn mismatch(name: &str, expected: &'static str, found: &PropertyValue) -> SerializationError {
    SerializationError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_get_set_round_trip() {
        let mut node = PropertyNode::new("Config");
        node.set_int_property("version", 1)
            .set_double_property("stepSize", 0.0005)
            .set_string_property("label", "prod");

        assert_eq!(node.get_int_property("version").expect("int"), 1);
        assert_eq!(node.get_double_property("stepSize").expect("double"), 0.0005);
        assert_eq!(node.get_string_property("label").expect("string"), "prod");
    }

    #[test]
    fn set_replaces_existing_property() {
        let mut node = PropertyNode::new("Config");
        node.set_int_property("version", 1);
        node.set_int_property("version", 2);
        assert_eq!(node.get_int_property("version").expect("int"), 2);
        assert_eq!(node.properties().count(), 1);
    }

    #[test]
    fn missing_property_vs_default() {
        let node = PropertyNode::new("Config");
        assert_eq!(
            node.get_double_property("stepSize"),
            Err(SerializationError::MissingProperty("stepSize".into()))
        );
        assert_eq!(node.get_int_property_or("groups", -1).expect("default"), -1);
    }

    #[test]
    fn wrong_type_is_mismatch_even_with_default() {
        let mut node = PropertyNode::new("Config");
        node.set_string_property("groups", "all");
        let err = node.get_int_property_or("groups", -1).unwrap_err();
        assert_eq!(
            err,
            SerializationError::TypeMismatch { name: "groups".into(), expected: "int", found: "string" }
        );
    }

    #[test]
    fn children_by_name_and_position() {
        let mut node = PropertyNode::new("Root");
        node.create_child("Thermostat").set_int_property("chainLength", 3);
        node.create_child("Thermostat").set_int_property("chainLength", 5);

        // find_child devuelve el primero; el acceso posicional ve ambos
        assert_eq!(node.find_child("Thermostat").expect("child").get_int_property("chainLength").expect("int"), 3);
        assert_eq!(node.children().len(), 2);
        assert!(matches!(node.child("Barostat"), Err(SerializationError::MissingChild(_))));
    }

    #[test]
    fn json_document_preserves_order_and_types() {
        let mut node = PropertyNode::new("Config");
        node.set_int_property("version", 1)
            .set_double_property("stepSize", 0.001)
            .set_int_property("chainLength", 3);
        node.create_child("extra").set_string_property("note", "x");

        let text = node.to_json_string().expect("encode");
        let back = PropertyNode::from_json_str(&text).expect("decode");
        assert_eq!(back, node);
        let keys: Vec<&str> = back.properties().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["version", "stepSize", "chainLength"]);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = PropertyNode::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SerializationError::Malformed(_)));
    }
}
