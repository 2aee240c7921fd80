use std::any::Any;
use std::sync::Arc;

use md_serialize::{
    PropertyNode, ProxyRegistry, Serializable, SerializationError, SerializationProxy, TYPE_TAG,
};

// Objeto y proxy mínimos definidos localmente, sin dependencia de dominio.
#[derive(Debug, Clone, PartialEq)]
struct Knob {
    turns: i64,
}

impl Serializable for Knob {
    fn type_name(&self) -> &'static str {
        "Knob"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct KnobProxy;

impl SerializationProxy for KnobProxy {
    fn type_name(&self) -> &'static str {
        "Knob"
    }

    fn serialize(&self, object: &dyn Any, node: &mut PropertyNode) -> Result<(), SerializationError> {
        let knob = object
            .downcast_ref::<Knob>()
            .ok_or_else(|| SerializationError::ObjectMismatch("Knob".into()))?;
        node.set_int_property("version", 1);
        node.set_int_property("turns", knob.turns);
        Ok(())
    }

    fn deserialize(&self, node: &PropertyNode) -> Result<Box<dyn Any>, SerializationError> {
        let version = node.get_int_property("version")?;
        if version != 1 {
            return Err(SerializationError::UnsupportedVersion { type_name: "Knob".into(), found: version });
        }
        Ok(Box::new(Knob { turns: node.get_int_property("turns")? }))
    }
}

fn registry() -> ProxyRegistry {
    let mut reg = ProxyRegistry::new();
    reg.register(Arc::new(KnobProxy));
    reg
}

#[test]
fn dispatch_by_dynamic_type_without_naming_it() {
    let reg = registry();
    let knob = Knob { turns: 42 };

    // el llamador nunca nombra "Knob": el tag viaja en el nodo
    let node = reg.serialize_object(&knob).expect("serialize");
    assert_eq!(node.name(), "Knob");
    assert_eq!(node.get_string_property(TYPE_TAG).expect("tag"), "Knob");

    let back: Knob = reg.deserialize_object_as(&node).expect("deserialize");
    assert_eq!(back, knob);
}

#[test]
fn deserialize_object_returns_caller_owned_box() {
    let reg = registry();
    let node = reg.serialize_object(&Knob { turns: 7 }).expect("serialize");

    let boxed = reg.deserialize_object(&node).expect("deserialize");
    let knob = boxed.downcast::<Knob>().expect("dynamic type is Knob");
    assert_eq!(knob.turns, 7);
}

#[test]
fn unknown_type_fails_lookup_and_routing() {
    let reg = registry();
    assert_eq!(
        reg.lookup("DoesNotExist").err(),
        Some(SerializationError::UnknownType("DoesNotExist".into()))
    );

    // nodo etiquetado con un tipo sin proxy registrado
    let mut node = PropertyNode::new("Ghost");
    node.set_string_property(TYPE_TAG, "Ghost");
    assert!(matches!(
        reg.deserialize_object(&node),
        Err(SerializationError::UnknownType(t)) if t == "Ghost"
    ));
}

#[test]
fn untagged_node_is_rejected() {
    let reg = registry();
    let node = PropertyNode::new("Knob"); // sin propiedad `type`
    assert!(matches!(
        reg.deserialize_object(&node),
        Err(SerializationError::MissingProperty(p)) if p == TYPE_TAG
    ));
}

#[test]
fn register_replaces_previous_proxy() {
    struct KnobProxyV2;
    impl SerializationProxy for KnobProxyV2 {
        fn type_name(&self) -> &'static str {
            "Knob"
        }
        fn serialize(&self, _object: &dyn Any, node: &mut PropertyNode) -> Result<(), SerializationError> {
            node.set_int_property("version", 2);
            Ok(())
        }
        fn deserialize(&self, _node: &PropertyNode) -> Result<Box<dyn Any>, SerializationError> {
            Ok(Box::new(Knob { turns: 0 }))
        }
    }

    let mut reg = registry();
    reg.register(Arc::new(KnobProxyV2));
    assert_eq!(reg.registered_types().count(), 1);

    let node = reg.serialize_object(&Knob { turns: 1 }).expect("serialize");
    assert_eq!(node.get_int_property("version").expect("version"), 2);
}

#[test]
fn downcast_to_wrong_type_is_object_mismatch() {
    let reg = registry();
    let node = reg.serialize_object(&Knob { turns: 3 }).expect("serialize");
    let err = reg.deserialize_object_as::<String>(&node).unwrap_err();
    assert_eq!(err, SerializationError::ObjectMismatch("Knob".into()));
}
