use md_domain::{
    DrudeLangevinIntegrator, DrudeNoseHooverIntegrator, NoseHooverChainOptions, ALL_FORCE_GROUPS,
};
use md_proxies::{builtin_registry, shared_registry};
use md_serialize::{node_fingerprint, PropertyNode, TYPE_TAG};

fn sample_nose_hoover() -> DrudeNoseHooverIntegrator {
    let thermostat = NoseHooverChainOptions::new(5, 4, 5).expect("valid chain");
    let mut integrator =
        DrudeNoseHooverIntegrator::new(298.15, 25.0, 1.0, 120.0, 0.0004, thermostat).expect("valid integrator");
    integrator.set_constraint_tolerance(1e-6).expect("tolerance");
    integrator.set_maximum_pair_distance(0.02).expect("distance");
    integrator.set_integration_force_groups(0b1011);
    integrator
}

#[test]
fn nose_hoover_round_trip_is_field_exact() {
    let registry = builtin_registry();
    let integrator = sample_nose_hoover();

    let node = registry.serialize_object(&integrator).expect("serialize");
    let back: DrudeNoseHooverIntegrator = registry.deserialize_object_as(&node).expect("deserialize");

    // igualdad bit a bit: la capa no convierte ni redondea
    assert_eq!(back, integrator);
    assert_eq!(back.step_size(), 0.0004);
    assert_eq!(back.thermostat().num_ys(), 5);
    assert_eq!(back.integration_force_groups(), 0b1011);
}

#[test]
fn langevin_round_trip_is_field_exact() {
    let registry = builtin_registry();
    let mut integrator = DrudeLangevinIntegrator::new(310.0, 5.0, 1.0, 20.0, 0.002).expect("valid integrator");
    integrator.set_random_number_seed(987_654_321);
    integrator.set_max_drude_distance(0.025).expect("distance");

    let node = registry.serialize_object(&integrator).expect("serialize");
    let back: DrudeLangevinIntegrator = registry.deserialize_object_as(&node).expect("deserialize");
    assert_eq!(back, integrator);
}

#[test]
fn node_carries_type_tag_and_flat_v1_layout() {
    let node = builtin_registry()
        .serialize_object(&sample_nose_hoover())
        .expect("serialize");

    assert_eq!(node.name(), "DrudeNoseHooverIntegrator");
    assert_eq!(node.get_string_property(TYPE_TAG).expect("tag"), "DrudeNoseHooverIntegrator");
    assert_eq!(node.get_int_property("version").expect("version"), 1);
    assert!(node.children().is_empty()); // layout plano: sin nodos hijos

    for required in [
        "stepSize",
        "constraintTolerance",
        "maximumPairDistance",
        "temperature",
        "relativeTemperature",
        "collisionFrequency",
        "relativeCollisionFrequency",
        "chainLength",
        "numMTS",
        "numYS",
        "integrationForceGroups",
    ] {
        assert!(node.has_property(required), "missing {required}");
    }
}

#[test]
fn json_document_round_trip_through_save_load() {
    let registry = builtin_registry();
    let integrator = sample_nose_hoover();

    let node = registry.serialize_object(&integrator).expect("serialize");
    let document = node.to_json_string().expect("encode");

    let reloaded = PropertyNode::from_json_str(&document).expect("decode");
    assert_eq!(node_fingerprint(&reloaded).expect("fp"), node_fingerprint(&node).expect("fp"));

    let back: DrudeNoseHooverIntegrator = registry.deserialize_object_as(&reloaded).expect("deserialize");
    assert_eq!(back, integrator);
}

#[test]
fn missing_force_groups_defaults_to_all_groups() {
    let registry = builtin_registry();
    let node = registry.serialize_object(&sample_nose_hoover()).expect("serialize");

    // reconstruir el nodo sin integrationForceGroups (documento de una
    // revisión que aún no conocía el campo)
    let mut stripped = PropertyNode::new(node.name());
    for (name, value) in node.properties() {
        if name == "integrationForceGroups" {
            continue;
        }
        match value {
            md_serialize::PropertyValue::Int(v) => {
                stripped.set_int_property(name, *v);
            }
            md_serialize::PropertyValue::Double(v) => {
                stripped.set_double_property(name, *v);
            }
            md_serialize::PropertyValue::Str(v) => {
                stripped.set_string_property(name, v.clone());
            }
        }
    }

    let back: DrudeNoseHooverIntegrator = registry.deserialize_object_as(&stripped).expect("deserialize");
    assert_eq!(back.integration_force_groups(), ALL_FORCE_GROUPS);
}

#[test]
fn shared_registry_dispatches_both_builtin_types() {
    let registry = shared_registry();
    let types: Vec<&str> = registry.registered_types().collect();
    assert_eq!(types, vec!["DrudeNoseHooverIntegrator", "DrudeLangevinIntegrator"]);

    let langevin = DrudeLangevinIntegrator::new(300.0, 1.0, 1.0, 20.0, 0.001).expect("valid integrator");
    let node = registry.serialize_object(&langevin).expect("serialize");
    let back: DrudeLangevinIntegrator = registry.deserialize_object_as(&node).expect("deserialize");
    assert_eq!(back, langevin);
}
