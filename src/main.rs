/// Demo: round trip completo de una configuración de integrador a través del
/// registry, la forma documento JSON y el fingerprint canónico.
fn run_roundtrip_demo() -> Result<(), Box<dyn std::error::Error>> {
    use md_domain::{DrudeNoseHooverIntegrator, NoseHooverChainOptions};
    use md_proxies::builtin_registry;
    use md_serialize::{node_fingerprint, PropertyNode};

    let registry = builtin_registry();
    println!("registered types: {:?}", registry.registered_types().collect::<Vec<_>>());

    let mut integrator =
        DrudeNoseHooverIntegrator::new(300.0, 25.0, 1.0, 100.0, 0.0005, NoseHooverChainOptions::default())?;
    integrator.set_maximum_pair_distance(0.02)?;
    println!("in : {integrator}");

    // serializar despachando por el tipo dinámico
    let node = registry.serialize_object(&integrator)?;
    let document = node.to_json_string()?;
    println!("doc: {document}");
    println!("fp : {}", node_fingerprint(&node)?);

    // recargar desde el documento y reconstruir
    let reloaded = PropertyNode::from_json_str(&document)?;
    let back: DrudeNoseHooverIntegrator = registry.deserialize_object_as(&reloaded)?;
    println!("out: {back}");

    assert_eq!(back, integrator, "round trip must be field-exact");
    println!("round trip OK");
    Ok(())
}

fn main() {
    if let Err(e) = run_roundtrip_demo() {
        eprintln!("demo failed: {e}");
        std::process::exit(1);
    }
}
