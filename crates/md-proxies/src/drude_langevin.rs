//! Proxy del `DrudeLangevinIntegrator` (esquema v1, layout plano).

use std::any::Any;

use md_domain::{DrudeLangevinIntegrator, ALL_FORCE_GROUPS};
use md_serialize::{PropertyNode, SerializationError, SerializationProxy};

use crate::invalid;

const VERSION: i64 = 1;

pub struct DrudeLangevinIntegratorProxy;

impl SerializationProxy for DrudeLangevinIntegratorProxy {
    fn type_name(&self) -> &'static str {
        "DrudeLangevinIntegrator"
    }

    fn serialize(&self, object: &dyn Any, node: &mut PropertyNode) -> Result<(), SerializationError> {
        let integrator = object
            .downcast_ref::<DrudeLangevinIntegrator>()
            .ok_or_else(|| SerializationError::ObjectMismatch(self.type_name().to_string()))?;

        node.set_int_property("version", VERSION);
        node.set_double_property("stepSize", integrator.step_size());
        node.set_double_property("constraintTolerance", integrator.constraint_tolerance());
        node.set_double_property("temperature", integrator.temperature());
        node.set_double_property("friction", integrator.friction());
        node.set_double_property("drudeTemperature", integrator.drude_temperature());
        node.set_double_property("drudeFriction", integrator.drude_friction());
        node.set_double_property("maxDrudeDistance", integrator.max_drude_distance());
        node.set_int_property("randomNumberSeed", i64::from(integrator.random_number_seed()));
        node.set_int_property("integrationForceGroups", i64::from(integrator.integration_force_groups()));
        Ok(())
    }

    fn deserialize(&self, node: &PropertyNode) -> Result<Box<dyn Any>, SerializationError> {
        let version = node.get_int_property("version")?;
        if version != VERSION {
            return Err(SerializationError::UnsupportedVersion {
                type_name: self.type_name().to_string(),
                found: version,
            });
        }

        let mut integrator = DrudeLangevinIntegrator::new(
            node.get_double_property("temperature")?,
            node.get_double_property("friction")?,
            node.get_double_property("drudeTemperature")?,
            node.get_double_property("drudeFriction")?,
            node.get_double_property("stepSize")?,
        )
        .map_err(invalid)?;
        integrator
            .set_constraint_tolerance(node.get_double_property("constraintTolerance")?)
            .map_err(invalid)?;
        integrator
            .set_max_drude_distance(node.get_double_property("maxDrudeDistance")?)
            .map_err(invalid)?;
        integrator.set_random_number_seed(node.get_int_property("randomNumberSeed")? as i32);
        integrator.set_integration_force_groups(
            node.get_int_property_or("integrationForceGroups", i64::from(ALL_FORCE_GROUPS))? as u32,
        );

        Ok(Box::new(integrator))
    }
}
