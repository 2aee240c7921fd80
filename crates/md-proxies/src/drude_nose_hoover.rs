//! Proxy del `DrudeNoseHooverIntegrator` (esquema v1, layout plano).
//!
//! Set de propiedades persistido:
//! `version:int, stepSize, constraintTolerance, maximumPairDistance,
//! temperature, relativeTemperature, collisionFrequency,
//! relativeCollisionFrequency, chainLength:int, numMTS:int, numYS:int,
//! integrationForceGroups:int`.
//!
//! Nombres y tipos son fijos por versión: agregar un campo exige incrementar
//! `version` y actualizar serialize y deserialize juntos. Sólo
//! `integrationForceGroups` tiene default de lectura (todos los grupos).

use std::any::Any;

use md_domain::{DrudeNoseHooverIntegrator, NoseHooverChainOptions, ALL_FORCE_GROUPS};
use md_serialize::{PropertyNode, SerializationError, SerializationProxy};

use crate::invalid;

const VERSION: i64 = 1;

pub struct DrudeNoseHooverIntegratorProxy;

impl SerializationProxy for DrudeNoseHooverIntegratorProxy {
    fn type_name(&self) -> &'static str {
        "DrudeNoseHooverIntegrator"
    }

    fn serialize(&self, object: &dyn Any, node: &mut PropertyNode) -> Result<(), SerializationError> {
        let integrator = object
            .downcast_ref::<DrudeNoseHooverIntegrator>()
            .ok_or_else(|| SerializationError::ObjectMismatch(self.type_name().to_string()))?;

        // El layout plano v1 sólo captura el termostato global; con
        // termostatos de subsistema activos serializar truncaría estado, así
        // que se falla antes de escribir propiedad alguna.
        if integrator.has_subsystem_thermostats() {
            return Err(SerializationError::InvariantViolation(
                "subsystem thermostats are active; the v1 layout only captures the global thermostat".into(),
            ));
        }

        node.set_int_property("version", VERSION);
        node.set_double_property("stepSize", integrator.step_size());
        node.set_double_property("constraintTolerance", integrator.constraint_tolerance());
        node.set_double_property("maximumPairDistance", integrator.maximum_pair_distance());
        node.set_double_property("temperature", integrator.temperature());
        node.set_double_property("relativeTemperature", integrator.relative_temperature());
        node.set_double_property("collisionFrequency", integrator.collision_frequency());
        node.set_double_property("relativeCollisionFrequency", integrator.relative_collision_frequency());
        node.set_int_property("chainLength", i64::from(integrator.thermostat().chain_length()));
        node.set_int_property("numMTS", i64::from(integrator.thermostat().num_mts()));
        node.set_int_property("numYS", i64::from(integrator.thermostat().num_ys()));
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

        let thermostat = NoseHooverChainOptions::new(
            node.get_int_property("chainLength")? as i32,
            node.get_int_property("numMTS")? as i32,
            node.get_int_property("numYS")? as i32,
        )
        .map_err(invalid)?;

        let mut integrator = DrudeNoseHooverIntegrator::new(
            node.get_double_property("temperature")?,
            node.get_double_property("collisionFrequency")?,
            node.get_double_property("relativeTemperature")?,
            node.get_double_property("relativeCollisionFrequency")?,
            node.get_double_property("stepSize")?,
            thermostat,
        )
        .map_err(invalid)?;
        integrator
            .set_constraint_tolerance(node.get_double_property("constraintTolerance")?)
            .map_err(invalid)?;
        integrator
            .set_maximum_pair_distance(node.get_double_property("maximumPairDistance")?)
            .map_err(invalid)?;
        integrator.set_integration_force_groups(
            node.get_int_property_or("integrationForceGroups", i64::from(ALL_FORCE_GROUPS))? as u32,
        );

        Ok(Box::new(integrator))
    }
}
