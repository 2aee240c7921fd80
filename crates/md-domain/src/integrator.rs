//! Configuraciones de integradores Drude.
//!
//! Objetos de dominio puros: campos privados, constructores que validan y
//! getters/setters. No saben serializarse a sí mismos; eso lo hacen los
//! proxies de `md-proxies`. Sí implementan `Serializable` para que el
//! registry pueda despachar por su tipo dinámico.

use std::any::Any;
use std::fmt;

use md_serialize::Serializable;

use crate::thermostat::{NoseHooverChainOptions, SubsystemThermostat};
use crate::DomainError;

/// Máscara default de grupos de fuerza: todos los grupos seleccionados.
pub const ALL_FORCE_GROUPS: u32 = 0xFFFF_FFFF;

const DEFAULT_CONSTRAINT_TOLERANCE: f64 = 1e-5;

/// Integrador Nosé–Hoover para sistemas con partículas Drude.
///
/// Lleva un termostato global doble (centros de masa / pares relativos) más,
/// opcionalmente, termostatos por subsistema. Estos últimos reemplazan al
/// esquema global y hacen la configuración no representable por el esquema de
/// serialización plano v1.
#[derive(Debug, Clone, PartialEq)]
pub struct DrudeNoseHooverIntegrator {
    step_size: f64,
    constraint_tolerance: f64,
    maximum_pair_distance: f64,
    temperature: f64,
    collision_frequency: f64,
    relative_temperature: f64,
    relative_collision_frequency: f64,
    thermostat: NoseHooverChainOptions,
    integration_force_groups: u32,
    subsystem_thermostats: Vec<SubsystemThermostat>,
}

impl DrudeNoseHooverIntegrator {
    /// Construye el integrador con el termostato global. Temperaturas y
    /// frecuencias deben ser estrictamente positivas, igual que `step_size`.
    pub fn new(
        temperature: f64,
        collision_frequency: f64,
        relative_temperature: f64,
        relative_collision_frequency: f64,
        step_size: f64,
        thermostat: NoseHooverChainOptions,
    ) -> Result<Self, DomainError> {
        require_positive("temperature", temperature)?;
        require_positive("collision frequency", collision_frequency)?;
        require_positive("relative temperature", relative_temperature)?;
        require_positive("relative collision frequency", relative_collision_frequency)?;
        require_positive("step size", step_size)?;
        Ok(Self {
            step_size,
            constraint_tolerance: DEFAULT_CONSTRAINT_TOLERANCE,
            maximum_pair_distance: 0.0, // 0 = sin restricción de distancia
            temperature,
            collision_frequency,
            relative_temperature,
            relative_collision_frequency,
            thermostat,
            integration_force_groups: ALL_FORCE_GROUPS,
            subsystem_thermostats: Vec::new(),
        })
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }
    pub fn constraint_tolerance(&self) -> f64 {
        self.constraint_tolerance
    }
    pub fn maximum_pair_distance(&self) -> f64 {
        self.maximum_pair_distance
    }
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    pub fn collision_frequency(&self) -> f64 {
        self.collision_frequency
    }
    pub fn relative_temperature(&self) -> f64 {
        self.relative_temperature
    }
    pub fn relative_collision_frequency(&self) -> f64 {
        self.relative_collision_frequency
    }
    pub fn thermostat(&self) -> &NoseHooverChainOptions {
        &self.thermostat
    }
    pub fn integration_force_groups(&self) -> u32 {
        self.integration_force_groups
    }

    pub fn set_constraint_tolerance(&mut self, tolerance: f64) -> Result<(), DomainError> {
        require_positive("constraint tolerance", tolerance)?;
        self.constraint_tolerance = tolerance;
        Ok(())
    }

    /// Distancia máxima núcleo–Drude; 0 desactiva la restricción.
    pub fn set_maximum_pair_distance(&mut self, distance: f64) -> Result<(), DomainError> {
        if !(distance >= 0.0) {
            return Err(DomainError::ValidationError(format!(
                "maximum pair distance cannot be negative, got {distance}"
            )));
        }
        self.maximum_pair_distance = distance;
        Ok(())
    }

    pub fn set_integration_force_groups(&mut self, groups: u32) {
        self.integration_force_groups = groups;
    }

    pub fn add_subsystem_thermostat(&mut self, thermostat: SubsystemThermostat) {
        self.subsystem_thermostats.push(thermostat);
    }

    pub fn has_subsystem_thermostats(&self) -> bool {
        !self.subsystem_thermostats.is_empty()
    }

    pub fn subsystem_thermostats(&self) -> &[SubsystemThermostat] {
        &self.subsystem_thermostats
    }
}

impl fmt::Display for DrudeNoseHooverIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DrudeNoseHooverIntegrator T={} K, Tdrude={} K, dt={}>",
            self.temperature, self.relative_temperature, self.step_size
        )
    }
}

impl Serializable for DrudeNoseHooverIntegrator {
    fn type_name(&self) -> &'static str {
        "DrudeNoseHooverIntegrator"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Integrador Langevin con termostato doble para partículas Drude.
#[derive(Debug, Clone, PartialEq)]
pub struct DrudeLangevinIntegrator {
    step_size: f64,
    constraint_tolerance: f64,
    temperature: f64,
    friction: f64,
    drude_temperature: f64,
    drude_friction: f64,
    max_drude_distance: f64,
    random_number_seed: i32,
    integration_force_groups: u32,
}

impl DrudeLangevinIntegrator {
    pub fn new(
        temperature: f64,
        friction: f64,
        drude_temperature: f64,
        drude_friction: f64,
        step_size: f64,
    ) -> Result<Self, DomainError> {
        require_positive("temperature", temperature)?;
        require_positive("friction", friction)?;
        require_positive("drude temperature", drude_temperature)?;
        require_positive("drude friction", drude_friction)?;
        require_positive("step size", step_size)?;
        Ok(Self {
            step_size,
            constraint_tolerance: DEFAULT_CONSTRAINT_TOLERANCE,
            temperature,
            friction,
            drude_temperature,
            drude_friction,
            max_drude_distance: 0.0,
            random_number_seed: 0, // 0 = elegir semilla al inicializar el contexto
            integration_force_groups: ALL_FORCE_GROUPS,
        })
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }
    pub fn constraint_tolerance(&self) -> f64 {
        self.constraint_tolerance
    }
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    pub fn friction(&self) -> f64 {
        self.friction
    }
    pub fn drude_temperature(&self) -> f64 {
        self.drude_temperature
    }
    pub fn drude_friction(&self) -> f64 {
        self.drude_friction
    }
    pub fn max_drude_distance(&self) -> f64 {
        self.max_drude_distance
    }
    pub fn random_number_seed(&self) -> i32 {
        self.random_number_seed
    }
    pub fn integration_force_groups(&self) -> u32 {
        self.integration_force_groups
    }

    pub fn set_constraint_tolerance(&mut self, tolerance: f64) -> Result<(), DomainError> {
        require_positive("constraint tolerance", tolerance)?;
        self.constraint_tolerance = tolerance;
        Ok(())
    }

    pub fn set_max_drude_distance(&mut self, distance: f64) -> Result<(), DomainError> {
        if !(distance >= 0.0) {
            return Err(DomainError::ValidationError(format!(
                "max Drude distance cannot be negative, got {distance}"
            )));
        }
        self.max_drude_distance = distance;
        Ok(())
    }

    pub fn set_random_number_seed(&mut self, seed: i32) {
        self.random_number_seed = seed;
    }

    pub fn set_integration_force_groups(&mut self, groups: u32) {
        self.integration_force_groups = groups;
    }
}

impl fmt::Display for DrudeLangevinIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DrudeLangevinIntegrator T={} K, Tdrude={} K, dt={}>",
            self.temperature, self.drude_temperature, self.step_size
        )
    }
}

impl Serializable for DrudeLangevinIntegrator {
    fn type_name(&self) -> &'static str {
        "DrudeLangevinIntegrator"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::ValidationError(format!("{field} must be positive, got {value}")))
    }
}
