//! Opciones del termostato Nosé–Hoover y termostatos por subsistema.

use crate::DomainError;

/// Parámetros discretos de una cadena Nosé–Hoover.
///
/// Defaults 3/3/7 (largo de cadena, pasos multi-time-step, pasos
/// Yoshida–Suzuki); `num_ys` sólo admite los órdenes de factorización
/// soportados {1, 3, 5, 7}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoseHooverChainOptions {
    chain_length: i32,
    num_mts: i32,
    num_ys: i32,
}

impl NoseHooverChainOptions {
    pub fn new(chain_length: i32, num_mts: i32, num_ys: i32) -> Result<Self, DomainError> {
        if chain_length < 1 {
            return Err(DomainError::ValidationError(format!(
                "chain length must be at least 1, got {chain_length}"
            )));
        }
        if num_mts < 1 {
            return Err(DomainError::ValidationError(format!(
                "number of multi time steps must be at least 1, got {num_mts}"
            )));
        }
        if !matches!(num_ys, 1 | 3 | 5 | 7) {
            return Err(DomainError::ValidationError(format!(
                "number of Yoshida-Suzuki steps must be 1, 3, 5 or 7, got {num_ys}"
            )));
        }
        Ok(Self { chain_length, num_mts, num_ys })
    }

    pub fn chain_length(&self) -> i32 {
        self.chain_length
    }
    pub fn num_mts(&self) -> i32 {
        self.num_mts
    }
    pub fn num_ys(&self) -> i32 {
        self.num_ys
    }
}

impl Default for NoseHooverChainOptions {
    fn default() -> Self {
        Self { chain_length: 3, num_mts: 3, num_ys: 7 }
    }
}

/// Termostato acotado a un subconjunto de partículas. Mecanismo más general
/// que reemplaza al termostato global único; un integrador con termostatos de
/// subsistema activos ya no es representable por el layout plano v1.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsystemThermostat {
    thermostated_particles: Vec<usize>,
    temperature: f64,
    collision_frequency: f64,
}

impl SubsystemThermostat {
    pub fn new(
        thermostated_particles: Vec<usize>,
        temperature: f64,
        collision_frequency: f64,
    ) -> Result<Self, DomainError> {
        if !(temperature > 0.0) {
            return Err(DomainError::ValidationError(format!(
                "subsystem temperature must be positive, got {temperature}"
            )));
        }
        if !(collision_frequency > 0.0) {
            return Err(DomainError::ValidationError(format!(
                "subsystem collision frequency must be positive, got {collision_frequency}"
            )));
        }
        Ok(Self { thermostated_particles, temperature, collision_frequency })
    }

    pub fn thermostated_particles(&self) -> &[usize] {
        &self.thermostated_particles
    }
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    pub fn collision_frequency(&self) -> f64 {
        self.collision_frequency
    }
}
