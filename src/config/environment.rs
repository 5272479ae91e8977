//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y los parámetros del
//! generador de datos sintéticos. Todo tiene un valor por defecto: el
//! dashboard debe arrancar sin ninguna variable definida.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// Cantidad de vehículos que genera el seed
    pub fleet_size: usize,
    /// Cantidad de arrendatarios que genera el seed
    pub lessee_count: usize,
    /// Semilla opcional del RNG para generación reproducible
    pub seed: Option<u64>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            fleet_size: env::var("FLEET_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            lessee_count: env::var("LESSEE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            seed: env::var("SEED").ok().and_then(|v| v.parse().ok()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
