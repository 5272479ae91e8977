//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del inventario de la flota
//! y la clasificación por categoría según el monto mensual de leasing.

use serde::{Deserialize, Serialize};

/// Categoría de vehículo según el monto mensual de leasing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleCategory {
    Economy,
    MidRange,
    Premium,
}

impl VehicleCategory {
    /// Clasificar un monto mensual en su categoría
    pub fn from_lease_amount(lease_amount: i64) -> Self {
        if lease_amount < 600 {
            VehicleCategory::Economy
        } else if lease_amount < 900 {
            VehicleCategory::MidRange
        } else {
            VehicleCategory::Premium
        }
    }

    /// Etiqueta legible para el dashboard
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Economy => "Economy",
            VehicleCategory::MidRange => "Mid-range",
            VehicleCategory::Premium => "Premium",
        }
    }
}

/// Vehicle principal de la flota
///
/// `is_leased` y `lessee_id` se mantienen consistentes: un vehículo está
/// alquilado si y solo si tiene un arrendatario asignado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub lease_amount: i64,
    pub is_leased: bool,
    pub lessee_id: Option<String>,
}

impl Vehicle {
    pub fn category(&self) -> VehicleCategory {
        VehicleCategory::from_lease_amount(self.lease_amount)
    }

    pub fn is_available(&self) -> bool {
        !self.is_leased
    }

    /// Etiqueta "año marca modelo" para listados
    pub fn display_label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
