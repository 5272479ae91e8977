//! Modelo de Lessee
//!
//! Este módulo contiene el struct Lessee (arrendatario). Un arrendatario
//! referencia como máximo un vehículo a la vez en este modelo.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Arrendatario de un vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lessee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_id: Option<String>,
    pub start_date: NaiveDate,
}

impl Lessee {
    pub fn has_vehicle(&self) -> bool {
        self.vehicle_id.is_some()
    }
}
