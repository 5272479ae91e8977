//! DTOs del dashboard
//!
//! Este módulo contiene la response genérica que envuelve toda acción de
//! usuario y las filas tipadas de la tabla de flota.

use serde::Serialize;

use crate::models::vehicle::Vehicle;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }

    /// Aviso de falla para el modal; nunca lleva datos
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Fila de la tabla de flota
#[derive(Debug, Clone, Serialize)]
pub struct FleetRow {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub lease_amount: i64,
    pub category: String,
    pub status: String,
    pub lessee_name: Option<String>,
}

impl FleetRow {
    pub fn new(vehicle: &Vehicle, lessee_name: Option<String>) -> Self {
        Self {
            id: vehicle.id.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            color: vehicle.color.clone(),
            lease_amount: vehicle.lease_amount,
            category: vehicle.category().label().to_string(),
            status: if vehicle.is_leased {
                "leased".to_string()
            } else {
                "available".to_string()
            },
            lessee_name,
        }
    }
}

/// Opción del selector de vehículos del formulario de registro
#[derive(Debug, Clone, Serialize)]
pub struct AvailableVehicleRow {
    pub id: String,
    pub label: String,
    pub lease_amount: i64,
}
