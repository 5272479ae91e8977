//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la aplicación. Toda falla es
//! una validación de entrada: aborta la acción solicitada y deja el estado
//! previo intacto. No hay reintentos ni estados de falla parcial.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("Vehicle already leased: {0}")]
    VehicleAlreadyLeased(String),

    #[error("Unknown lessee: {0}")]
    UnknownLessee(String),
}

impl AppError {
    /// Mensaje para el aviso modal que ve el usuario
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Los datos proporcionados no son válidos".to_string(),
            AppError::MissingField(field) => format!("El campo '{}' es requerido", field),
            AppError::UnknownVehicle(id) => format!("Vehículo '{}' no encontrado", id),
            AppError::VehicleAlreadyLeased(id) => {
                format!("El vehículo '{}' ya está alquilado", id)
            }
            AppError::UnknownLessee(id) => format!("Arrendatario '{}' no encontrado", id),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de campo faltante
pub fn missing_field_error(field: &str) -> AppError {
    AppError::MissingField(field.to_string())
}

/// Función helper para crear errores de vehículo desconocido
pub fn unknown_vehicle_error(id: &str) -> AppError {
    AppError::UnknownVehicle(id.to_string())
}

/// Función helper para crear errores de vehículo ya alquilado
pub fn vehicle_already_leased_error(id: &str) -> AppError {
    AppError::VehicleAlreadyLeased(id.to_string())
}

/// Función helper para crear errores de arrendatario desconocido
pub fn unknown_lessee_error(id: &str) -> AppError {
    AppError::UnknownLessee(id.to_string())
}

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para envolver un ValidationError suelto en AppError
pub fn field_validation_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}
