//! DTOs de Lessee
//!
//! Este módulo contiene el request del formulario de registro de
//! arrendatarios y su response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::lessee::Lessee;

/// Request del formulario de registro de arrendatario
///
/// Los campos llegan tal cual del formulario; los cuatro son obligatorios.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterLesseeRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 100))]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: String,

    pub vehicle_id: String,
}

/// Response de arrendatario registrado
#[derive(Debug, Clone, Serialize)]
pub struct LesseeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_id: Option<String>,
    pub start_date: NaiveDate,
}

impl From<&Lessee> for LesseeResponse {
    fn from(lessee: &Lessee) -> Self {
        Self {
            id: lessee.id.clone(),
            name: lessee.name.clone(),
            email: lessee.email.clone(),
            phone: lessee.phone.clone(),
            vehicle_id: lessee.vehicle_id.clone(),
            start_date: lessee.start_date,
        }
    }
}

/// Fila del selector de arrendatarios del formulario de pagos
#[derive(Debug, Clone, Serialize)]
pub struct LesseeDirectoryRow {
    pub id: String,
    pub name: String,
    pub vehicle_label: Option<String>,
    pub monthly_amount: Option<i64>,
}
