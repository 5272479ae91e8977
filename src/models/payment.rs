//! Modelo de Payment
//!
//! Este módulo contiene el struct Payment. Los pagos son un registro
//! append-only: no existe camino de actualización ni de borrado.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado de un pago registrado
///
/// En este modelo todo pago registrado queda en `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
        }
    }
}

/// Pago mensual de un arrendatario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub lessee_id: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}
