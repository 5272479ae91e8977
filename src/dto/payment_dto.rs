//! DTOs de Payment
//!
//! Este módulo contiene el request del formulario de registro de pagos y
//! su response. Los campos del request llegan como strings del formulario
//! y se parsean en el servicio.

use serde::{Deserialize, Serialize};

use crate::models::payment::Payment;

/// Request del formulario de registro de pago
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub lessee_id: String,
    pub amount: String,
    pub date: String,
}

/// Response de pago registrado
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub lessee_id: String,
    pub amount: i64,
    pub date: String,
    pub status: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.clone(),
            lessee_id: payment.lessee_id.clone(),
            amount: payment.amount,
            date: payment.date.format("%Y-%m-%d").to_string(),
            status: payment.status.as_str().to_string(),
        }
    }
}
