//! Servicio de operaciones de leasing
//!
//! Este módulo contiene las dos únicas operaciones que mutan el estado:
//! registrar un arrendatario y registrar un pago. Toda falla de validación
//! aborta la operación y deja el estado previo intacto.

use chrono::NaiveDate;
use log::info;
use validator::Validate;

use crate::dto::lessee_dto::RegisterLesseeRequest;
use crate::dto::payment_dto::RecordPaymentRequest;
use crate::models::lessee::Lessee;
use crate::models::payment::{Payment, PaymentStatus};
use crate::state::AppState;
use crate::utils::errors::{
    field_validation_error, missing_field_error, unknown_lessee_error, unknown_vehicle_error,
    validation_error, vehicle_already_leased_error, AppResult,
};
use crate::utils::validation::{
    validate_date, validate_email, validate_not_empty, validate_phone, validate_positive,
};

/// Registrar un arrendatario sobre un vehículo disponible
///
/// Valida que los cuatro campos del formulario vengan completos y que el
/// vehículo exista y esté disponible. En caso de éxito crea el arrendatario
/// fechado hoy y vincula ambos lados de la relación.
pub fn register_lessee(
    state: &mut AppState,
    request: &RegisterLesseeRequest,
    today: NaiveDate,
) -> AppResult<Lessee> {
    for (field, value) in [
        ("name", request.name.as_str()),
        ("email", request.email.as_str()),
        ("phone", request.phone.as_str()),
        ("vehicle_id", request.vehicle_id.as_str()),
    ] {
        if validate_not_empty(value).is_err() {
            return Err(missing_field_error(field));
        }
    }

    request.validate()?;
    validate_email(&request.email).map_err(|e| field_validation_error("email", e))?;
    validate_phone(&request.phone).map_err(|e| field_validation_error("phone", e))?;

    let vehicle_id = request.vehicle_id.trim().to_string();
    let lessee_id = state.next_lessee_id();

    {
        let vehicle = state
            .find_vehicle_mut(&vehicle_id)
            .ok_or_else(|| unknown_vehicle_error(&vehicle_id))?;
        if vehicle.is_leased {
            return Err(vehicle_already_leased_error(&vehicle_id));
        }

        // Vincular ambos lados de la relación
        vehicle.is_leased = true;
        vehicle.lessee_id = Some(lessee_id.clone());
    }

    let lessee = Lessee {
        id: lessee_id,
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        vehicle_id: Some(vehicle_id.clone()),
        start_date: today,
    };
    state.lessees.push(lessee.clone());

    info!(
        "✅ Arrendatario {} registrado sobre el vehículo {}",
        lessee.id, vehicle_id
    );
    Ok(lessee)
}

/// Registrar un pago de un arrendatario conocido
///
/// Valida que los tres campos del formulario vengan completos, que el monto
/// sea un entero positivo y la fecha tenga formato válido, y que el
/// arrendatario exista. El pago queda siempre en estado `completed`.
pub fn record_payment(state: &mut AppState, request: &RecordPaymentRequest) -> AppResult<Payment> {
    for (field, value) in [
        ("lessee_id", request.lessee_id.as_str()),
        ("amount", request.amount.as_str()),
        ("date", request.date.as_str()),
    ] {
        if validate_not_empty(value).is_err() {
            return Err(missing_field_error(field));
        }
    }

    let amount: i64 = request
        .amount
        .trim()
        .parse()
        .map_err(|_| validation_error("amount", "must be an integer"))?;
    validate_positive(amount).map_err(|e| field_validation_error("amount", e))?;

    let date = validate_date(request.date.trim()).map_err(|e| field_validation_error("date", e))?;

    let lessee_id = request.lessee_id.trim();
    if state.find_lessee(lessee_id).is_none() {
        return Err(unknown_lessee_error(lessee_id));
    }

    let payment = Payment {
        id: state.next_payment_id(),
        lessee_id: lessee_id.to_string(),
        amount,
        date,
        status: PaymentStatus::Completed,
    };
    state.payments.push(payment.clone());

    info!(
        "✅ Pago {} de {} € registrado para {}",
        payment.id, payment.amount, payment.lessee_id
    );
    Ok(payment)
}
