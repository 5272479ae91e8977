//! Controller del dashboard
//!
//! Este módulo expone las cuatro vistas de la aplicación sobre los
//! servicios: vista general, formulario de registro, formulario de pagos y
//! tabla de flota. Las acciones de formulario devuelven la response
//! genérica que alimenta el aviso modal de éxito/falla.

use chrono::NaiveDate;

use crate::dto::dashboard_dto::{ApiResponse, AvailableVehicleRow, FleetRow};
use crate::dto::lessee_dto::{LesseeDirectoryRow, LesseeResponse, RegisterLesseeRequest};
use crate::dto::payment_dto::{PaymentResponse, RecordPaymentRequest};
use crate::models::analytics::DashboardSummary;
use crate::services::{leasing_service, metrics_service};
use crate::state::AppState;

#[derive(Default)]
pub struct DashboardController;

impl DashboardController {
    pub fn new() -> Self {
        Self
    }

    /// Vista general del dashboard
    pub fn overview(&self, state: &AppState, today: NaiveDate) -> DashboardSummary {
        metrics_service::dashboard_summary(state, today)
    }

    /// Envío del formulario de registro de arrendatario
    pub fn submit_registration(
        &self,
        state: &mut AppState,
        request: &RegisterLesseeRequest,
        today: NaiveDate,
    ) -> ApiResponse<LesseeResponse> {
        match leasing_service::register_lessee(state, request, today) {
            Ok(lessee) => ApiResponse::success_with_message(
                LesseeResponse::from(&lessee),
                "Arrendatario registrado exitosamente".to_string(),
            ),
            Err(error) => ApiResponse::failure(error.user_message()),
        }
    }

    /// Envío del formulario de registro de pago
    pub fn submit_payment(
        &self,
        state: &mut AppState,
        request: &RecordPaymentRequest,
    ) -> ApiResponse<PaymentResponse> {
        match leasing_service::record_payment(state, request) {
            Ok(payment) => ApiResponse::success_with_message(
                PaymentResponse::from(&payment),
                "Pago registrado exitosamente".to_string(),
            ),
            Err(error) => ApiResponse::failure(error.user_message()),
        }
    }

    /// Tabla de flota completa
    pub fn fleet_table(&self, state: &AppState) -> Vec<FleetRow> {
        state
            .vehicles
            .iter()
            .map(|vehicle| {
                let lessee_name = vehicle
                    .lessee_id
                    .as_deref()
                    .and_then(|id| state.find_lessee(id))
                    .map(|l| l.name.clone());
                FleetRow::new(vehicle, lessee_name)
            })
            .collect()
    }

    /// Opciones del selector de vehículos del formulario de registro
    pub fn available_vehicles(&self, state: &AppState) -> Vec<AvailableVehicleRow> {
        state
            .vehicles
            .iter()
            .filter(|v| v.is_available())
            .map(|v| AvailableVehicleRow {
                id: v.id.clone(),
                label: v.display_label(),
                lease_amount: v.lease_amount,
            })
            .collect()
    }

    /// Opciones del selector de arrendatarios del formulario de pagos
    pub fn lessee_directory(&self, state: &AppState) -> Vec<LesseeDirectoryRow> {
        state
            .lessees
            .iter()
            .map(|lessee| {
                let vehicle = state.vehicle_for_lessee(lessee);
                LesseeDirectoryRow {
                    id: lessee.id.clone(),
                    name: lessee.name.clone(),
                    vehicle_label: vehicle.map(|v| v.display_label()),
                    monthly_amount: vehicle.map(|v| v.lease_amount),
                }
            })
            .collect()
    }
}
