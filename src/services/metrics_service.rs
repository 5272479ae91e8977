//! Servicio de métricas derivadas
//!
//! Este módulo contiene el motor de métricas del dashboard: funciones puras
//! sobre el estado actual, recalculadas completas en cada invocación. No hay
//! cálculo incremental ni cache; todo es O(n) sobre unos cientos de registros.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};

use crate::models::analytics::{
    CategoryDistribution, DashboardSummary, MonthKey, OverdueLessee, PaymentStatusBreakdown,
    TrendPoint,
};
use crate::models::vehicle::VehicleCategory;
use crate::state::AppState;

/// Días sin pago a partir de los cuales un arrendatario está en mora
const OVERDUE_THRESHOLD_DAYS: i64 = 30;

/// Cantidad de meses de la tendencia mensual, incluyendo el actual
const TREND_MONTHS: usize = 6;

/// Pagos esperados por mes
///
/// Por cada arrendatario con vehículo vinculado se acumula el monto de
/// leasing del vehículo en cada bucket año-mes desde su fecha de inicio
/// hasta el mes actual inclusive.
pub fn expected_by_month(state: &AppState, today: NaiveDate) -> BTreeMap<MonthKey, i64> {
    let mut buckets = BTreeMap::new();
    let end = MonthKey::from_date(today);

    for lessee in &state.lessees {
        let Some(vehicle) = state.vehicle_for_lessee(lessee) else {
            continue;
        };

        let mut key = MonthKey::from_date(lessee.start_date);
        while key <= end {
            *buckets.entry(key).or_insert(0) += vehicle.lease_amount;
            key = key.next();
        }
    }

    buckets
}

/// Pagos cobrados por mes
pub fn collected_by_month(state: &AppState) -> BTreeMap<MonthKey, i64> {
    let mut buckets = BTreeMap::new();

    for payment in &state.payments {
        *buckets.entry(MonthKey::from_date(payment.date)).or_insert(0) += payment.amount;
    }

    buckets
}

/// Total esperado sobre todos los meses
pub fn total_expected(state: &AppState, today: NaiveDate) -> i64 {
    expected_by_month(state, today).values().sum()
}

/// Total cobrado sobre todos los meses
pub fn total_collected(state: &AppState) -> i64 {
    state.payments.iter().map(|p| p.amount).sum()
}

/// Arrendatarios en mora
///
/// Un arrendatario con vehículo está en mora si no tiene ningún pago
/// registrado, o si su pago más reciente es de hace estrictamente más de
/// 30 días. Los días sin pagar se cuentan desde el último pago si existe,
/// si no desde la fecha de inicio del contrato.
pub fn overdue_lessees(state: &AppState, today: NaiveDate) -> Vec<OverdueLessee> {
    let mut rows = Vec::new();

    for lessee in &state.lessees {
        if !lessee.has_vehicle() {
            continue;
        }

        let last_payment = state.payments_for(&lessee.id).max_by_key(|p| p.date);
        let (last_payment_date, days_since) = match last_payment {
            Some(payment) => (
                Some(payment.date),
                today.signed_duration_since(payment.date).num_days(),
            ),
            None => (
                None,
                today.signed_duration_since(lessee.start_date).num_days(),
            ),
        };

        let is_overdue = last_payment.is_none() || days_since > OVERDUE_THRESHOLD_DAYS;
        if is_overdue {
            let lease_amount = state
                .vehicle_for_lessee(lessee)
                .map(|v| v.lease_amount)
                .unwrap_or(0);
            rows.push(OverdueLessee {
                lessee_id: lessee.id.clone(),
                name: lessee.name.clone(),
                lease_amount,
                last_payment_date,
                days_since_last_payment: days_since,
            });
        }
    }

    rows
}

/// Tendencia mensual: esperado vs. cobrado en los últimos 6 meses
pub fn monthly_trend(state: &AppState, today: NaiveDate) -> Vec<TrendPoint> {
    let expected = expected_by_month(state, today);
    let collected = collected_by_month(state);

    let start = today
        .checked_sub_months(Months::new(TREND_MONTHS as u32 - 1))
        .unwrap_or(today);
    let mut key = MonthKey::from_date(start);

    let mut points = Vec::with_capacity(TREND_MONTHS);
    for _ in 0..TREND_MONTHS {
        points.push(TrendPoint {
            label: key.label(),
            expected: expected.get(&key).copied().unwrap_or(0),
            collected: collected.get(&key).copied().unwrap_or(0),
        });
        key = key.next();
    }

    points
}

/// Distribución de la flota por categoría
pub fn category_distribution(state: &AppState) -> CategoryDistribution {
    let mut distribution = CategoryDistribution {
        economy: 0,
        mid_range: 0,
        premium: 0,
    };

    for vehicle in &state.vehicles {
        match vehicle.category() {
            VehicleCategory::Economy => distribution.economy += 1,
            VehicleCategory::MidRange => distribution.mid_range += 1,
            VehicleCategory::Premium => distribution.premium += 1,
        }
    }

    distribution
}

/// Desglose de estado de pagos
///
/// Forma fija de demo para el gráfico de torta: no deriva de un estado real
/// por pago. La resta satura en cero para datasets chicos.
pub fn payment_status_breakdown(state: &AppState) -> PaymentStatusBreakdown {
    let total = state.payments.len();
    PaymentStatusBreakdown {
        on_time: total.saturating_sub(15),
        late: 10,
        missed: 5,
    }
}

/// Resumen completo para la vista general del dashboard
pub fn dashboard_summary(state: &AppState, today: NaiveDate) -> DashboardSummary {
    let leased = state.vehicles.iter().filter(|v| v.is_leased).count();
    let total_expected = total_expected(state, today);
    let total_collected = total_collected(state);
    let collection_rate = if total_expected > 0 {
        total_collected as f64 / total_expected as f64 * 100.0
    } else {
        0.0
    };

    DashboardSummary {
        date: today,
        total_vehicles: state.vehicles.len(),
        leased_vehicles: leased,
        available_vehicles: state.vehicles.len() - leased,
        total_lessees: state.lessees.len(),
        total_expected,
        total_collected,
        outstanding: total_expected - total_collected,
        collection_rate,
        overdue_lessees: overdue_lessees(state, today),
        monthly_trend: monthly_trend(state, today),
        categories: category_distribution(state),
        payment_status: payment_status_breakdown(state),
    }
}
