//! Modelos de Analytics
//!
//! Este módulo contiene los tipos que alimentan la vista general del
//! dashboard: resumen, tendencia mensual, morosidad y distribuciones.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Clave de agrupación año-mes para los buckets de pagos
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Mes calendario siguiente
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Etiqueta "mes abreviado + año de 2 dígitos", ej. "Mar 25"
    pub fn label(&self) -> String {
        let index = (self.month.clamp(1, 12) - 1) as usize;
        format!("{} {:02}", MONTH_ABBREVIATIONS[index], self.year.rem_euclid(100))
    }
}

/// Punto de la tendencia mensual: esperado vs. cobrado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub expected: i64,
    pub collected: i64,
}

/// Arrendatario en mora
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverdueLessee {
    pub lessee_id: String,
    pub name: String,
    pub lease_amount: i64,
    pub last_payment_date: Option<NaiveDate>,
    pub days_since_last_payment: i64,
}

/// Distribución de la flota por categoría de leasing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDistribution {
    pub economy: usize,
    pub mid_range: usize,
    pub premium: usize,
}

impl CategoryDistribution {
    pub fn total(&self) -> usize {
        self.economy + self.mid_range + self.premium
    }
}

/// Desglose de estado de pagos para el gráfico del dashboard
///
/// Forma fija de demo: no deriva de un estado real por pago.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentStatusBreakdown {
    pub on_time: usize,
    pub late: usize,
    pub missed: usize,
}

/// Resumen para la vista general del dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,

    // Resumen de flota
    pub total_vehicles: usize,
    pub leased_vehicles: usize,
    pub available_vehicles: usize,
    pub total_lessees: usize,

    // Métricas financieras
    pub total_expected: i64,
    pub total_collected: i64,
    pub outstanding: i64,
    pub collection_rate: f64,

    // Morosidad
    pub overdue_lessees: Vec<OverdueLessee>,

    // Datos de gráficos
    pub monthly_trend: Vec<TrendPoint>,
    pub categories: CategoryDistribution,
    pub payment_status: PaymentStatusBreakdown,
}
