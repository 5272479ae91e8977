//! Servicio de generación de datos sintéticos
//!
//! Este módulo produce el dataset inicial de la sesión: flota, arrendatarios
//! y un historial de pagos retro-datado, todo autoconsistente y sin entrada
//! externa. El RNG es sembrable para que la generación sea reproducible.

use chrono::{Duration, Months, NaiveDate};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::environment::EnvironmentConfig;
use crate::models::lessee::Lessee;
use crate::models::payment::{Payment, PaymentStatus};
use crate::models::vehicle::Vehicle;
use crate::state::{self, AppState};

/// Entrada del catálogo de marcas
struct CatalogEntry {
    make: &'static str,
    models: &'static [&'static str],
    /// Banda mensual de leasing [min, max] en euros
    band: (i64, i64),
}

static VEHICLE_CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        make: "Toyota",
        models: &["Corolla", "Camry", "RAV4"],
        band: (450, 700),
    },
    CatalogEntry {
        make: "Honda",
        models: &["Civic", "Accord", "CR-V"],
        band: (450, 700),
    },
    CatalogEntry {
        make: "Ford",
        models: &["Focus", "Escape", "Explorer"],
        band: (500, 750),
    },
    CatalogEntry {
        make: "Volkswagen",
        models: &["Golf", "Passat", "Tiguan"],
        band: (550, 800),
    },
    CatalogEntry {
        make: "Audi",
        models: &["A3", "A4", "Q5"],
        band: (850, 1300),
    },
    CatalogEntry {
        make: "BMW",
        models: &["Serie 3", "Serie 5", "X3"],
        band: (900, 1400),
    },
    CatalogEntry {
        make: "Mercedes-Benz",
        models: &["Clase A", "Clase C", "GLC"],
        band: (950, 1500),
    },
];

const COLOR_PALETTE: [&str; 6] = ["Blanco", "Negro", "Gris", "Plata", "Azul", "Rojo"];

const LESSEE_NAMES: [&str; 8] = [
    "María García",
    "Juan Martínez",
    "Carmen López",
    "Antonio Rodríguez",
    "Laura Fernández",
    "Carlos Sánchez",
    "Ana Pérez",
    "Diego Gómez",
];

/// Cuántos vehículos (en orden de generación) salen alquilados del seed
const SEEDED_LEASED_COUNT: usize = 12;

/// Arrendatarios a los que se les recortan los pagos recientes para
/// fabricar casos de mora deterministas en la demo
const OVERDUE_DEMO_LESSEES: [&str; 2] = ["LES-002", "LES-004"];

const AMOUNT_PERTURBATION_PROBABILITY: f64 = 0.2;
const MISSED_MONTH_PROBABILITY: f64 = 0.15;
const DELAYED_PAYMENT_PROBABILITY: f64 = 0.3;

/// Generador del dataset sintético de la sesión
pub struct SeedService {
    fleet_size: usize,
    lessee_count: usize,
    seed: Option<u64>,
}

impl SeedService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            fleet_size: config.fleet_size,
            lessee_count: config.lessee_count,
            seed: config.seed,
        }
    }

    /// Generar el estado inicial completo de la sesión
    pub fn generate(&self, today: NaiveDate) -> AppState {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(&mut rng, today)
    }

    /// Variante con RNG externo, para tests reproducibles
    pub fn generate_with_rng(&self, rng: &mut StdRng, today: NaiveDate) -> AppState {
        let lessee_count = self.lessee_count.min(LESSEE_NAMES.len());

        let vehicles = generate_vehicles(rng, self.fleet_size, lessee_count);
        let lessees = generate_lessees(rng, &vehicles, lessee_count, today);
        let payments = generate_payment_history(rng, &lessees, &vehicles, today);

        debug!(
            "Dataset sintético: {} vehículos, {} arrendatarios, {} pagos",
            vehicles.len(),
            lessees.len(),
            payments.len()
        );

        AppState {
            vehicles,
            lessees,
            payments,
        }
    }
}

/// Generar la flota
///
/// Los primeros `SEEDED_LEASED_COUNT` vehículos salen alquilados y se
/// asignan de a pares al arrendatario `index / 2`. Ese apareamiento de dos
/// vehículos por arrendatario es una particularidad del seed, no un
/// invariante del sistema: el flujo de registro posterior es estrictamente
/// un vehículo por arrendatario.
fn generate_vehicles(rng: &mut StdRng, count: usize, lessee_count: usize) -> Vec<Vehicle> {
    let mut vehicles = Vec::with_capacity(count);

    for index in 0..count {
        let entry = &VEHICLE_CATALOG[rng.gen_range(0..VEHICLE_CATALOG.len())];
        let model = entry.models[rng.gen_range(0..entry.models.len())];
        let year = rng.gen_range(2019..=2023);
        let color = COLOR_PALETTE[rng.gen_range(0..COLOR_PALETTE.len())];
        let lease_amount = rng.gen_range(entry.band.0..=entry.band.1);

        let lessee_index = index / 2;
        let lessee_id = if index < SEEDED_LEASED_COUNT && lessee_index < lessee_count {
            Some(state::lessee_id(lessee_index))
        } else {
            None
        };

        vehicles.push(Vehicle {
            id: state::vehicle_id(index),
            make: entry.make.to_string(),
            model: model.to_string(),
            year,
            color: color.to_string(),
            lease_amount,
            is_leased: lessee_id.is_some(),
            lessee_id,
        });
    }

    vehicles
}

/// Generar los arrendatarios y vincularlos con la flota
fn generate_lessees(
    rng: &mut StdRng,
    vehicles: &[Vehicle],
    count: usize,
    today: NaiveDate,
) -> Vec<Lessee> {
    let mut lessees = Vec::with_capacity(count);

    for index in 0..count {
        let id = state::lessee_id(index);
        let name = LESSEE_NAMES[index];
        let months_back = rng.gen_range(0..=11u32);
        let start_date = today
            .checked_sub_months(Months::new(months_back))
            .unwrap_or(today);

        // El arrendatario queda vinculado al primer vehículo que lo nombró
        let vehicle_id = vehicles
            .iter()
            .find(|v| v.lessee_id.as_deref() == Some(id.as_str()))
            .map(|v| v.id.clone());

        lessees.push(Lessee {
            id,
            name: name.to_string(),
            email: synthesize_email(name),
            phone: synthesize_phone(rng),
            vehicle_id,
            start_date,
        });
    }

    lessees
}

/// Generar el historial de pagos retro-datado
///
/// Para cada arrendatario con vehículo se recorren los meses calendario
/// desde su fecha de inicio hasta hoy: el monto base es el leasing del
/// vehículo, a veces perturbado ±20%, a veces el mes se salta por completo
/// y a veces el pago llega con hasta 14 días de atraso.
fn generate_payment_history(
    rng: &mut StdRng,
    lessees: &[Lessee],
    vehicles: &[Vehicle],
    today: NaiveDate,
) -> Vec<Payment> {
    let mut payments: Vec<Payment> = Vec::new();

    for lessee in lessees {
        let vehicle = lessee
            .vehicle_id
            .as_deref()
            .and_then(|id| vehicles.iter().find(|v| v.id == id));
        let Some(vehicle) = vehicle else {
            continue;
        };

        let mut due_date = lessee.start_date;
        while due_date <= today {
            let missed = rng.gen_bool(MISSED_MONTH_PROBABILITY);
            if !missed {
                let mut amount = vehicle.lease_amount;
                if rng.gen_bool(AMOUNT_PERTURBATION_PROBABILITY) {
                    let factor = rng.gen_range(0.8..=1.2);
                    amount = (vehicle.lease_amount as f64 * factor).round() as i64;
                }

                let mut date = due_date;
                if rng.gen_bool(DELAYED_PAYMENT_PROBABILITY) {
                    date += Duration::days(rng.gen_range(1..=14));
                }
                // El historial nunca llega al futuro
                if date > today {
                    date = today;
                }

                payments.push(Payment {
                    id: state::payment_id(payments.len()),
                    lessee_id: lessee.id.clone(),
                    amount,
                    date,
                    status: PaymentStatus::Completed,
                });
            }

            due_date = match due_date.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
    }

    // Recorte de pagos recientes para fabricar morosos deterministas
    let cutoff = today.checked_sub_months(Months::new(2)).unwrap_or(today);
    payments.retain(|p| {
        !(OVERDUE_DEMO_LESSEES.contains(&p.lessee_id.as_str()) && p.date > cutoff)
    });

    // Reasignar ids tras el recorte para mantener la secuencia sin huecos
    for (index, payment) in payments.iter_mut().enumerate() {
        payment.id = state::payment_id(index);
    }

    payments
}

/// Sintetizar un email a partir del nombre completo
fn synthesize_email(name: &str) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            ' ' => '.',
            other => other,
        })
        .collect();
    format!("{}@example.com", local)
}

/// Sintetizar un teléfono móvil con dígitos aleatorios
fn synthesize_phone(rng: &mut StdRng) -> String {
    format!(
        "06 {:02} {:02} {:02} {:02}",
        rng.gen_range(0..100),
        rng.gen_range(0..100),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    )
}
