use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use tracing::info;

use vehicle_leasing::config::environment::EnvironmentConfig;
use vehicle_leasing::controllers::dashboard_controller::DashboardController;
use vehicle_leasing::dto::lessee_dto::RegisterLesseeRequest;
use vehicle_leasing::dto::payment_dto::RecordPaymentRequest;
use vehicle_leasing::services::seed_service::SeedService;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Vehicle Leasing Dashboard - Núcleo en memoria");
    info!("================================================");

    let config = EnvironmentConfig::default();
    if config.is_development() {
        info!("🔧 Modo desarrollo (semilla: {:?})", config.seed);
    }
    let today = Utc::now().date_naive();

    // Generar el dataset sintético de la sesión
    let mut state = SeedService::new(&config).generate(today);
    info!(
        "✅ Dataset generado: {} vehículos, {} arrendatarios, {} pagos",
        state.vehicles.len(),
        state.lessees.len(),
        state.payments.len()
    );

    let controller = DashboardController::new();

    // Vista general
    let summary = controller.overview(&state, today);
    info!("📊 Vista general:");
    info!(
        "   Flota: {} total, {} alquilados, {} disponibles",
        summary.total_vehicles, summary.leased_vehicles, summary.available_vehicles
    );
    info!(
        "   Esperado: {} € | Cobrado: {} € | Pendiente: {} €",
        summary.total_expected, summary.total_collected, summary.outstanding
    );
    info!("   Tasa de cobro: {:.1}%", summary.collection_rate);
    info!("   Morosos: {}", summary.overdue_lessees.len());
    for row in &summary.overdue_lessees {
        info!(
            "   ⚠️  {} - {} días sin pagar",
            row.name, row.days_since_last_payment
        );
    }
    info!(
        "   Tendencia (6 meses): {}",
        serde_json::to_string(&summary.monthly_trend)?
    );
    info!(
        "   Categorías: {}",
        serde_json::to_string(&summary.categories)?
    );

    // Demo de las dos acciones de usuario
    if let Some(vehicle) = state.vehicles.iter().find(|v| v.is_available()).cloned() {
        let registration = RegisterLesseeRequest {
            name: "Lucía Navarro".to_string(),
            email: "lucia.navarro@example.com".to_string(),
            phone: "06 44 55 66 77".to_string(),
            vehicle_id: vehicle.id.clone(),
        };
        let response = controller.submit_registration(&mut state, &registration, today);
        info!(
            "📝 Registro sobre {}: {}",
            vehicle.id,
            response.message.unwrap_or_default()
        );

        if let Some(lessee) = response.data {
            let payment = RecordPaymentRequest {
                lessee_id: lessee.id,
                amount: vehicle.lease_amount.to_string(),
                date: today.format("%Y-%m-%d").to_string(),
            };
            let response = controller.submit_payment(&mut state, &payment);
            info!("💶 Pago: {}", response.message.unwrap_or_default());
        }
    }

    // Tabla de flota
    let fleet = controller.fleet_table(&state);
    info!("🚙 Tabla de flota: {} filas", fleet.len());
    for row in fleet.iter().take(5) {
        info!(
            "   {} {} {} - {} €/mes ({})",
            row.year, row.make, row.model, row.lease_amount, row.status
        );
    }

    info!("👋 Fin de la demo");
    Ok(())
}
