use chrono::NaiveDate;

use vehicle_leasing::config::environment::EnvironmentConfig;
use vehicle_leasing::models::lessee::Lessee;
use vehicle_leasing::models::payment::{Payment, PaymentStatus};
use vehicle_leasing::models::vehicle::{Vehicle, VehicleCategory};
use vehicle_leasing::services::seed_service::SeedService;
use vehicle_leasing::services::metrics_service;
use vehicle_leasing::state::AppState;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_state(seed: u64, today: NaiveDate) -> AppState {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        fleet_size: 20,
        lessee_count: 8,
        seed: Some(seed),
    };
    SeedService::new(&config).generate(today)
}

fn test_vehicle(id: &str, lease_amount: i64, lessee_id: Option<&str>) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2021,
        color: "Gris".to_string(),
        lease_amount,
        is_leased: lessee_id.is_some(),
        lessee_id: lessee_id.map(|s| s.to_string()),
    }
}

fn test_lessee(id: &str, vehicle_id: Option<&str>, start_date: NaiveDate) -> Lessee {
    Lessee {
        id: id.to_string(),
        name: "Carmen López".to_string(),
        email: "carmen.lopez@example.com".to_string(),
        phone: "06 11 22 33 44".to_string(),
        vehicle_id: vehicle_id.map(|s| s.to_string()),
        start_date,
    }
}

fn test_payment(id: &str, lessee_id: &str, amount: i64, payment_date: NaiveDate) -> Payment {
    Payment {
        id: id.to_string(),
        lessee_id: lessee_id.to_string(),
        amount,
        date: payment_date,
        status: PaymentStatus::Completed,
    }
}

#[test]
fn test_generated_dataset_counts() {
    let today = date(2025, 8, 7);
    let state = seeded_state(42, today);

    assert_eq!(state.vehicles.len(), 20);
    assert_eq!(state.lessees.len(), 8);

    let leased = state.vehicles.iter().filter(|v| v.is_leased).count();
    assert_eq!(leased, 12);

    // Los ids siguientes continúan la secuencia del seed
    assert_eq!(state.next_vehicle_id(), "VEH-021");
    assert_eq!(state.next_lessee_id(), "LES-009");
}

#[test]
fn test_generated_dataset_cross_references_are_consistent() {
    let today = date(2025, 8, 7);
    let state = seeded_state(42, today);

    // Todo vehículo alquilado referencia un arrendatario existente
    for vehicle in &state.vehicles {
        assert_eq!(vehicle.is_leased, vehicle.lessee_id.is_some());
        if let Some(lessee_id) = vehicle.lessee_id.as_deref() {
            assert!(state.find_lessee(lessee_id).is_some());
        }
    }

    // Todo arrendatario con vehículo apunta a un vehículo alquilado que
    // referencia de vuelta a ese arrendatario
    for lessee in &state.lessees {
        if let Some(vehicle_id) = lessee.vehicle_id.as_deref() {
            let vehicle = state.find_vehicle(vehicle_id).unwrap();
            assert!(vehicle.is_leased);
            assert_eq!(vehicle.lessee_id.as_deref(), Some(lessee.id.as_str()));
        }
    }
}

#[test]
fn test_generated_payments_are_positive_and_not_in_the_future() {
    let today = date(2025, 8, 7);
    let state = seeded_state(7, today);

    assert!(!state.payments.is_empty());
    for payment in &state.payments {
        assert!(payment.amount > 0);
        assert!(payment.date <= today);
        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(state.find_lessee(&payment.lessee_id).is_some());
    }
}

#[test]
fn test_generated_payment_ids_are_unique_and_sequential() {
    let today = date(2025, 8, 7);
    let state = seeded_state(42, today);

    for (index, payment) in state.payments.iter().enumerate() {
        assert_eq!(payment.id, format!("PAY-{:04}", index + 1));
    }
}

#[test]
fn test_generation_is_reproducible_with_same_seed() {
    let today = date(2025, 8, 7);
    let first = seeded_state(123, today);
    let second = seeded_state(123, today);

    let first_json = serde_json::to_string(&first.vehicles).unwrap();
    let second_json = serde_json::to_string(&second.vehicles).unwrap();
    assert_eq!(first_json, second_json);

    let first_json = serde_json::to_string(&first.payments).unwrap();
    let second_json = serde_json::to_string(&second.payments).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_demo_overdue_lessees_appear_in_overdue_list() {
    let today = date(2025, 8, 7);
    let state = seeded_state(42, today);

    let overdue = metrics_service::overdue_lessees(&state, today);
    let ids: Vec<&str> = overdue.iter().map(|o| o.lessee_id.as_str()).collect();
    assert!(ids.contains(&"LES-002"));
    assert!(ids.contains(&"LES-004"));
}

#[test]
fn test_expected_by_month_accumulates_from_start_to_current_month() {
    let today = date(2024, 3, 20);
    let mut state = AppState::new();
    state.vehicles.push(test_vehicle("VEH-001", 500, Some("LES-001")));
    state.lessees.push(test_lessee("LES-001", Some("VEH-001"), date(2024, 1, 10)));

    let expected = metrics_service::expected_by_month(&state, today);
    assert_eq!(expected.len(), 3);
    assert!(expected.values().all(|&amount| amount == 500));
    assert_eq!(metrics_service::total_expected(&state, today), 1500);
}

#[test]
fn test_collected_by_month_buckets_payments_by_payment_date() {
    let today = date(2024, 3, 20);
    let mut state = AppState::new();
    state.vehicles.push(test_vehicle("VEH-001", 500, Some("LES-001")));
    state.lessees.push(test_lessee("LES-001", Some("VEH-001"), date(2024, 1, 10)));
    state.payments.push(test_payment("PAY-0001", "LES-001", 500, date(2024, 1, 12)));
    state.payments.push(test_payment("PAY-0002", "LES-001", 480, date(2024, 2, 15)));

    let collected = metrics_service::collected_by_month(&state);
    assert_eq!(collected.len(), 2);
    assert_eq!(metrics_service::total_collected(&state), 980);

    let summary = metrics_service::dashboard_summary(&state, today);
    assert_eq!(summary.total_expected, 1500);
    assert_eq!(summary.total_collected, 980);
    assert_eq!(summary.outstanding, 520);
}

#[test]
fn test_lessee_without_payments_is_overdue_since_start_date() {
    let today = date(2024, 5, 15);
    let mut state = AppState::new();
    state.vehicles.push(test_vehicle("VEH-001", 700, Some("LES-001")));
    state.lessees.push(test_lessee("LES-001", Some("VEH-001"), date(2024, 4, 1)));

    let overdue = metrics_service::overdue_lessees(&state, today);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].lessee_id, "LES-001");
    assert_eq!(overdue[0].last_payment_date, None);
    assert_eq!(overdue[0].days_since_last_payment, 44);
}

#[test]
fn test_overdue_boundary_is_strictly_more_than_30_days() {
    let today = date(2024, 6, 30);
    let mut state = AppState::new();
    state.vehicles.push(test_vehicle("VEH-001", 700, Some("LES-001")));
    state.lessees.push(test_lessee("LES-001", Some("VEH-001"), date(2024, 1, 1)));

    // Exactamente 30 días: al día
    state.payments.push(test_payment("PAY-0001", "LES-001", 700, date(2024, 5, 31)));
    assert!(metrics_service::overdue_lessees(&state, today).is_empty());

    // Exactamente 31 días: en mora
    state.payments[0].date = date(2024, 5, 30);
    let overdue = metrics_service::overdue_lessees(&state, today);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].days_since_last_payment, 31);
    assert_eq!(overdue[0].last_payment_date, Some(date(2024, 5, 30)));
}

#[test]
fn test_lessee_without_vehicle_is_never_overdue() {
    let today = date(2024, 6, 30);
    let mut state = AppState::new();
    state.lessees.push(test_lessee("LES-001", None, date(2024, 1, 1)));

    assert!(metrics_service::overdue_lessees(&state, today).is_empty());
}

#[test]
fn test_monthly_trend_covers_trailing_six_months() {
    let today = date(2024, 3, 20);
    let mut state = AppState::new();
    state.vehicles.push(test_vehicle("VEH-001", 500, Some("LES-001")));
    state.lessees.push(test_lessee("LES-001", Some("VEH-001"), date(2024, 1, 10)));
    state.payments.push(test_payment("PAY-0001", "LES-001", 500, date(2024, 1, 12)));

    let trend = metrics_service::monthly_trend(&state, today);
    assert_eq!(trend.len(), 6);

    let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Oct 23", "Nov 23", "Dec 23", "Jan 24", "Feb 24", "Mar 24"]);

    // Sin contrato no hay monto esperado; desde enero se esperan 500 por mes
    assert_eq!(trend[2].expected, 0);
    assert_eq!(trend[3].expected, 500);
    assert_eq!(trend[3].collected, 500);
    assert_eq!(trend[5].expected, 500);
    assert_eq!(trend[5].collected, 0);
}

#[test]
fn test_category_boundaries() {
    assert_eq!(VehicleCategory::from_lease_amount(599), VehicleCategory::Economy);
    assert_eq!(VehicleCategory::from_lease_amount(600), VehicleCategory::MidRange);
    assert_eq!(VehicleCategory::from_lease_amount(899), VehicleCategory::MidRange);
    assert_eq!(VehicleCategory::from_lease_amount(900), VehicleCategory::Premium);
}

#[test]
fn test_category_distribution_partitions_the_fleet() {
    let today = date(2025, 8, 7);
    let state = seeded_state(99, today);

    let distribution = metrics_service::category_distribution(&state);
    assert_eq!(distribution.total(), state.vehicles.len());
}

#[test]
fn test_payment_status_breakdown_never_goes_negative() {
    let mut state = AppState::new();
    state.payments.push(test_payment("PAY-0001", "LES-001", 500, date(2024, 1, 12)));

    let breakdown = metrics_service::payment_status_breakdown(&state);
    assert_eq!(breakdown.on_time, 0);
    assert_eq!(breakdown.late, 10);
    assert_eq!(breakdown.missed, 5);
}

#[test]
fn test_collection_rate_is_zero_when_nothing_is_expected() {
    let today = date(2024, 3, 20);
    let state = AppState::new();

    let summary = metrics_service::dashboard_summary(&state, today);
    assert_eq!(summary.total_expected, 0);
    assert_eq!(summary.collection_rate, 0.0);
}
