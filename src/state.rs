//! Shared application state
//!
//! Este módulo define el estado de la aplicación: las tres colecciones en
//! memoria que alimentan todas las vistas. El estado se pasa explícitamente
//! a las operaciones de mutación; hay exactamente un escritor lógico (la
//! interacción de usuario en curso), así que no se necesita locking.

use crate::models::lessee::Lessee;
use crate::models::payment::Payment;
use crate::models::vehicle::Vehicle;

/// Estado completo de la sesión: flota, arrendatarios y pagos
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub vehicles: Vec<Vehicle>,
    pub lessees: Vec<Lessee>,
    pub payments: Vec<Payment>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buscar un vehículo por id
    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_vehicle_mut(&mut self, id: &str) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }

    /// Buscar un arrendatario por id
    pub fn find_lessee(&self, id: &str) -> Option<&Lessee> {
        self.lessees.iter().find(|l| l.id == id)
    }

    /// Vehículo vinculado a un arrendatario, si lo hay
    pub fn vehicle_for_lessee(&self, lessee: &Lessee) -> Option<&Vehicle> {
        lessee
            .vehicle_id
            .as_deref()
            .and_then(|id| self.find_vehicle(id))
    }

    /// Pagos registrados de un arrendatario
    pub fn payments_for<'a>(&'a self, lessee_id: &'a str) -> impl Iterator<Item = &'a Payment> + 'a {
        self.payments.iter().filter(move |p| p.lessee_id == lessee_id)
    }

    // Los ids se asignan monotónicamente a partir del largo actual de cada
    // colección. No son únicos entre reinicios de sesión; el dataset es
    // efímero y se regenera completo en cada arranque.

    pub fn next_vehicle_id(&self) -> String {
        vehicle_id(self.vehicles.len())
    }

    pub fn next_lessee_id(&self) -> String {
        lessee_id(self.lessees.len())
    }

    pub fn next_payment_id(&self) -> String {
        payment_id(self.payments.len())
    }
}

/// Id de vehículo para el índice dado (base cero)
pub fn vehicle_id(index: usize) -> String {
    format!("VEH-{:03}", index + 1)
}

/// Id de arrendatario para el índice dado (base cero)
pub fn lessee_id(index: usize) -> String {
    format!("LES-{:03}", index + 1)
}

/// Id de pago para el índice dado (base cero)
pub fn payment_id(index: usize) -> String {
    format!("PAY-{:04}", index + 1)
}
