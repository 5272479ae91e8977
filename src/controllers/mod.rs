//! Controllers del sistema
//!
//! Este módulo contiene la capa que envuelve los servicios en las vistas
//! que consume la presentación.

pub mod dashboard_controller;
