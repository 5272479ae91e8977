//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el generador
//! de datos sintéticos, el motor de métricas derivadas y las operaciones de
//! mutación del estado.

pub mod leasing_service;
pub mod metrics_service;
pub mod seed_service;

pub use seed_service::*;
// metrics_service y leasing_service se usan calificados desde los controllers
