//! DTOs del sistema
//!
//! Este módulo contiene los requests de los formularios, las responses
//! tipadas de cada vista y la response genérica de acciones.

pub mod dashboard_dto;
pub mod lessee_dto;
pub mod payment_dto;
