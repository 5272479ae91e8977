//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del entorno y del generador
//! de datos sintéticos.

pub mod environment;

pub use environment::*;
