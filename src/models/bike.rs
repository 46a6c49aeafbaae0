// ============================================================================
// BIKE MODELS - Datos de la bici devueltos por el gateway
// ============================================================================

use serde::{Deserialize, Serialize};

/// Ficha informativa de una bici de alquiler (caución, estado, seguro opcional)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeDetails {
    pub deposit_eur: f64,
    pub condition: String,
    /// Suplemento de seguro por día, si el seguro está disponible
    #[serde(default)]
    pub insurance_per_day_eur: Option<f64>,
}

/// Resultado de la consulta de disponibilidad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
}
