// ============================================================================
// BOOKING MODELS - Selección del formulario de reserva y presupuesto derivado
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tipo de alquiler: determina la unidad de duración y la tarifa aplicable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalType {
    Hour,
    Day,
    Week,
    Month,
}

impl RentalType {
    /// Parsear el valor crudo del `<select name="rental_type">`.
    /// Valores desconocidos devuelven None (el total se queda en 0).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// Tarifa unitaria fija en euros (tabla estática del escaparate)
    pub fn unit_price(self) -> f64 {
        match self {
            Self::Hour => 5.0,
            Self::Day => 15.0,
            Self::Week => 60.0,
            Self::Month => 200.0,
        }
    }
}

/// Selección cruda del formulario de reserva, tal cual la emiten los inputs.
/// No se valida nada aquí: el viewmodel decide qué es computable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSelection {
    pub bike_id: String,
    pub rental_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl BookingSelection {
    /// El resumen de precio solo se muestra con los cuatro campos rellenos
    pub fn is_complete(&self) -> bool {
        !self.bike_id.is_empty()
            && !self.rental_type.is_empty()
            && !self.start_date.is_empty()
            && !self.end_date.is_empty()
    }
}

/// Presupuesto derivado: se recalcula en cada cambio, nunca se persiste
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub duration_hours: i64,
    pub total_price: f64,
}
