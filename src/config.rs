use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parsear la configuración que el host incrusta en la página
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Configuración inválida: {}", e))
    }
}

/// Parámetros de la interfaz: latencias simuladas y animaciones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Latencia simulada de la ficha de bici (ms)
    pub bike_details_delay_ms: u32,
    /// Latencia simulada de la verificación de disponibilidad (ms)
    pub availability_delay_ms: u32,
    /// Duración de la animación de scroll hacia anclas (ms)
    pub scroll_duration_ms: f64,
    /// Offset del header fijo al hacer scroll hacia un ancla (px)
    pub header_offset_px: f64,
    /// Fracción visible de una card para disparar la animación de entrada
    pub reveal_threshold: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bike_details_delay_ms: 500,
            availability_delay_ms: 1000,
            scroll_duration_ms: 800.0,
            header_offset_px: 80.0,
            reveal_threshold: 0.1,
        }
    }
}
