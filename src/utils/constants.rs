/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8069 (por defecto)
/// - Producción: via BACKEND_URL env var (.env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8069",
};

/// Selectores de montaje que el host busca en la página
pub const BOOKING_FORM_SELECTOR: &str = ".rental-booking-form";
pub const AVAILABILITY_SELECTOR: &str = ".bike-availability-check";

/// Elementos observados por la animación de entrada
pub const CARD_SELECTOR: &str = ".bike-card, .feature-card";
