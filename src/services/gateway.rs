// ============================================================================
// RENTAL GATEWAY - SOLO COMUNICACIÓN CON EL BACKEND (Stateless)
// ============================================================================
// Los widgets dependen del trait, no de una implementación concreta:
// - SimulatedGateway: respuestas fijas con latencia simulada (demo/tests)
// - HttpGateway: llamadas reales al backend vía gloo-net
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::UiConfig;
use crate::models::{Availability, BikeDetails};
use crate::utils::constants::BACKEND_URL;

/// Acceso abstracto a los datos de alquiler que consumen los widgets
pub trait RentalGateway {
    /// Ficha informativa de una bici (caución, estado, seguro)
    fn fetch_bike_details(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<BikeDetails, String>>;

    /// Consulta de disponibilidad en tiempo real
    fn check_availability(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<Availability, String>>;
}

/// Gateway simulado: latencia fija y datos estáticos.
/// Es el que monta la app mientras el backend no expone estos endpoints.
#[derive(Clone)]
pub struct SimulatedGateway {
    details_delay_ms: u32,
    availability_delay_ms: u32,
}

impl SimulatedGateway {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            details_delay_ms: ui.bike_details_delay_ms,
            availability_delay_ms: ui.availability_delay_ms,
        }
    }

    /// Variante sin latencia, para tests
    pub fn instant() -> Self {
        Self {
            details_delay_ms: 0,
            availability_delay_ms: 0,
        }
    }
}

impl RentalGateway for SimulatedGateway {
    fn fetch_bike_details(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<BikeDetails, String>> {
        let delay = self.details_delay_ms;
        let bike_id = bike_id.to_string();

        Box::pin(async move {
            log::info!("🚲 Cargando ficha simulada de la bici {}", bike_id);
            TimeoutFuture::new(delay).await;

            Ok(BikeDetails {
                deposit_eur: 200.0,
                condition: "Excellent".to_string(),
                insurance_per_day_eur: Some(5.0),
            })
        })
    }

    fn check_availability(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<Availability, String>> {
        let delay = self.availability_delay_ms;
        let bike_id = bike_id.to_string();

        Box::pin(async move {
            log::info!("🔍 Verificación simulada de disponibilidad de la bici {}", bike_id);
            TimeoutFuture::new(delay).await;

            Ok(Availability { available: true })
        })
    }
}

/// Gateway real contra el backend configurado en BACKEND_URL
#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalGateway for HttpGateway {
    fn fetch_bike_details(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<BikeDetails, String>> {
        let url = format!("{}/rental/bike/{}/details", self.base_url, bike_id);

        Box::pin(async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.ok() {
                return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
            }

            response
                .json::<BikeDetails>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        })
    }

    fn check_availability(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<Availability, String>> {
        let url = format!("{}/rental/bike/{}/availability", self.base_url, bike_id);

        Box::pin(async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.ok() {
                return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
            }

            response
                .json::<Availability>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        })
    }
}
