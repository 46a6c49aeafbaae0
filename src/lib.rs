// ============================================================================
// BIKE STORE APP - FRONTEND DEL ESCAPARATE (RUST PURO)
// ============================================================================
// Tres componentes independientes sobre el DOM de la tienda:
// - PriceEstimator: presupuesto automático del formulario de reserva
// - AvailabilityProbe: verificación one-shot de disponibilidad
// - ScrollEnhancer: scroll suave hacia anclas + animación de entrada
// Sin flujo de datos entre ellos: cada widget posee su subtree.
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;
pub mod widgets;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

// Instancia global de la app mientras la página vive
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let config = AppConfig::default();

    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!("🚲 Bike Store App ({})", config.environment);

    let app = App::new(config)?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Remontar la app con una configuración JSON provista por el host.
/// Desmonta la instancia anterior si la hay.
#[wasm_bindgen]
pub fn mount_app_with_config(json: &str) -> Result<(), JsValue> {
    unmount_app();

    let config = AppConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    let app = App::new(config)?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Desmontar todos los widgets. Lo invoca el host al desmontar la página.
#[wasm_bindgen]
pub fn unmount_app() {
    APP.with(|cell| {
        if let Some(mut app) = cell.borrow_mut().take() {
            app.unmount_all();
        }
    });
}
