// ============================================================================
// WIDGETS - Componentes de UI con ciclo de vida explícito
// ============================================================================
// El host (App) descubre los subtrees del DOM y llama a mount/unmount.
// Cada widget posee en exclusiva el subtree donde se monta: resuelve sus
// sub-elementos UNA vez en mount, no re-consulta por evento.
// ============================================================================

pub mod availability_probe;
pub mod price_estimator;
pub mod scroll_enhancer;

pub use availability_probe::{AvailabilityProbe, ProbeState};
pub use price_estimator::PriceEstimator;
pub use scroll_enhancer::ScrollEnhancer;

use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Ciclo de vida de un componente de UI
pub trait Widget {
    /// Montar el widget sobre un subtree del DOM.
    /// Resuelve referencias a sub-elementos y registra listeners.
    fn mount(&mut self, root: &Element) -> Result<(), JsValue>;

    /// Desmontar: remover listeners y soltar referencias al DOM
    fn unmount(&mut self);
}
