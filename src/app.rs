// ============================================================================
// APP - Host de los widgets del escaparate
// ============================================================================
// Descubre los subtrees del DOM que matchean los selectores de montaje y
// monta un widget por cada uno. Los widgets no se buscan entre sí: cada
// uno opera sobre su propio subtree.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::dom::query_all;
use crate::services::{RentalGateway, SimulatedGateway};
use crate::utils::constants::{AVAILABILITY_SELECTOR, BOOKING_FORM_SELECTOR};
use crate::widgets::{AvailabilityProbe, PriceEstimator, ScrollEnhancer, Widget};

/// Aplicación principal: posee los widgets montados
pub struct App {
    widgets: Vec<Box<dyn Widget>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        // Gateway simulado mientras el backend no expone los endpoints
        // de ficha/disponibilidad. Sustituible por HttpGateway.
        let gateway: Rc<dyn RentalGateway> = Rc::new(SimulatedGateway::new(&config.ui));

        let mut widgets: Vec<Box<dyn Widget>> = Vec::new();

        // Un estimador de precio por formulario de reserva presente
        for form in query_all(BOOKING_FORM_SELECTOR)? {
            let mut estimator = PriceEstimator::new(gateway.clone());
            estimator.mount(&form)?;
            widgets.push(Box::new(estimator));
        }

        // Un probe por control de disponibilidad presente
        for control in query_all(AVAILABILITY_SELECTOR)? {
            let mut probe = AvailabilityProbe::new(gateway.clone());
            probe.mount(&control)?;
            widgets.push(Box::new(probe));
        }

        // Mejoras de scroll a nivel de documento
        if let Some(root) = crate::dom::document().and_then(|d| d.document_element()) {
            let mut scroll = ScrollEnhancer::new(config.ui.clone());
            scroll.mount(&root)?;
            widgets.push(Box::new(scroll));
        }

        log::info!("✅ [APP] {} widgets montados", widgets.len());

        Ok(Self { widgets })
    }

    /// Desmontar todos los widgets (navegación/teardown del host)
    pub fn unmount_all(&mut self) {
        for widget in self.widgets.iter_mut() {
            widget.unmount();
        }
        self.widgets.clear();
        log::info!("🧹 [APP] Widgets desmontados");
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }
}
