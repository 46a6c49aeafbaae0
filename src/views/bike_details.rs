// ============================================================================
// BIKE DETAILS VIEW - Ficha informativa de la bici seleccionada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::BikeDetails;

/// Placeholder mientras llega la ficha de la bici
pub fn render_bike_loading() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("text-center")
        .html("<i class=\"fa fa-spinner fa-spin\"></i> Chargement...")
        .build();
    Ok(container)
}

/// Ficha informativa: caución, estado y seguro opcional
pub fn render_bike_details(details: &BikeDetails) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h4")?
        .text("Informations du vélo")
        .build();

    let deposit = ElementBuilder::new("p")?
        .html(&format!(
            "<strong>Caution:</strong> {:.0}€",
            details.deposit_eur
        ))
        .build();

    let condition = ElementBuilder::new("p")?
        .html(&format!("<strong>État:</strong> {}", details.condition))
        .build();

    let builder = ElementBuilder::new("div")?
        .class("bike-details")
        .child(title)?
        .child(deposit)?
        .child(condition)?;

    // El seguro solo se muestra si la bici lo ofrece
    let builder = match details.insurance_per_day_eur {
        Some(per_day) => {
            let insurance = ElementBuilder::new("p")?
                .html(&format!(
                    "<strong>Assurance:</strong> Disponible (+{:.0}€/jour)",
                    per_day
                ))
                .build();
            builder.child(insurance)?
        }
        None => builder,
    };

    Ok(builder.build())
}

/// Bloque de error cuando falla la carga de la ficha
pub fn render_bike_error(message: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("bike-details bike-details-error")
        .build();

    let text = ElementBuilder::new("p")?
        .class("text-danger")
        .text(&format!("Impossible de charger les informations: {}", message))
        .build();

    crate::dom::append_child(&container, &text)?;
    Ok(container)
}
