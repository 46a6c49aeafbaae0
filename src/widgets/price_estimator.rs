// ============================================================================
// PRICE ESTIMATOR - Presupuesto automático del formulario de reserva
// ============================================================================
// Reacciona a cambios de bici, tipo de alquiler y fechas: recalcula el
// presupuesto (viewmodel puro) y actualiza el resumen. Al cambiar de bici
// además dispara la carga asíncrona de la ficha informativa.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::dom::{
    append_child, hide_element, query_within, set_inner_html, set_text_content, show_element,
    ListenerHandle,
};
use crate::models::BookingSelection;
use crate::services::RentalGateway;
use crate::viewmodels::{compute_quote, format_duration, format_price};
use crate::views::{render_bike_details, render_bike_error, render_bike_loading};
use crate::widgets::Widget;

/// Referencias a los sub-elementos del formulario, resueltas una vez en mount
struct FormRefs {
    bike_select: HtmlSelectElement,
    type_select: HtmlSelectElement,
    start_input: HtmlInputElement,
    end_input: HtmlInputElement,
    summary: Element,
    duration_display: Element,
    price_display: Element,
    bike_info: Element,
}

pub struct PriceEstimator {
    gateway: Rc<dyn RentalGateway>,
    refs: Option<Rc<FormRefs>>,
    listeners: Vec<ListenerHandle>,
    /// Generación del fetch de ficha en curso: las respuestas con una
    /// generación antigua se descartan (una selección nueva las supersede)
    fetch_generation: Rc<Cell<u64>>,
}

impl PriceEstimator {
    pub fn new(gateway: Rc<dyn RentalGateway>) -> Self {
        Self {
            gateway,
            refs: None,
            listeners: Vec::new(),
            fetch_generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.refs.is_some()
    }

    fn resolve_refs(root: &Element) -> Result<FormRefs, JsValue> {
        Ok(FormRefs {
            bike_select: cast(query_within(root, "select[name=\"bike_id\"]")?)?,
            type_select: cast(query_within(root, "select[name=\"rental_type\"]")?)?,
            start_input: cast(query_within(root, "input[name=\"start_date\"]")?)?,
            end_input: cast(query_within(root, "input[name=\"end_date\"]")?)?,
            summary: query_within(root, ".price-summary")?,
            duration_display: query_within(root, ".duration-display")?,
            price_display: query_within(root, ".price-display")?,
            bike_info: query_within(root, ".bike-info-container")?,
        })
    }
}

fn cast<T: JsCast>(element: Element) -> Result<T, JsValue> {
    let tag = element.tag_name();
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Tipo de elemento inesperado: {}", tag)))
}

/// Recalcular y repintar el resumen de precio.
/// Con algún campo vacío o fecha inválida el resumen solo se oculta:
/// los valores anteriores quedan en el DOM, es visibilidad, no borrado.
fn update_price(refs: &FormRefs) {
    let selection = BookingSelection {
        bike_id: refs.bike_select.value(),
        rental_type: refs.type_select.value(),
        start_date: refs.start_input.value(),
        end_date: refs.end_input.value(),
    };

    match compute_quote(&selection) {
        None => {
            let _ = hide_element(&refs.summary);
        }
        Some(quote) => {
            set_text_content(&refs.duration_display, &format_duration(quote.duration_hours));
            set_text_content(&refs.price_display, &format_price(quote.total_price));
            let _ = show_element(&refs.summary);
        }
    }
}

/// Cargar la ficha de la bici seleccionada.
/// Pinta el placeholder de inmediato y descarta la respuesta si otra
/// selección llegó entre medias (secuenciación por generación).
fn load_bike_details(refs: Rc<FormRefs>, gateway: Rc<dyn RentalGateway>, generation: Rc<Cell<u64>>) {
    let bike_id = refs.bike_select.value();
    if bike_id.is_empty() {
        return;
    }

    set_inner_html(&refs.bike_info, "");
    if let Ok(loading) = render_bike_loading() {
        let _ = append_child(&refs.bike_info, &loading);
    }

    let my_generation = generation.get().wrapping_add(1);
    generation.set(my_generation);

    spawn_local(async move {
        let result = gateway.fetch_bike_details(&bike_id).await;

        if generation.get() != my_generation {
            log::info!("⏭️ Ficha de la bici {} descartada (hay una selección más reciente)", bike_id);
            return;
        }

        set_inner_html(&refs.bike_info, "");
        let rendered = match result {
            Ok(details) => render_bike_details(&details),
            Err(e) => {
                log::error!("❌ Error cargando la ficha de la bici {}: {}", bike_id, e);
                render_bike_error(&e)
            }
        };

        if let Ok(block) = rendered {
            let _ = append_child(&refs.bike_info, &block);
        }
    });
}

impl Widget for PriceEstimator {
    fn mount(&mut self, root: &Element) -> Result<(), JsValue> {
        let refs = Rc::new(Self::resolve_refs(root)?);

        // Cambio de bici: recalcular precio + cargar ficha
        {
            let bike_select: Element = AsRef::<Element>::as_ref(&refs.bike_select).clone();
            let refs = refs.clone();
            let gateway = self.gateway.clone();
            let generation = self.fetch_generation.clone();
            let handle = ListenerHandle::attach(&bike_select, "change", move |_e| {
                update_price(&refs);
                load_bike_details(refs.clone(), gateway.clone(), generation.clone());
            })?;
            self.listeners.push(handle);
        }

        // Cambio de tipo de alquiler o de fechas: solo recalcular
        let recompute_targets: [Element; 3] = [
            AsRef::<Element>::as_ref(&refs.type_select).clone(),
            AsRef::<Element>::as_ref(&refs.start_input).clone(),
            AsRef::<Element>::as_ref(&refs.end_input).clone(),
        ];
        for element in &recompute_targets {
            let refs = refs.clone();
            let handle = ListenerHandle::attach(element, "change", move |_e| {
                update_price(&refs);
            })?;
            self.listeners.push(handle);
        }

        // Cálculo inicial al montar
        update_price(&refs);

        self.refs = Some(refs);
        Ok(())
    }

    fn unmount(&mut self) {
        // Drop de los handles desregistra los listeners
        self.listeners.clear();
        self.refs = None;
        // Invalidar cualquier fetch en vuelo
        self.fetch_generation.set(self.fetch_generation.get().wrapping_add(1));
    }
}
