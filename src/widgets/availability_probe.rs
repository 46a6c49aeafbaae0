// ============================================================================
// AVAILABILITY PROBE - Verificación de disponibilidad de una bici
// ============================================================================
// Control one-shot: idle → checking → available, sin vuelta atrás.
// El único camino de retorno a idle es un fallo del gateway, para que el
// usuario pueda reintentar.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};

use crate::dom::{add_class, get_attribute, query_within, remove_class, ListenerHandle};
use crate::services::RentalGateway;
use crate::widgets::Widget;

/// Estado del control de disponibilidad, 1:1 con el botón del DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Idle,
    Checking,
    Available,
}

impl ProbeState {
    /// Solo se puede lanzar una verificación desde Idle: un segundo click
    /// durante Checking no reinicia el timer ni toca el label
    pub fn can_start_check(self) -> bool {
        matches!(self, ProbeState::Idle)
    }
}

pub struct AvailabilityProbe {
    gateway: Rc<dyn RentalGateway>,
    state: Rc<Cell<ProbeState>>,
    listeners: Vec<ListenerHandle>,
}

impl AvailabilityProbe {
    pub fn new(gateway: Rc<dyn RentalGateway>) -> Self {
        Self {
            gateway,
            state: Rc::new(Cell::new(ProbeState::Idle)),
            listeners: Vec::new(),
        }
    }

    /// Estado actual del control
    pub fn state(&self) -> ProbeState {
        self.state.get()
    }
}

impl Widget for AvailabilityProbe {
    fn mount(&mut self, root: &Element) -> Result<(), JsValue> {
        let button_el = query_within(root, ".check-availability-btn")?;
        let button: HtmlButtonElement = button_el
            .clone()
            .dyn_into()
            .map_err(|_| JsValue::from_str("check-availability-btn no es un <button>"))?;

        let bike_id = get_attribute(&button_el, "data-bike-id").unwrap_or_default();

        let state = self.state.clone();
        let gateway = self.gateway.clone();

        let handle = ListenerHandle::attach(&button_el, "click", move |e| {
            e.prevent_default();

            if !state.get().can_start_check() {
                return;
            }

            state.set(ProbeState::Checking);
            button.set_disabled(true);
            let _ = remove_class(button.as_ref(), "btn-danger");
            button.set_inner_html("<i class=\"fa fa-spinner fa-spin\"></i> Vérification...");

            let state = state.clone();
            let gateway = gateway.clone();
            let button = button.clone();
            let bike_id = bike_id.clone();

            spawn_local(async move {
                match gateway.check_availability(&bike_id).await {
                    Ok(availability) => {
                        // Respuesta terminal: el control no se rearma
                        state.set(ProbeState::Available);

                        if availability.available {
                            button.set_inner_html("<i class=\"fa fa-check\"></i> Disponible");
                            let _ = remove_class(button.as_ref(), "btn-primary");
                            let _ = add_class(button.as_ref(), "btn-success");
                        } else {
                            button.set_inner_html("<i class=\"fa fa-times\"></i> Indisponible");
                            let _ = remove_class(button.as_ref(), "btn-primary");
                            let _ = add_class(button.as_ref(), "btn-secondary");
                        }
                    }
                    Err(e) => {
                        // Fallo del gateway: volver a idle y permitir reintento
                        log::error!("❌ Error verificando disponibilidad de la bici {}: {}", bike_id, e);
                        state.set(ProbeState::Idle);
                        button.set_disabled(false);
                        let _ = add_class(button.as_ref(), "btn-danger");
                        button.set_inner_html(
                            "<i class=\"fa fa-exclamation-triangle\"></i> Erreur, réessayer",
                        );
                    }
                }
            });
        })?;

        self.listeners.push(handle);
        Ok(())
    }

    fn unmount(&mut self) {
        self.listeners.clear();
    }
}
