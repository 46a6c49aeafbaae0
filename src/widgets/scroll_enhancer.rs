// ============================================================================
// SCROLL ENHANCER - Scroll suave hacia anclas + animación de entrada
// ============================================================================
// Dos mejoras sin estado de negocio:
// - Click en un link de ancla: animar el scroll hasta el destino menos el
//   offset del header. Un scroll nuevo cancela el que estuviera en curso
//   (el viewport es el único recurso compartido, disciplina stop-before-start).
// - Cards observadas con IntersectionObserver: la primera vez que entran
//   un 10% en el viewport reciben la clase fade-in-up, una sola vez.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::UiConfig;
use crate::dom::{get_attribute, get_element_by_id, query_all, window, ListenerHandle};
use crate::utils::constants::CARD_SELECTOR;
use crate::widgets::Widget;

pub struct ScrollEnhancer {
    ui: UiConfig,
    listeners: Vec<ListenerHandle>,
    observer: Option<IntersectionObserver>,
    // El closure debe vivir tanto como el observer que lo invoca
    observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    /// Generación de la animación de scroll en curso: arrancar una nueva
    /// invalida la anterior
    scroll_generation: Rc<Cell<u64>>,
}

impl ScrollEnhancer {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            ui,
            listeners: Vec::new(),
            observer: None,
            observer_callback: None,
            scroll_generation: Rc::new(Cell::new(0)),
        }
    }

    fn mount_anchor_links(&mut self) -> Result<(), JsValue> {
        for anchor in query_all("a[href^=\"#\"]")? {
            let anchor_ref = anchor.clone();
            let generation = self.scroll_generation.clone();
            let header_offset = self.ui.header_offset_px;
            let duration = self.ui.scroll_duration_ms;

            let handle = ListenerHandle::attach(&anchor, "click", move |e| {
                let Some(href) = get_attribute(&anchor_ref, "href") else {
                    return;
                };
                let fragment = href.trim_start_matches('#');
                if fragment.is_empty() {
                    return;
                }

                // El destino se resuelve en el click: puede haber aparecido
                // después del mount
                let Some(target) = get_element_by_id(fragment) else {
                    return;
                };

                e.prevent_default();

                let Some(win) = window() else { return };
                let doc_y = win.scroll_y().unwrap_or(0.0);
                let target_y = (target.get_bounding_client_rect().top() + doc_y - header_offset)
                    .max(0.0);

                animate_scroll_to(target_y, duration, generation.clone());
            })?;

            self.listeners.push(handle);
        }
        Ok(())
    }

    fn mount_reveal_observer(&mut self) -> Result<(), JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        // Efecto one-shot: agregar la clase es idempotente
                        // y nunca se revierte
                        let _ = entry.target().class_list().add_1("fade-in-up");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.ui.reveal_threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for card in query_all(CARD_SELECTOR)? {
            observer.observe(&card);
        }

        self.observer = Some(observer);
        self.observer_callback = Some(callback);
        Ok(())
    }
}

impl Widget for ScrollEnhancer {
    fn mount(&mut self, _root: &Element) -> Result<(), JsValue> {
        self.mount_anchor_links()?;
        self.mount_reveal_observer()?;
        log::info!("✨ ScrollEnhancer montado ({} anclas)", self.listeners.len());
        Ok(())
    }

    fn unmount(&mut self) {
        self.listeners.clear();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_callback = None;
        // Cortar cualquier animación en curso
        self.scroll_generation
            .set(self.scroll_generation.get().wrapping_add(1));
    }
}

/// Animar el scroll vertical del documento hasta target_y.
/// Bumpear la generación cancela la animación anterior antes de arrancar:
/// el loop viejo se descubre superseded en su próximo frame y muere solo.
fn animate_scroll_to(target_y: f64, duration_ms: f64, generation: Rc<Cell<u64>>) {
    let Some(win) = window() else { return };

    let my_generation = generation.get().wrapping_add(1);
    generation.set(my_generation);

    let start_y = win.scroll_y().unwrap_or(0.0);
    let start_x = win.scroll_x().unwrap_or(0.0);
    let delta = target_y - start_y;
    if delta == 0.0 {
        return;
    }

    // Patrón estándar de requestAnimationFrame recursivo: el closure se
    // guarda en un Rc<RefCell<Option>> y se suelta a sí mismo al terminar
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let starter = holder.clone();
    let start_ts: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let frame_win = win.clone();

    *starter.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if generation.get() != my_generation {
            // Superseded por un scroll más reciente
            let _ = holder.borrow_mut().take();
            return;
        }

        let t0 = match start_ts.get() {
            Some(t0) => t0,
            None => {
                start_ts.set(Some(timestamp));
                timestamp
            }
        };

        let progress = ((timestamp - t0) / duration_ms).clamp(0.0, 1.0);
        // Easing "swing": medio coseno, acelera y frena suave
        let eased = 0.5 - (std::f64::consts::PI * progress).cos() / 2.0;

        frame_win.scroll_to_with_x_and_y(start_x, start_y + delta * eased);

        if progress >= 1.0 {
            let _ = holder.borrow_mut().take();
            return;
        }

        if let Some(cb) = holder.borrow().as_ref() {
            let _ = frame_win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let first_frame = starter.borrow();
    if let Some(cb) = first_frame.as_ref() {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
