// ============================================================================
// LISTENERS - Registro de event listeners con desmontaje explícito
// ============================================================================
// A diferencia de closure.forget(), aquí el closure queda retenido en el
// handle: el widget que lo posee puede remover el listener en unmount()
// y el listener muere con el widget, no con la página.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Handle de un listener registrado. Al hacer drop se desregistra solo.
pub struct ListenerHandle {
    element: Element,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    /// Registrar un handler para un tipo de evento en un elemento
    pub fn attach<F>(element: &Element, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;

        Ok(Self {
            element: element.clone(),
            event_type,
            closure,
        })
    }

    /// Remover el listener del elemento (idempotente vía Drop)
    fn detach(&self) {
        let _ = self
            .element
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
