// Tests de widgets contra un DOM real (solo target wasm32, headless browser)
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

use bike_store_app::app::App;
use bike_store_app::config::{AppConfig, UiConfig};
use bike_store_app::models::{Availability, BikeDetails};
use bike_store_app::services::{RentalGateway, SimulatedGateway};
use bike_store_app::widgets::{
    AvailabilityProbe, PriceEstimator, ProbeState, ScrollEnhancer, Widget,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn booking_form_fixture() -> Element {
    let form = document().create_element("div").unwrap();
    form.set_class_name("rental-booking-form");
    form.set_inner_html(
        r#"
        <select name="bike_id">
            <option value=""></option>
            <option value="7">Vélo de ville</option>
            <option value="8">VTT</option>
        </select>
        <select name="rental_type">
            <option value=""></option>
            <option value="hour">Heure</option>
            <option value="day">Jour</option>
        </select>
        <input name="start_date" type="text">
        <input name="end_date" type="text">
        <div class="bike-info-container"></div>
        <div class="price-summary">
            <span class="duration-display"></span>
            <span class="price-display"></span>
        </div>
        "#,
    );
    document().body().unwrap().append_child(&form).unwrap();
    form
}

fn probe_fixture() -> Element {
    let container = document().create_element("div").unwrap();
    container.set_class_name("bike-availability-check");
    container.set_inner_html(
        r#"<button class="check-availability-btn btn btn-primary" data-bike-id="7">Vérifier la disponibilité</button>"#,
    );
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn select(form: &Element, selector: &str) -> HtmlSelectElement {
    form.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
}

fn input(form: &Element, selector: &str) -> HtmlInputElement {
    form.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
}

fn fire_change(element: &Element) {
    let event = Event::new("change").unwrap();
    element.dispatch_event(&event).unwrap();
}

fn display_of(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn summary_hidden_until_all_fields_filled() {
    let form = booking_form_fixture();
    let gateway = Rc::new(SimulatedGateway::instant());

    let mut estimator = PriceEstimator::new(gateway);
    estimator.mount(&form).unwrap();

    let summary = form.query_selector(".price-summary").unwrap().unwrap();
    // Montaje con campos vacíos: oculto
    assert_eq!(display_of(&summary), "none");

    select(&form, "select[name=\"bike_id\"]").set_value("7");
    select(&form, "select[name=\"rental_type\"]").set_value("hour");
    input(&form, "input[name=\"start_date\"]").set_value("2024-01-01T00:00");
    fire_change(&input(&form, "input[name=\"start_date\"]"));

    // Falta end_date: sigue oculto
    assert_eq!(display_of(&summary), "none");

    input(&form, "input[name=\"end_date\"]").set_value("2024-01-01T03:00");
    fire_change(&input(&form, "input[name=\"end_date\"]"));

    assert_eq!(display_of(&summary), "");
    let duration = form.query_selector(".duration-display").unwrap().unwrap();
    let price = form.query_selector(".price-display").unwrap().unwrap();
    assert_eq!(duration.text_content().unwrap(), "3 heures");
    assert_eq!(price.text_content().unwrap(), "15.00 €");
}

#[wasm_bindgen_test]
fn clearing_a_field_hides_but_keeps_stale_text() {
    let form = booking_form_fixture();
    let mut estimator = PriceEstimator::new(Rc::new(SimulatedGateway::instant()));
    estimator.mount(&form).unwrap();

    select(&form, "select[name=\"bike_id\"]").set_value("7");
    select(&form, "select[name=\"rental_type\"]").set_value("day");
    input(&form, "input[name=\"start_date\"]").set_value("2024-01-01");
    input(&form, "input[name=\"end_date\"]").set_value("2024-01-03");
    fire_change(&input(&form, "input[name=\"end_date\"]"));

    let summary = form.query_selector(".price-summary").unwrap().unwrap();
    let price = form.query_selector(".price-display").unwrap().unwrap();
    assert_eq!(display_of(&summary), "");
    assert_eq!(price.text_content().unwrap(), "30.00 €");

    // Vaciar un campo oculta el resumen pero no borra el texto anterior
    input(&form, "input[name=\"start_date\"]").set_value("");
    fire_change(&input(&form, "input[name=\"start_date\"]"));

    assert_eq!(display_of(&summary), "none");
    assert_eq!(price.text_content().unwrap(), "30.00 €");
}

#[wasm_bindgen_test]
async fn bike_change_loads_details_panel() {
    let form = booking_form_fixture();
    let mut estimator = PriceEstimator::new(Rc::new(SimulatedGateway::instant()));
    estimator.mount(&form).unwrap();

    let bike_select = select(&form, "select[name=\"bike_id\"]");
    bike_select.set_value("7");
    fire_change(&bike_select);

    let info = form.query_selector(".bike-info-container").unwrap().unwrap();
    // Placeholder inmediato
    assert!(info.inner_html().contains("Chargement"));

    TimeoutFuture::new(20).await;

    let html = info.inner_html();
    assert!(html.contains("Informations du vélo"));
    assert!(html.contains("Caution"));
    assert!(html.contains("200€"));
}

#[wasm_bindgen_test]
async fn probe_transitions_one_way_to_available() {
    let container = probe_fixture();
    let ui = UiConfig {
        bike_details_delay_ms: 0,
        availability_delay_ms: 30,
        ..UiConfig::default()
    };
    let mut probe = AvailabilityProbe::new(Rc::new(SimulatedGateway::new(&ui)));
    probe.mount(&container).unwrap();

    let button: HtmlButtonElement = container
        .query_selector(".check-availability-btn")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    assert_eq!(probe.state(), ProbeState::Idle);

    button.click();
    assert_eq!(probe.state(), ProbeState::Checking);
    assert!(button.disabled());
    assert!(button.inner_html().contains("Vérification"));

    // Un segundo click durante Checking no reinicia nada
    button.click();
    assert!(button.inner_html().contains("Vérification"));

    TimeoutFuture::new(80).await;

    assert_eq!(probe.state(), ProbeState::Available);
    assert!(button.inner_html().contains("Disponible"));
    assert!(button.class_list().contains("btn-success"));
    assert!(!button.class_list().contains("btn-primary"));
    assert!(button.disabled());
}

struct FailingGateway;

impl RentalGateway for FailingGateway {
    fn fetch_bike_details(&self, _bike_id: &str) -> LocalBoxFuture<'static, Result<BikeDetails, String>> {
        Box::pin(async { Err("backend indisponible".to_string()) })
    }

    fn check_availability(&self, _bike_id: &str) -> LocalBoxFuture<'static, Result<Availability, String>> {
        Box::pin(async { Err("backend indisponible".to_string()) })
    }
}

#[wasm_bindgen_test]
async fn probe_reverts_to_idle_on_gateway_error() {
    let container = probe_fixture();
    let mut probe = AvailabilityProbe::new(Rc::new(FailingGateway));
    probe.mount(&container).unwrap();

    let button: HtmlButtonElement = container
        .query_selector(".check-availability-btn")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    button.click();
    TimeoutFuture::new(20).await;

    // Vuelta a idle con affordance de error: se puede reintentar
    assert_eq!(probe.state(), ProbeState::Idle);
    assert!(!button.disabled());
    assert!(button.class_list().contains("btn-danger"));
    assert!(button.inner_html().contains("Erreur"));
}

#[wasm_bindgen_test]
async fn unmount_detaches_listeners() {
    let form = booking_form_fixture();
    let mut estimator = PriceEstimator::new(Rc::new(SimulatedGateway::instant()));
    estimator.mount(&form).unwrap();
    assert!(estimator.is_mounted());

    select(&form, "select[name=\"bike_id\"]").set_value("7");
    select(&form, "select[name=\"rental_type\"]").set_value("hour");
    input(&form, "input[name=\"start_date\"]").set_value("2024-01-01T00:00");
    input(&form, "input[name=\"end_date\"]").set_value("2024-01-01T02:00");
    fire_change(&form.query_selector("input[name=\"end_date\"]").unwrap().unwrap());

    let price = form.query_selector(".price-display").unwrap().unwrap();
    assert_eq!(price.text_content().unwrap(), "10.00 €");

    estimator.unmount();
    assert!(!estimator.is_mounted());

    // Tras unmount los cambios ya no repintan
    input(&form, "input[name=\"end_date\"]").set_value("2024-01-01T05:00");
    fire_change(&form.query_selector("input[name=\"end_date\"]").unwrap().unwrap());
    assert_eq!(price.text_content().unwrap(), "10.00 €");
}

/// Gateway con latencia por bici: la 7 responde lenta, las demás rápido.
/// La condición lleva el id para poder verificar qué respuesta quedó pintada.
struct PerBikeDelayGateway;

impl RentalGateway for PerBikeDelayGateway {
    fn fetch_bike_details(&self, bike_id: &str) -> LocalBoxFuture<'static, Result<BikeDetails, String>> {
        let bike_id = bike_id.to_string();
        Box::pin(async move {
            let delay = if bike_id == "7" { 80 } else { 10 };
            TimeoutFuture::new(delay).await;
            Ok(BikeDetails {
                deposit_eur: 150.0,
                condition: format!("Vélo {}", bike_id),
                insurance_per_day_eur: None,
            })
        })
    }

    fn check_availability(&self, _bike_id: &str) -> LocalBoxFuture<'static, Result<Availability, String>> {
        Box::pin(async { Ok(Availability { available: true }) })
    }
}

#[wasm_bindgen_test]
async fn stale_bike_details_never_overwrite_newer_selection() {
    let form = booking_form_fixture();
    let mut estimator = PriceEstimator::new(Rc::new(PerBikeDelayGateway));
    estimator.mount(&form).unwrap();

    let bike_select = select(&form, "select[name=\"bike_id\"]");

    // Dos cambios rápidos: la respuesta de la 7 llega DESPUÉS que la de la 8
    bike_select.set_value("7");
    fire_change(&bike_select);
    bike_select.set_value("8");
    fire_change(&bike_select);

    TimeoutFuture::new(150).await;

    let info = form.query_selector(".bike-info-container").unwrap().unwrap();
    let html = info.inner_html();
    assert!(html.contains("Vélo 8"), "panel: {}", html);
    assert!(!html.contains("Vélo 7"), "panel: {}", html);

    estimator.unmount();
}

fn tall_spacer() {
    if document().get_element_by_id("test-spacer").is_none() {
        let spacer = document().create_element("div").unwrap();
        spacer.set_id("test-spacer");
        spacer.set_attribute("style", "height: 6000px;").unwrap();
        document().body().unwrap().append_child(&spacer).unwrap();
    }
}

fn anchor_to(fragment: &str) -> HtmlElement {
    let link = document().create_element("a").unwrap();
    link.set_attribute("href", &format!("#{}", fragment)).unwrap();
    document().body().unwrap().append_child(&link).unwrap();
    link.dyn_into().unwrap()
}

fn positioned_block(id: &str, top_px: u32) -> Element {
    let block = document().create_element("div").unwrap();
    block.set_id(id);
    block
        .set_attribute(
            "style",
            &format!("position: absolute; top: {}px; width: 40px; height: 40px;", top_px),
        )
        .unwrap();
    document().body().unwrap().append_child(&block).unwrap();
    block
}

#[wasm_bindgen_test]
async fn reveal_class_applies_once_and_never_reverses() {
    let win = web_sys::window().unwrap();
    win.scroll_to_with_x_and_y(0.0, 0.0);
    tall_spacer();

    let card = document().create_element("div").unwrap();
    card.set_class_name("bike-card");
    card.set_attribute("style", "position: absolute; top: 10px; width: 40px; height: 40px;")
        .unwrap();
    document().body().unwrap().append_child(&card).unwrap();

    let mut enhancer = ScrollEnhancer::new(UiConfig::default());
    let root = document().document_element().unwrap();
    enhancer.mount(&root).unwrap();

    TimeoutFuture::new(100).await;
    assert!(card.class_list().contains("fade-in-up"));

    // Sacar la card del viewport y volver: la clase persiste
    win.scroll_to_with_x_and_y(0.0, 5000.0);
    TimeoutFuture::new(100).await;
    assert!(card.class_list().contains("fade-in-up"));

    win.scroll_to_with_x_and_y(0.0, 0.0);
    TimeoutFuture::new(100).await;
    assert!(card.class_list().contains("fade-in-up"));

    enhancer.unmount();
}

#[wasm_bindgen_test]
async fn new_anchor_click_cancels_scroll_in_flight() {
    let win = web_sys::window().unwrap();
    win.scroll_to_with_x_and_y(0.0, 0.0);
    tall_spacer();

    positioned_block("cible-haut", 0);
    positioned_block("cible-bas", 4000);
    let link_bas = anchor_to("cible-bas");
    let link_haut = anchor_to("cible-haut");

    let ui = UiConfig {
        scroll_duration_ms: 120.0,
        ..UiConfig::default()
    };
    let mut enhancer = ScrollEnhancer::new(ui);
    enhancer.mount(&document().document_element().unwrap()).unwrap();

    // El segundo click llega con la primera animación aún en vuelo
    link_bas.click();
    link_haut.click();

    TimeoutFuture::new(400).await;

    // Gana el último destino: arriba, no en los 4000px del primero
    let final_y = win.scroll_y().unwrap();
    assert!(final_y < 100.0, "scroll final = {}", final_y);

    enhancer.unmount();
}

#[wasm_bindgen_test]
fn app_mounts_one_widget_per_discovered_subtree() {
    let _form = booking_form_fixture();
    let _control = probe_fixture();

    let mut app = App::new(AppConfig::default()).unwrap();
    // Al menos un estimador, un probe y el scroll enhancer
    assert!(app.widget_count() >= 3);

    app.unmount_all();
    assert_eq!(app.widget_count(), 0);
}
