// Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use js_sys::Promise;
use particle_network::interactions::{self, NEUTRAL_TILT, RIPPLE_CLASS, RIPPLE_LIFETIME_MS};
use particle_network::network::{ParticleNetwork, Viewport};
use particle_network::particle::Particle;
use particle_network::renderer::Renderer;
use particle_network::{create_particle_network, page, reveal};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    page::document(&page::window().unwrap()).unwrap()
}

async fn next_animation_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        page::window().unwrap().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        page::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

// Fixed-position element so its bounding rect is known exactly
fn placed(document: &Document, tag: &str, class: &str, left: u32, top: u32) -> HtmlElement {
    let element = document
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_class_name(class);
    let style = element.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("left", &format!("{}px", left)).unwrap();
    style.set_property("top", &format!("{}px", top)).unwrap();
    style.set_property("width", "100px").unwrap();
    style.set_property("height", "40px").unwrap();
    page::body(document).unwrap().append_child(&element).unwrap();
    element
}

fn mouse_event(kind: &str, client_x: i32, client_y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn canvas_pixels(canvas: &HtmlCanvasElement) -> Vec<u8> {
    let context = page::context_2d(canvas).unwrap();
    context
        .get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
        .unwrap()
        .data()
        .0
}

#[wasm_bindgen_test]
fn canvas_is_attached_with_network_class() {
    let window = page::window().unwrap();
    let document = page::document(&window).unwrap();
    let body = page::body(&document).unwrap();

    let canvas = page::create_canvas(&document, &body).unwrap();
    assert!(canvas.class_list().contains(page::CANVAS_CLASS));
    assert!(page::query_all(&document, "canvas.particle-network").unwrap().len() >= 1);

    let viewport = page::fit_canvas_to_window(&window, &canvas).unwrap();
    assert_eq!(viewport.width, canvas.width() as f64);
    assert_eq!(viewport.height, canvas.height() as f64);
    canvas.remove();
}

#[wasm_bindgen_test]
fn renders_a_frame_onto_a_real_canvas() {
    let document = document();
    let body = page::body(&document).unwrap();
    let canvas = page::create_canvas(&document, &body).unwrap();
    canvas.set_width(200);
    canvas.set_height(100);
    let mut context = page::context_2d(&canvas).unwrap();

    let network = ParticleNetwork::from_particles(
        vec![
            Particle::new(20.0, 20.0, 0.0, 0.0, 3.0, 0.3),
            Particle::new(80.0, 20.0, 0.0, 0.0, 3.0, 0.3),
        ],
        Viewport::new(200.0, 100.0),
    );
    let pairs = network.proximity_pairs();
    assert_eq!(pairs.len(), 1);
    Renderer::new().render(&mut context, &network, &pairs).unwrap();

    let pixel = context.get_image_data(20.0, 20.0, 1.0, 1.0).unwrap().data();
    assert!(pixel[3] > 0, "particle center should not be transparent");
    canvas.remove();
}

#[wasm_bindgen_test]
async fn network_draws_immediately_and_keeps_animating() {
    let document = document();
    let before = page::query_all(&document, "canvas.particle-network").unwrap().len();

    create_particle_network().unwrap();

    let canvases = page::query_all(&document, "canvas.particle-network").unwrap();
    assert_eq!(canvases.len(), before + 1);
    let canvas = canvases
        .last()
        .unwrap()
        .clone()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();

    // The first frame is drawn before start returns
    let first = canvas_pixels(&canvas);
    assert!(first.chunks(4).any(|px| px[3] > 0), "first frame drew nothing");

    next_animation_frame().await;
    next_animation_frame().await;
    let later = canvas_pixels(&canvas);
    assert_ne!(first, later, "requestAnimationFrame loop did not redraw");
}

#[wasm_bindgen_test]
fn ripple_is_inserted_at_given_offset() {
    let document = document();
    let body = page::body(&document).unwrap();
    let button = document.create_element("button").unwrap();
    body.append_child(&button).unwrap();

    let ripple = interactions::insert_ripple(&button, 12.0, 7.5).unwrap();
    assert!(ripple.class_list().contains(RIPPLE_CLASS));
    assert_eq!(ripple.style().get_property_value("left").unwrap(), "12px");
    assert_eq!(ripple.style().get_property_value("top").unwrap(), "7.5px");
    assert_eq!(button.child_element_count(), 1);
    button.remove();
}

#[wasm_bindgen_test]
async fn ripple_expires_after_its_lifetime() {
    let document = document();
    let body = page::body(&document).unwrap();
    let button = document.create_element("button").unwrap();
    body.append_child(&button).unwrap();

    interactions::insert_ripple(&button, 1.0, 1.0).unwrap();
    sleep(RIPPLE_LIFETIME_MS / 2).await;
    assert_eq!(button.child_element_count(), 1);

    sleep(RIPPLE_LIFETIME_MS / 2 + 100).await;
    assert_eq!(button.child_element_count(), 0);
    button.remove();
}

#[wasm_bindgen_test]
fn interactive_effects_respond_to_pointer_events() {
    let document = document();
    // Matches the card selector but is not an HTML element, so tilt cannot attach
    let svg: Element = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_attribute("class", "blog-post card").unwrap();
    page::body(&document).unwrap().append_child(&svg).unwrap();

    let button = placed(&document, "button", "btn", 40, 30);
    let card = placed(&document, "div", "blog-post card", 200, 100);

    let wired = interactions::init_interactive_effects(&document).unwrap();
    assert_eq!(wired, 2);

    button.dispatch_event(&mouse_event("click", 52, 37)).unwrap();
    let ripple = button
        .query_selector(".ripple")
        .unwrap()
        .expect("click should insert a ripple")
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(ripple.style().get_property_value("left").unwrap(), "12px");
    assert_eq!(ripple.style().get_property_value("top").unwrap(), "7px");

    // The browser normalizes transform text, so compare against its own rendering
    let reference = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    reference.style().set_property("transform", NEUTRAL_TILT).unwrap();
    let neutral = reference.style().get_property_value("transform").unwrap();

    // Top-right corner of a 100x40 card: 50px right and 20px above center
    card.dispatch_event(&mouse_event("mousemove", 300, 100)).unwrap();
    let tilted = card.style().get_property_value("transform").unwrap();
    assert!(tilted.contains("rotateX(0.8deg)"), "got {}", tilted);
    assert!(tilted.contains("rotateY(2deg)"), "got {}", tilted);

    card.dispatch_event(&mouse_event("mouseleave", 0, 0)).unwrap();
    assert_eq!(card.style().get_property_value("transform").unwrap(), neutral);

    svg.remove();
    button.remove();
    card.remove();
}

#[wasm_bindgen_test]
fn revealed_cards_get_entrance_classes() {
    let card = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    reveal::mark_revealed(&card).unwrap();
    for class in reveal::REVEAL_CLASSES.iter() {
        assert!(card.class_list().contains(class));
    }
}

#[wasm_bindgen_test]
async fn reveal_fires_once_per_element() {
    let document = document();
    let card = placed(&document, "div", "feature-card", 0, 0);

    let observed = reveal::init_scroll_animations(&document).unwrap();
    assert!(observed >= 1);
    sleep(200).await;
    for class in reveal::REVEAL_CLASSES.iter() {
        assert!(card.class_list().contains(class), "card was not revealed");
    }

    // Strip the classes and scroll it out of view and back; it stays unobserved
    card.set_class_name("feature-card");
    card.style().set_property("top", "-1000px").unwrap();
    sleep(100).await;
    card.style().set_property("top", "0px").unwrap();
    sleep(200).await;
    for class in reveal::REVEAL_CLASSES.iter() {
        assert!(!card.class_list().contains(class), "card was revealed twice");
    }
    card.remove();
}
