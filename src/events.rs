use crate::controller::{FullscreenRequest, ViewerController};
use crate::dom;
use crate::input;
use crate::media;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one viewer's handlers need. Each viewer gets its own wiring;
/// nothing here is shared between gallery items.
#[derive(Clone)]
pub struct ViewerWiring {
    pub container: web::HtmlElement,
    pub video: web::HtmlVideoElement,
    pub fullscreen_button: web::HtmlElement,
    pub controller: Rc<RefCell<ViewerController>>,
}

pub fn wire_viewer_handlers(w: ViewerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_drag_end(&w);
    wire_double_activate(&w);
    wire_fullscreen_button(&w);
    wire_fullscreen_changed(&w);
}

fn wire_pointerdown(w: &ViewerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_container_px(&ev, &w.container);
        w.controller.borrow_mut().drag_start(pos.x);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &ViewerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_container_px(&ev, &w.container);
        let cmd = w.controller.borrow_mut().drag_move(pos.x, ev.time_stamp());
        if let Some(cmd) = cmd {
            media::sync_to_frame(Some(&w.video), cmd);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Pointer up, leaving the surface mid-drag, and cancellation all end the
// session the same way.
fn wire_drag_end(w: &ViewerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.controller.borrow_mut().drag_end();
    }) as Box<dyn FnMut(_)>);
    for kind in ["pointerup", "pointerleave", "pointercancel"] {
        _ = container_for_listener
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_double_activate(w: &ViewerWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let zoomed = w.controller.borrow_mut().double_activate();
        dom::set_class_enabled(&w.video, "zoomed", zoomed);
        log::info!("[viewer] zoom {}", if zoomed { "in" } else { "out" });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = container_for_listener
        .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_fullscreen_button(w: &ViewerWiring) {
    let w = w.clone();
    let button_for_listener = w.fullscreen_button.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        // Advisory only; state flips when the fullscreenchange notification
        // arrives, not here.
        match w.controller.borrow().fullscreen_request() {
            FullscreenRequest::Enter => {
                _ = w.container.request_fullscreen();
            }
            FullscreenRequest::Exit => {
                if let Some(document) = dom::window_document() {
                    document.exit_fullscreen();
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = button_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_fullscreen_changed(w: &ViewerWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        let document = match dom::window_document() {
            Some(d) => d,
            None => return,
        };
        let container: &web::Element = w.container.as_ref();
        let is_fullscreen = document
            .fullscreen_element()
            .map_or(false, |el| el == *container);
        w.controller.borrow_mut().fullscreen_changed(is_fullscreen);
        dom::set_class_enabled(container, "is-fullscreen", is_fullscreen);
        log::info!("[viewer] fullscreen {}", if is_fullscreen { "on" } else { "off" });
    }) as Box<dyn FnMut()>);
    if let Some(document) = dom::window_document() {
        _ = document
            .add_event_listener_with_callback("fullscreenchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
