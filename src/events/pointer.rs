use kinetic_core::SharedPointer;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static POINTER: RefCell<Option<SharedPointer>> = const { RefCell::new(None) };
}

/// Page-wide pointer cell. The first call wires one `pointermove` listener on
/// the window; every field created afterwards reads the same cell.
pub fn shared_pointer() -> SharedPointer {
    POINTER.with(|slot| {
        if let Some(p) = slot.borrow().as_ref() {
            return p.clone();
        }
        let pointer = SharedPointer::new();
        wire_pointermove(&pointer);
        wire_pointerleave(&pointer);
        *slot.borrow_mut() = Some(pointer.clone());
        pointer
    })
}

fn wire_pointermove(pointer: &SharedPointer) {
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.store(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        log::info!("[pointer] listening for pointermove");
    }

    closure.forget();
}

// Pointer leaving the document puts every proximity element back at rest.
fn wire_pointerleave(pointer: &SharedPointer) {
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.clear();
    }) as Box<dyn FnMut(_)>);

    if let Some(root) = crate::dom::window_document().and_then(|d| d.document_element()) {
        _ = root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
