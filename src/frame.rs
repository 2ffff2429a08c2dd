use crate::constants::{CSS_TRANSFORM, CSS_TRANSFORM_ORIGIN};
use crate::dom::DomElement;
use crate::DomDriver;
use kinetic_core::{FrameRequest, FrameScheduler, Presenter};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` backed scheduler. The tick closure lives in a
/// shared slot so the scheduler can hand the same callback to every request.
#[derive(Clone, Default)]
pub struct RafScheduler {
    tick: TickSlot,
}

impl RafScheduler {
    /// Install the per-frame callback. It holds the driver weakly so dropping
    /// the field releases the driver even with a frame in flight.
    pub fn install(&self, driver: &Rc<RefCell<DomDriver>>) {
        let weak: Weak<RefCell<DomDriver>> = Rc::downgrade(driver);
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            match driver.try_borrow_mut() {
                Ok(mut d) => d.tick(),
                Err(_) => log::warn!("[frame] driver busy; tick skipped"),
            };
        }) as Box<dyn FnMut()>));
    }

    /// Drop the callback. Only call once no frame is pending.
    pub fn uninstall(&self) {
        self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let window = web::window()?;
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        let handle = window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(|e| log::error!("[frame] requestAnimationFrame error: {:?}", e))
            .ok()?;
        Some(FrameRequest(handle))
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(request.0);
        }
    }
}

/// Writes composed transforms to the element's inline style.
#[derive(Clone, Copy, Default)]
pub struct StylePresenter;

impl Presenter<DomElement> for StylePresenter {
    fn prepare(&mut self, element: &DomElement, transform_origin: &str) {
        _ = element
            .html()
            .style()
            .set_property(CSS_TRANSFORM_ORIGIN, transform_origin);
    }

    fn commit(&mut self, element: &DomElement, transform: &str) {
        let style = element.html().style();
        let result = if transform.is_empty() {
            style.remove_property(CSS_TRANSFORM).map(|_| ())
        } else {
            style.set_property(CSS_TRANSFORM, transform)
        };
        if let Err(e) = result {
            log::error!("[frame] transform write error: {:?}", e);
        }
    }
}
