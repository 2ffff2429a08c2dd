#![cfg(target_arch = "wasm32")]
use kinetic_core::{AnimationDriver, InteractionConfig, SignalSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;

pub(crate) type DomDriver =
    AnimationDriver<dom::DomElement, frame::RafScheduler, frame::StylePresenter>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kinetic-web starting");
    Ok(())
}

/// A container whose `[data-kinetic]` elements react to the pointer or to an
/// audio element's spectrum.
#[wasm_bindgen]
pub struct KineticField {
    driver: Rc<RefCell<DomDriver>>,
    scheduler: frame::RafScheduler,
    audio: Option<audio::AudioPlayback>,
    resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl KineticField {
    /// Pointer-driven field.
    #[wasm_bindgen(constructor)]
    pub fn new(container: &web::Element) -> Result<KineticField, JsValue> {
        let source = SignalSource::Pointer(events::shared_pointer());
        Self::build(container, source, None).map_err(to_js)
    }

    /// Field driven by the frequency spectrum of `media`. Nothing moves until
    /// `play()` resolves.
    #[wasm_bindgen(js_name = withAudio)]
    pub fn with_audio(
        container: &web::Element,
        media: &web::HtmlMediaElement,
    ) -> Result<KineticField, JsValue> {
        let playback = audio::AudioPlayback::new(media.clone());
        let source = SignalSource::Spectrum(Box::new(playback.spectrum()));
        Self::build(container, source, Some(playback)).map_err(to_js)
    }

    pub fn start(&self) {
        self.driver.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.driver.borrow_mut().stop();
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.driver.borrow().is_active()
    }

    /// Start audio playback, then the animation loop. Rejects when the field
    /// has no audio source or the browser refuses playback; elements then
    /// stay at their origin.
    pub fn play(&self) -> js_sys::Promise {
        let driver = self.driver.clone();
        let playback = self.audio.clone();
        future_to_promise(async move {
            let playback = playback
                .ok_or_else(|| JsValue::from_str("field was created without an audio source"))?;
            match playback.play().await {
                Ok(()) => {
                    driver.borrow_mut().start();
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    log::error!("[audio] play failed: {:?}", e);
                    Err(to_js(e))
                }
            }
        })
    }

    /// Stop, restore every element and release all state. Safe to call more
    /// than once.
    pub fn destroy(&mut self) {
        self.driver.borrow_mut().destroy();
        self.scheduler.uninstall();
        if let Some(playback) = &self.audio {
            playback.pause();
            playback.close();
        }
        if let Some(closure) = self.resize.take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl KineticField {
    fn build(
        container: &web::Element,
        source: SignalSource,
        audio: Option<audio::AudioPlayback>,
    ) -> anyhow::Result<Self> {
        let scheduler = frame::RafScheduler::default();
        let driver = Rc::new(RefCell::new(AnimationDriver::new(
            source,
            scheduler.clone(),
            frame::StylePresenter,
        )));
        scheduler.install(&driver);

        let elements = dom::discover(container);
        if elements.is_empty() {
            log::warn!("[field] no [data-kinetic] elements under container");
        }
        // Parse everything before attaching so a bad attribute leaves no
        // frame request behind.
        let mut configured = Vec::with_capacity(elements.len());
        for el in elements {
            let element = dom::DomElement::new(el);
            let config = InteractionConfig::from_attributes(|name| element.attribute(name))?;
            configured.push((element, config));
        }
        // audio fields wait for play()
        let autostart = audio.is_none() && configured.iter().any(|(_, c)| c.active);
        {
            let mut d = driver.borrow_mut();
            for (element, config) in configured {
                d.attach_paused(element, config)?;
            }
            if autostart {
                d.start();
            }
        }

        let resize = wire_resize(&driver);
        Ok(Self {
            driver,
            scheduler,
            audio,
            resize,
        })
    }
}

impl Drop for KineticField {
    fn drop(&mut self) {
        self.destroy();
    }
}

// Cached layout boxes go stale on resize.
fn wire_resize(driver: &Rc<RefCell<DomDriver>>) -> Option<Closure<dyn FnMut()>> {
    let weak = Rc::downgrade(driver);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(driver) = weak.upgrade() {
            if let Ok(d) = driver.try_borrow() {
                for element in d.elements() {
                    element.remeasure();
                }
            }
        }
    }) as Box<dyn FnMut()>);
    let window = web::window()?;
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

