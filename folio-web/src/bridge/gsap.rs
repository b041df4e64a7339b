//! GSAP bindings - the animation engine and gesture observer
//!
//! The engine is loaded by the page as a global script. `Gsap::detect`
//! is the only way to get a handle, so nothing calls into GSAP unless it
//! was found at boot.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::anim::{PropValue, Props, Timeline, Tween};
use crate::config::GestureConfig;
use crate::error::BootError;
use crate::nav::{Gesture, TransitionPlan};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &Object) -> GsapTimeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);

    type GsapTimeline;

    #[wasm_bindgen(method)]
    fn to(this: &GsapTimeline, targets: &JsValue, vars: &Object, position: f64);

    #[wasm_bindgen(method)]
    fn from(this: &GsapTimeline, targets: &JsValue, vars: &Object, position: f64);

    #[wasm_bindgen(method, js_name = fromTo)]
    fn from_to(this: &GsapTimeline, targets: &JsValue, from: &Object, to: &Object, position: f64);

    #[wasm_bindgen(js_namespace = Observer, js_name = create)]
    fn observer_create(vars: &Object);
}

fn global(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn set_key(obj: &Object, key: &str, value: &JsValue) {
    // Reflect::set only fails on frozen objects; these are fresh literals
    let _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

/// Build a GSAP vars object from props and optional timing
fn vars(props: &Props, tween: Option<&Tween>) -> Object {
    let obj = Object::new();
    let timing = tween.map(Tween::entries).unwrap_or_default();
    for (key, value) in props.entries().into_iter().chain(timing) {
        let value = match value {
            PropValue::Num(n) => JsValue::from_f64(n),
            PropValue::Str(s) => JsValue::from_str(s),
        };
        set_key(&obj, key, &value);
    }
    obj
}

/// Handle to a loaded GSAP with the Observer plugin registered
#[derive(Clone, Copy, Debug)]
pub struct Gsap {
    _loaded: (),
}

impl Gsap {
    pub fn detect() -> Result<Self, BootError> {
        global("gsap").ok_or(BootError::AnimationEngineMissing("GSAP"))?;
        let observer =
            global("Observer").ok_or(BootError::AnimationEngineMissing("GSAP Observer plugin"))?;
        gsap_register_plugin(&observer);
        Ok(Self { _loaded: () })
    }

    /// Apply props instantly
    pub fn set(&self, target: &HtmlElement, props: &Props) {
        gsap_set(target.as_ref(), &vars(props, None));
    }

    pub fn to(&self, target: &HtmlElement, props: &Props, tween: &Tween) {
        gsap_to(target.as_ref(), &vars(props, Some(tween)));
    }

    /// Play outgoing and incoming tweens together, then call `on_complete`
    pub fn play_transition<F>(
        &self,
        outgoing: &HtmlElement,
        incoming: &HtmlElement,
        plan: &TransitionPlan,
        on_complete: F,
    ) where
        F: FnOnce() + 'static,
    {
        let options = Object::new();
        set_key(&options, "onComplete", &Closure::once_into_js(on_complete));
        let timeline = gsap_timeline(&options);

        timeline.to(outgoing.as_ref(), &vars(&plan.outgoing, Some(&plan.tween)), 0.0);
        timeline.from_to(
            incoming.as_ref(),
            &vars(&plan.incoming_from, None),
            &vars(&plan.incoming_to, Some(&plan.tween)),
            0.0,
        );
    }

    /// Play a timeline; step targets are resolved against `document`
    pub fn play_timeline(&self, document: &Document, timeline: &Timeline) {
        let counts: Vec<usize> = timeline
            .steps
            .iter()
            .map(|step| {
                document
                    .query_selector_all(&step.target)
                    .map(|list| list.length() as usize)
                    .unwrap_or(0)
            })
            .collect();
        let starts = timeline.schedule(&counts);

        let tl = gsap_timeline(&Object::new());
        for ((step, start), count) in timeline.steps.iter().zip(starts).zip(counts) {
            if count == 0 {
                continue;
            }
            let target = JsValue::from_str(&step.target);
            match &step.to {
                Some(to) => tl.from_to(
                    &target,
                    &vars(&step.from, None),
                    &vars(to, Some(&step.tween)),
                    start,
                ),
                None => tl.from(&target, &vars(&step.from, Some(&step.tween)), start),
            }
        }
    }

    /// Turn wheel/touch/pointer input on `window` into discrete gestures
    pub fn observe_gestures<F>(&self, window: &Window, config: &GestureConfig, on_gesture: F)
    where
        F: FnMut(Gesture) + 'static,
    {
        let handler = Rc::new(RefCell::new(on_gesture));
        let intent = |gesture: Gesture| {
            let handler = Rc::clone(&handler);
            Closure::wrap(Box::new(move || (&mut *handler.borrow_mut())(gesture)) as Box<dyn FnMut()>)
                .into_js_value()
        };

        let options = Object::new();
        set_key(&options, "target", window.as_ref());
        set_key(&options, "type", &JsValue::from_str(&config.types));
        set_key(&options, "wheelSpeed", &JsValue::from_f64(config.wheel_speed));
        set_key(&options, "tolerance", &JsValue::from_f64(config.tolerance));
        set_key(&options, "preventDefault", &JsValue::TRUE);
        set_key(&options, "ignore", &JsValue::from_str(&config.ignore));
        // With a negative wheel speed, "up" is a scroll toward later content
        set_key(&options, "onUp", &intent(Gesture::Forward));
        set_key(&options, "onDown", &intent(Gesture::Back));

        observer_create(&options);
    }
}
