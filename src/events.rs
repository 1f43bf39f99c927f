//! Browser event wiring.
//!
//! Listeners are owned by [`EventListener`] guards and removed when the
//! guard is dropped; handlers receive a typed [`HostEvent`] through an
//! injected dispatch callback instead of touching application state.

use crate::constants::*;
use crate::dom;
use crate::lifecycle::PageEvent;
use rings_core::Viewport;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resize(Viewport),
    Page(PageEvent),
    TogglePause,
}

pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Keeps the host listeners alive; dropping it unhooks all of them.
pub struct HostEvents {
    _listeners: Vec<EventListener>,
}

pub fn wire_host_events(
    window: &web::Window,
    document: &web::Document,
    dispatch: Rc<dyn Fn(HostEvent)>,
) -> anyhow::Result<HostEvents> {
    let mut listeners = Vec::with_capacity(5);

    let on_resize = dispatch.clone();
    let window_resize = window.clone();
    listeners.push(EventListener::new(window, RESIZE_EVENT, move |_| {
        match dom::read_viewport(&window_resize) {
            Ok(viewport) => on_resize(HostEvent::Resize(viewport)),
            Err(e) => log::debug!("[events] resize ignored: {e}"),
        }
    })?);

    let on_visibility = dispatch.clone();
    let document_vis = document.clone();
    listeners.push(EventListener::new(document, VISIBILITY_EVENT, move |_| {
        let page = if document_vis.hidden() {
            PageEvent::Hidden
        } else {
            PageEvent::Visible
        };
        on_visibility(HostEvent::Page(page));
    })?);

    let on_key = dispatch.clone();
    listeners.push(EventListener::new(window, KEYDOWN_EVENT, move |ev| {
        if let Some(key) = ev.dyn_ref::<web::KeyboardEvent>() {
            if key.repeat() {
                return;
            }
            if is_pause_key(&key.code()) {
                key.prevent_default();
                on_key(HostEvent::TogglePause);
            }
        }
    })?);

    let on_pagehide = dispatch.clone();
    listeners.push(EventListener::new(window, PAGEHIDE_EVENT, move |ev| {
        let persisted = is_persisted(&ev);
        on_pagehide(HostEvent::Page(PageEvent::PageHide { persisted }));
    })?);

    let on_pageshow = dispatch;
    listeners.push(EventListener::new(window, PAGESHOW_EVENT, move |ev| {
        let persisted = is_persisted(&ev);
        on_pageshow(HostEvent::Page(PageEvent::PageShow { persisted }));
    })?);

    Ok(HostEvents {
        _listeners: listeners,
    })
}

/// Whether a page transition involves the back/forward cache.
fn is_persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .is_some_and(|e| e.persisted())
}
