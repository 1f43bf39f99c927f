use crate::dom;
use instant::Instant;
use rings_core::{Stage, Viewport};
use rings_render::Renderer;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stage plus the renderer drawing it into the page canvas.
pub struct App {
    pub stage: Stage,
    pub renderer: Renderer<'static>,
    pub canvas: web::HtmlCanvasElement,
    /// Paused with the pause key; visibility changes leave it paused.
    pub user_paused: bool,
}

impl App {
    /// Advance and render one frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        if self.stage.advance(Instant::now()).is_none() {
            return false;
        }
        self.draw()
    }

    /// Render the current scene state without advancing it.
    fn draw(&mut self) -> bool {
        match self.renderer.render(self.stage.scene(), self.stage.camera()) {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of memory; stopping");
                self.stage.stop();
                false
            }
            Err(e) => {
                log::warn!("frame skipped: {:?}", e);
                true
            }
        }
    }

    /// Resizing the canvas clears it, so a stopped stage is redrawn once.
    pub fn resize(&mut self, viewport: Viewport) {
        let size = self.stage.resize(viewport);
        dom::sync_canvas_size(&self.canvas, viewport, size);
        self.renderer.resize(size);
        if !self.stage.is_running() {
            self.draw();
        }
    }
}

struct LoopInner {
    app: Rc<RefCell<App>>,
    pending: Cell<Option<i32>>,
    tick: Closure<dyn FnMut()>,
}

impl LoopInner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(w) = web::window() else { return };
        match w.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for LoopInner {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// `requestAnimationFrame` loop with explicit start/stop.
///
/// At most one frame is pending at a time. The loop stops rescheduling by
/// itself once the stage reports it is stopped.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(app: Rc<RefCell<App>>) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<LoopInner>| {
            let weak = weak.clone();
            let tick = Closure::wrap(Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                inner.pending.set(None);
                let keep_going = inner.app.borrow_mut().frame();
                if keep_going {
                    inner.request();
                }
            }) as Box<dyn FnMut()>);
            LoopInner {
                app,
                pending: Cell::new(None),
                tick,
            }
        });
        Self { inner }
    }

    pub fn start(&self) {
        self.inner.request();
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }
}
