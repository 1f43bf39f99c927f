#![cfg(target_arch = "wasm32")]
use rings_core::Stage;
use rings_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod lifecycle;

use events::{HostEvent, HostEvents};
use frame::{App, FrameLoop};
use lifecycle::LoopAction;

/// Everything that must stay alive while the scene is on the page.
struct Runtime {
    app: Rc<RefCell<App>>,
    frame_loop: FrameLoop,
    _events: HostEvents,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rings-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation and release the canvas listeners and GPU resources.
#[wasm_bindgen]
pub fn shutdown() {
    let runtime = RUNTIME.with(|r| r.borrow_mut().take());
    if let Some(rt) = runtime {
        rt.frame_loop.stop();
        rt.app.borrow_mut().stage.stop();
        log::info!("rings-web shut down");
    }
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let viewport = dom::read_viewport(&window)?;
    let canvas = dom::mount_canvas(&document, constants::RENDER_TARGET_SELECTOR, constants::CANVAS_ID)?;

    let mut stage = Stage::new(viewport);
    let size = stage.resize(viewport);
    dom::sync_canvas_size(&canvas, viewport, size);

    let renderer = Renderer::new(wgpu::SurfaceTarget::Canvas(canvas.clone()), size).await?;

    let app = Rc::new(RefCell::new(App {
        stage,
        renderer,
        canvas,
        user_paused: false,
    }));
    let frame_loop = FrameLoop::new(app.clone());

    let dispatch: Rc<dyn Fn(HostEvent)> = {
        let app = app.clone();
        let frame_loop = frame_loop.clone();
        Rc::new(move |ev| handle_host_event(&app, &frame_loop, ev))
    };
    let events = events::wire_host_events(&window, &document, dispatch)?;

    frame_loop.start();
    RUNTIME.with(|r| {
        *r.borrow_mut() = Some(Runtime {
            app,
            frame_loop,
            _events: events,
        })
    });
    Ok(())
}

fn handle_host_event(app: &Rc<RefCell<App>>, frame_loop: &FrameLoop, ev: HostEvent) {
    match ev {
        HostEvent::Resize(viewport) => app.borrow_mut().resize(viewport),
        HostEvent::Page(page) => {
            let user_paused = app.borrow().user_paused;
            match lifecycle::loop_action(page, user_paused) {
                LoopAction::Stop => {
                    app.borrow_mut().stage.stop();
                    frame_loop.stop();
                }
                LoopAction::Resume => {
                    app.borrow_mut().stage.start();
                    frame_loop.start();
                }
                LoopAction::Shutdown => {
                    app.borrow_mut().stage.stop();
                    frame_loop.stop();
                    // Listeners can't be dropped from inside their own callback.
                    spawn_local(async { shutdown() });
                }
                LoopAction::Ignore => {}
            }
        }
        HostEvent::TogglePause => {
            let running = {
                let mut a = app.borrow_mut();
                a.stage.toggle();
                a.user_paused = !a.stage.is_running();
                a.stage.is_running()
            };
            if running {
                frame_loop.start();
            } else {
                frame_loop.stop();
            }
        }
    }
}
