use instant::Instant;
use rings_core::{Stage, Viewport};
use rings_render::Renderer;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

fn viewport_of(window: &Window) -> Option<Viewport> {
    let scale = window.scale_factor();
    let logical = window.inner_size().to_logical::<f64>(scale);
    match Viewport::new(logical.width.round() as u32, logical.height.round() as u32, scale) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("[native] resize ignored: {e}");
            None
        }
    }
}

/// Render the current state; returns `false` when the loop should exit.
fn draw(stage: &Stage, renderer: &mut Renderer<'_>) -> bool {
    match renderer.render(stage.scene(), stage.camera()) {
        Ok(()) => true,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            renderer.reconfigure();
            true
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("render error: out of memory");
            false
        }
        Err(e) => {
            log::warn!("frame skipped: {:?}", e);
            true
        }
    }
}

fn resize(stage: &mut Stage, renderer: &mut Renderer<'_>, window: &Window) -> bool {
    let Some(viewport) = viewport_of(window) else {
        return true;
    };
    let size = stage.resize(viewport);
    renderer.resize(size);
    // paused: nothing else will present the reconfigured surface
    stage.is_running() || draw(stage, renderer)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rings (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;

    let viewport = viewport_of(&window).ok_or_else(|| anyhow::anyhow!("window has no area"))?;
    let mut stage = Stage::new(viewport);
    let size = stage.resize(viewport);
    let mut renderer = pollster::block_on(Renderer::new(&window, size))?;
    log::info!("rings-native started");

    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. },
            ..
        } => {
            if !resize(&mut stage, &mut renderer, window) {
                elwt.exit();
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            stage.stop();
            elwt.exit();
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Space),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => stage.toggle(),
        Event::AboutToWait => {
            if stage.advance(Instant::now()).is_none() {
                return;
            }
            if draw(&stage, &mut renderer) {
                window.request_redraw();
            } else {
                elwt.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}
