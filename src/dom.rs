use anyhow::anyhow;
use rings_core::{SurfaceSize, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

/// Current CSS viewport size and device pixel ratio.
pub fn read_viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|js| js.as_f64())
            .map(|px| px.max(0.0) as u32)
            .unwrap_or(0)
    };
    let width = read(window.inner_width());
    let height = read(window.inner_height());
    Ok(Viewport::new(width, height, window.device_pixel_ratio())?)
}

/// Create the output canvas inside the element matched by `selector`.
pub fn mount_canvas(
    document: &web::Document,
    selector: &str,
    canvas_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .query_selector(selector)
        .map_err(|e| anyhow!("{selector}: {e:?}"))?
        .ok_or_else(|| anyhow!("missing render target {selector}"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("not a canvas: {e:?}"))?;
    canvas.set_id(canvas_id);
    _ = canvas.style().set_property("display", "block");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(canvas)
}

/// CSS size follows the viewport; the backing store uses physical pixels.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport, size: SurfaceSize) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    canvas.set_width(size.width);
    canvas.set_height(size.height);
}
