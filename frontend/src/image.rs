use futures::channel::oneshot;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::scale::{Bounds, JPEG_MIME, JPEG_QUALITY};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, ImageBitmap, Window,
};

use crate::components::utils::describe_js_error;
use crate::error::PipelineError;

/// Closes the bitmap on every exit path.
struct BitmapGuard(ImageBitmap);

impl Drop for BitmapGuard {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Releases the canvas backing store once the encode step is over.
struct CanvasGuard(HtmlCanvasElement);

impl CanvasGuard {
    fn new(document: &Document) -> Result<Self, String> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| describe_js_error(&e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "created element is not a canvas".to_string())?;
        Ok(Self(canvas))
    }
}

impl Drop for CanvasGuard {
    fn drop(&mut self) {
        self.0.set_width(0);
        self.0.set_height(0);
    }
}

/// Decodes the file and re-encodes it as a JPEG data URL no larger than
/// `bounds`.
///
/// `createImageBitmap` is tried first when the platform has it; an `<img>`
/// element loaded from an object URL is the single fallback tier.
pub async fn read_and_downscale(file: &GlooFile, bounds: Bounds) -> Result<String, PipelineError> {
    let window = web_sys::window().ok_or_else(|| PipelineError::Decode("no window".into()))?;

    let fast_failure = if supports_image_bitmap(&window) {
        match decode_with_bitmap(&window, file, bounds).await {
            Ok(data_url) => return Ok(data_url),
            Err(e) => {
                log::warn!("createImageBitmap failed, falling back to <img>: {}", e);
                Some(e)
            }
        }
    } else {
        log::info!("createImageBitmap unavailable, decoding via <img>");
        None
    };

    decode_with_element(&window, file, bounds)
        .await
        .map_err(|fallback| match fast_failure {
            Some(fast) => PipelineError::Decode(format!("{}; {}", fast, fallback)),
            None => PipelineError::Decode(fallback),
        })
}

fn supports_image_bitmap(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("createImageBitmap")).unwrap_or(false)
}

fn document_of(window: &Window) -> Result<Document, String> {
    window.document().ok_or_else(|| "no document".to_string())
}

async fn decode_with_bitmap(
    window: &Window,
    file: &GlooFile,
    bounds: Bounds,
) -> Result<String, String> {
    let blob: &web_sys::Blob = file.as_ref();
    let promise = window
        .create_image_bitmap_with_blob(blob)
        .map_err(|e| describe_js_error(&e))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| describe_js_error(&e))?
        .dyn_into::<ImageBitmap>()
        .map_err(|_| "createImageBitmap returned a non-bitmap".to_string())?;
    let bitmap = BitmapGuard(bitmap);

    let document = document_of(window)?;
    draw_scaled(&document, bitmap.0.width(), bitmap.0.height(), bounds, |context, w, h| {
        context.draw_image_with_image_bitmap_and_dw_and_dh(&bitmap.0, 0.0, 0.0, w, h)
    })
}

async fn decode_with_element(
    window: &Window,
    file: &GlooFile,
    bounds: Bounds,
) -> Result<String, String> {
    // Revoked when dropped, whichever way this function returns.
    let url = ObjectUrl::from(file.clone());
    let image = HtmlImageElement::new().map_err(|e| describe_js_error(&e))?;

    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));
    let _on_load = {
        let sender = sender.clone();
        EventListener::once(&image, "load", move |_| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Ok(()));
            }
        })
    };
    let _on_error = EventListener::once(&image, "error", move |_| {
        if let Some(sender) = sender.borrow_mut().take() {
            let _ = sender.send(Err("image element could not decode the file".to_string()));
        }
    });

    image.set_src(&url);
    receiver
        .await
        .map_err(|_| "image load was abandoned".to_string())??;

    let document = document_of(window)?;
    draw_scaled(
        &document,
        image.natural_width(),
        image.natural_height(),
        bounds,
        |context, w, h| {
            context.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, w, h)
        },
    )
}

fn draw_scaled<F>(
    document: &Document,
    natural_width: u32,
    natural_height: u32,
    bounds: Bounds,
    draw: F,
) -> Result<String, String>
where
    F: FnOnce(&CanvasRenderingContext2d, f64, f64) -> Result<(), JsValue>,
{
    let size = bounds
        .fit(natural_width, natural_height)
        .ok_or_else(|| format!("image reports size {}x{}", natural_width, natural_height))?;

    let canvas = CanvasGuard::new(document)?;
    canvas.0.set_width(size.width);
    canvas.0.set_height(size.height);

    let context = canvas
        .0
        .get_context("2d")
        .map_err(|e| describe_js_error(&e))?
        .ok_or_else(|| "2d canvas context unavailable".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "unexpected canvas context type".to_string())?;

    draw(&context, size.width as f64, size.height as f64).map_err(|e| describe_js_error(&e))?;

    log::info!(
        "Downscaled {}x{} to {}x{}",
        natural_width,
        natural_height,
        size.width,
        size.height
    );

    canvas
        .0
        .to_data_url_with_type_and_encoder_options(JPEG_MIME, &JsValue::from_f64(JPEG_QUALITY))
        .map_err(|e| describe_js_error(&e))
}
