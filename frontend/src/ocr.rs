use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

use crate::components::utils::describe_js_error;
use crate::error::PipelineError;

/// Danish and English in one recognition pass.
pub const LANGUAGES: &str = "dan+eng";

#[wasm_bindgen]
extern "C" {
    // Provided by the tesseract.js script tag in index.html.
    #[wasm_bindgen(catch, js_namespace = Tesseract, js_name = recognize)]
    fn tesseract_recognize(image: &str, langs: &str, options: &Object) -> Result<Promise, JsValue>;
}

/// One logger event from the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct OcrProgress {
    pub label: String,
    pub fraction: f64,
}

fn progress_from(message: &JsValue) -> Option<OcrProgress> {
    let label = Reflect::get(message, &JsValue::from_str("status")).ok()?.as_string()?;
    let fraction = Reflect::get(message, &JsValue::from_str("progress"))
        .ok()
        .and_then(|p| p.as_f64())
        .unwrap_or(0.0);
    Some(OcrProgress { label, fraction })
}

/// Recognizes `image_url` (a data URL) and returns the trimmed text.
pub async fn recognize(
    image_url: &str,
    on_progress: &Callback<OcrProgress>,
) -> Result<String, PipelineError> {
    let active = Rc::new(Cell::new(true));
    let logger = {
        let on_progress = on_progress.clone();
        let active = active.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
            if !active.get() {
                return;
            }
            if let Some(progress) = progress_from(&message) {
                on_progress.emit(progress);
            }
        })
    };

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("logger"), logger.as_ref())
        .map_err(|e| PipelineError::Ocr(describe_js_error(&e)))?;

    let promise = tesseract_recognize(image_url, LANGUAGES, &options)
        .map_err(|e| PipelineError::Ocr(describe_js_error(&e)))?;
    let outcome = JsFuture::from(promise).await;
    // The worker may still log after the promise settles, so the closure is
    // handed to JS for good and only muted here.
    active.set(false);
    logger.forget();

    let result = outcome.map_err(|e| {
        gloo_console::error!(e.clone());
        PipelineError::Ocr(describe_js_error(&e))
    })?;

    let text = Reflect::get(&result, &JsValue::from_str("data"))
        .and_then(|data| Reflect::get(&data, &JsValue::from_str("text")))
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_default();

    Ok(text.trim().to_string())
}
