use gloo_file::File as GlooFile;
use shared::NovaResult;
use shared::scale::Bounds;
use yew::Callback;

use crate::api;
use crate::error::PipelineError;
use crate::image::read_and_downscale;
use crate::ocr::{self, OcrProgress};

/// Stage notifications sent back to the component while a run is going.
#[derive(Clone, Debug, PartialEq)]
pub enum Progress {
    Recognizing,
    Ocr(OcrProgress),
    Recognized(String),
    Classifying,
}

/// Downscale, recognize, classify. Each step finishes before the next one
/// starts and the first failure ends the run.
pub async fn run(
    file: &GlooFile,
    on_progress: &Callback<Progress>,
) -> Result<NovaResult, PipelineError> {
    let data_url = read_and_downscale(file, Bounds::default()).await?;

    on_progress.emit(Progress::Recognizing);
    let ocr_progress = on_progress.reform(Progress::Ocr);
    let text = ocr::recognize(&data_url, &ocr_progress).await?;
    drop(data_url);
    on_progress.emit(Progress::Recognized(text.clone()));

    // Empty text still goes to the relay; it decides what that means.
    on_progress.emit(Progress::Classifying);
    api::classify(&text).await
}
