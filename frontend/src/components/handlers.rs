use super::super::pipeline::{self, Progress};
use super::super::{Model, Msg};
use super::utils::first_image_file;
use gloo_file::{File as GlooFile, ObjectUrl};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: Option<GlooFile>) -> bool {
    if model.board.is_busy() {
        log::warn!("Ignoring file selection while a run is in progress");
        return false;
    }

    // Replacing the preview revokes the previous object URL.
    model.preview_url = file.clone().map(ObjectUrl::from);
    model.board.file_selected(file.is_some());
    model.file = file;
    true
}

pub fn handle_process(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !model.board.begin() {
        return true;
    }

    let Some(file) = model.file.clone() else {
        model.board.end();
        return true;
    };

    let link = ctx.link().clone();
    let on_progress = link.callback(Msg::Progress);

    spawn_local(async move {
        match pipeline::run(&file, &on_progress).await {
            Ok(result) => link.send_message(Msg::Classified(result)),
            Err(e) => {
                log::error!("Processing failed: {:?}", e);
                link.send_message(Msg::Failed(e.to_string()));
            }
        }
        link.send_message(Msg::RunFinished);
    });

    true
}

pub fn handle_progress(model: &mut Model, progress: Progress) -> bool {
    match progress {
        Progress::Recognizing => model.board.ocr_started(),
        Progress::Ocr(step) => model.board.ocr_progress(&step.label, step.fraction),
        Progress::Recognized(text) => model.board.ocr_finished(&text),
        Progress::Classifying => model.board.classifying(),
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image_file(&file_list))
    {
        ctx.link().send_message(Msg::FileChosen(Some(file)));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|data| data.files()) {
        if let Some(file) = first_image_file(&file_list) {
            event.prevent_default();
            ctx.link().send_message(Msg::FileChosen(Some(file)));
            return true;
        }
    }
    false
}
