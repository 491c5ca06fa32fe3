use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_image_file};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_preview(model) }
            { render_process_button(model, ctx) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let busy = model.board.is_busy();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        Msg::FileChosen(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                capture="environment"
                style="display: none;"
                disabled={busy}
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="analyze-btn"
                disabled={busy}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-camera"></i> {" Vælg billede"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Træk et billede hertil, indsæt det, eller klik"}</p>
                    <p class="file-types">
                        {"Understøttede formater: JPG, PNG, WEBP, HEIC (hvor browseren kan)"}
                    </p>
                </div>
            </div>
        </>
    }
}

fn render_preview(model: &Model) -> Html {
    match &model.preview_url {
        Some(url) => html! {
            <img id="preview" src={url.to_string()} alt="Valgt billede" />
        },
        None => html! {},
    }
}

fn render_process_button(model: &Model, ctx: &Context<Model>) -> Html {
    let busy = model.board.is_busy();

    html! {
        <div class="button-container">
            <button
                id="process-btn"
                class="analyze-btn"
                disabled={busy}
                onclick={ctx.link().callback(|_| Msg::Process)}
            >
                {
                    if busy {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Behandler..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Process"}</> }
                    }
                }
            </button>
        </div>
    }
}
