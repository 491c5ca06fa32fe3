mod api;
mod components;
mod error;
mod image;
mod ocr;
mod pipeline;

use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::status_panel::render_status_panel;
use components::upload_section::render_upload_section;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use pipeline::Progress;
use shared::NovaResult;
use shared::status::StatusBoard;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File selection
    FileChosen(Option<GlooFile>),

    // Processing run
    Process,
    Progress(Progress),
    Classified(NovaResult),
    Failed(String),
    RunFinished,

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    file: Option<GlooFile>,
    preview_url: Option<ObjectUrl>,
    board: StatusBoard,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            file: None,
            preview_url: None,
            board: StatusBoard::new(),
            is_dragging: false,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No window; paste support disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),

            Msg::Process => handlers::handle_process(self, ctx),
            Msg::Progress(progress) => handlers::handle_progress(self, progress),
            Msg::Classified(result) => {
                self.board.finish(&result);
                true
            }
            Msg::Failed(detail) => {
                self.board.fail(&detail);
                true
            }
            Msg::RunFinished => {
                self.board.end();
                true
            }

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                { render_upload_section(self, ctx) }
                { render_status_panel(self) }
                { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"NOVA Inspector | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
