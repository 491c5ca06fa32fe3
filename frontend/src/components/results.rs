use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let board = &model.board;

    html! {
        <div class="results-container">
            if !board.headline().is_empty() {
                <div class="result-header">
                    <h2 id="result">{ board.headline() }</h2>
                </div>
            }
            <div class="detailed-results">
                <h3>{"Genkendt tekst"}</h3>
                <textarea
                    id="ocr-text"
                    readonly=true
                    rows="8"
                    value={board.ocr_text().to_string()}
                />
            </div>
        </div>
    }
}
