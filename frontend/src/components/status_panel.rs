use super::super::Model;
use yew::prelude::*;

pub fn render_status_panel(model: &Model) -> Html {
    let board = &model.board;
    let fill_width = format!("width: {}%", board.progress());

    html! {
        <div class="status-panel">
            <p id="status" class="status-line">{ board.status() }</p>
            {
                if board.is_busy() || board.progress() > 0 {
                    html! {
                        <div class="confidence-meter">
                            <div class="meter">
                                <div class="meter-fill" style={fill_width}></div>
                            </div>
                            <div class="meter-value">{ format!("{}%", board.progress()) }</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
