use super::utils::debounce;
use crate::{Model, Msg};
use shared::FieldName;
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

/// The "Your answers" sheet. Save submits the form and closes the sheet.
pub fn render_review(model: &Model, link: &Scope<Model>) -> Html {
    if !model.review_open {
        return html! {};
    }

    let input = model.form.input();

    html! {
        <aside class="review-sheet">
            <div class="review-header">
                <h2>{"Your answers"}</h2>
                <p>{"You can see your answers here. Click Save to predict."}</p>
            </div>
            <dl class="review-grid">
                { for FieldName::iter().map(|field| html! {
                    <>
                        <dt>{ format!("{}:", field.label()) }</dt>
                        <dd>{ input.display_value(field) }</dd>
                    </>
                }) }
            </dl>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    type="button"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    {"Save"}
                </button>
                <button
                    class="analyze-btn"
                    type="button"
                    onclick={link.callback(|_| Msg::ToggleReview)}
                >
                    {"Close"}
                </button>
            </div>
        </aside>
    }
}
