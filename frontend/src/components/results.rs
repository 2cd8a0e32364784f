use crate::form::NO_RESULT_YET;
use crate::{Model, Msg};
use shared::PredictionOutcome;
use yew::html::Scope;
use yew::prelude::*;

pub fn outcome_class(outcome: PredictionOutcome) -> &'static str {
    match outcome {
        PredictionOutcome::Positive => "result-positive",
        PredictionOutcome::Negative => "result-negative",
    }
}

pub fn render_result_dialog(model: &Model, link: &Scope<Model>) -> Html {
    if !model.result_open {
        return html! {};
    }

    let body = match model.form.prediction() {
        Some(label) => html! {
            <div class={classes!("result-badge", outcome_class(label.outcome()))}>
                <span>{ label.to_string() }</span>
            </div>
        },
        None => html! { <p class="no-results-message">{ NO_RESULT_YET }</p> },
    };

    html! {
        <div class="results-container" role="dialog">
            <div class="result-header">
                <h2>{"Prediction Result"}</h2>
                <p>{"You can see your prediction result here"}</p>
            </div>
            { body }
            <button
                class="analyze-btn"
                type="button"
                onclick={link.callback(|_| Msg::ToggleResult)}
            >
                {"Close"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PredictionLabel;

    #[test]
    fn only_depression_renders_positive() {
        let positive = PredictionLabel::from("DEPRESSION".to_string());
        let negative = PredictionLabel::from("NO DEPRESSION".to_string());
        assert_eq!(outcome_class(positive.outcome()), "result-positive");
        assert_eq!(outcome_class(negative.outcome()), "result-negative");
    }
}
