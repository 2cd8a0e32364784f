mod api;
mod components;
mod form;

use components::fields::render_field;
use components::header::render_header;
use components::results::render_result_dialog;
use components::review::render_review;
use components::utils::{debounce, render_notice};
use form::{FormState, Submission};
use gloo_timers::callback::Timeout;
use shared::{FieldName, FieldOptions, PredictionLabel};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const NOTICE_DISMISS_MS: u32 = 4000;
const FIELDS_PER_COLUMN: usize = 7;

// Yew msg components
pub enum Msg {
    // Startup
    OptionsLoaded(FieldOptions),

    // Field edits
    ChoiceChanged(FieldName, String),
    NumberChanged(FieldName, String),

    // Submission
    Submit,
    PredictionReceived(u64, PredictionLabel),
    PredictionFailed(u64),

    // UI states
    ToggleReview,
    ToggleResult,
    DismissNotice,
}

// Main component
pub struct Model {
    form: FormState,
    review_open: bool,
    result_open: bool,
    notice_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self::load_options(ctx);

        Self {
            form: FormState::new(),
            review_open: false,
            result_open: false,
            notice_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(options) => {
                self.form.load_options(options);
                true
            }

            Msg::ChoiceChanged(field, value) => {
                self.form.set_choice(field, value);
                true
            }
            Msg::NumberChanged(field, raw) => {
                self.form.set_number_text(field, &raw);
                true
            }

            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionReceived(ticket, label) => {
                let applied = self.form.complete_submission(ticket, label);
                if applied {
                    self.schedule_notice_dismissal(ctx);
                }
                applied
            }
            Msg::PredictionFailed(ticket) => {
                let applied = self.form.fail_submission(ticket);
                if applied {
                    self.schedule_notice_dismissal(ctx);
                }
                applied
            }

            Msg::ToggleReview => {
                self.review_open = !self.review_open;
                true
            }
            Msg::ToggleResult => {
                self.result_open = !self.result_open;
                if self.result_open && self.form.prediction().is_none() {
                    self.form.flag_missing_result();
                    self.schedule_notice_dismissal(ctx);
                }
                true
            }
            Msg::DismissNotice => {
                self.notice_timeout = None;
                self.form.dismiss_notice();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                { render_header() }
                { render_notice(self.form.notice(), link) }

                <main class="main-content">
                    { self.render_actions(ctx) }
                    { render_review(self, link) }
                    { render_result_dialog(self, link) }
                    { self.render_form(ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Depression Prediction | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn load_options(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_options().await {
                Ok(options) => link.send_message(Msg::OptionsLoaded(options)),
                Err(e) => gloo_console::error!(format!("Error fetching options: {}", e)),
            }
        });
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        self.review_open = false;
        if let Some(submission) = self.form.begin_submission() {
            self.send_prediction(ctx, submission);
        }
        self.schedule_notice_dismissal(ctx);
        true
    }

    fn send_prediction(&self, ctx: &Context<Self>, submission: Submission) {
        spawn_local({
            let link = ctx.link().clone();

            async move {
                log::info!("Submitting assessment #{}", submission.ticket);
                match api::submit_prediction(&submission.input).await {
                    Ok(label) => {
                        link.send_message(Msg::PredictionReceived(submission.ticket, label))
                    }
                    Err(e) => {
                        gloo_console::error!(format!("Error predicting: {}", e));
                        link.send_message(Msg::PredictionFailed(submission.ticket))
                    }
                }
            }
        });
    }

    fn schedule_notice_dismissal(&mut self, ctx: &Context<Self>) {
        if let Some(timeout) = self.notice_timeout.take() {
            timeout.cancel();
        }
        if self.form.notice().is_none() {
            return;
        }

        let link = ctx.link().clone();
        let timeout = Timeout::new(NOTICE_DISMISS_MS, move || {
            link.send_message(Msg::DismissNotice);
        });
        self.notice_timeout = Some(timeout);
    }
}

// Rendering methods
impl Model {
    fn render_actions(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link().clone();

        html! {
            <div class="button-container">
                <button
                    class="analyze-btn"
                    type="button"
                    onclick={link.callback(|_| Msg::ToggleReview)}
                >
                    { if self.form.is_submitting() { "Predicting..." } else { "Predict" } }
                </button>
                <button
                    class="analyze-btn"
                    type="button"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ToggleResult)
                    })}
                >
                    {"Show Result"}
                </button>
            </div>
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let fields: Vec<FieldName> = FieldName::iter().collect();

        html! {
            <form class="assessment-form" {onsubmit}>
                { for fields.chunks(FIELDS_PER_COLUMN).map(|column| html! {
                    <div class="form-column">
                        { for column.iter().map(|field| render_field(&self.form, *field, link)) }
                    </div>
                }) }
            </form>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
