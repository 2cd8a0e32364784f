use std::collections::BTreeMap;

use shared::{AssessmentInput, FieldName, FieldOptions, PredictionLabel, ValidationErrors};

pub const SUBMIT_SUCCESS: &str = "Prediction completed successfully";
pub const SUBMIT_FAILURE: &str =
    "There was an error while predicting the result. Please check all the inputs again.";
pub const FIX_FIELDS: &str = "Please fix the highlighted fields before predicting.";
pub const NO_RESULT_YET: &str = "Please enter your input first";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// A validated snapshot ready to be posted. `ticket` identifies it when the
/// response comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: u64,
    pub input: AssessmentInput,
}

/// Everything the form shows, independent of the DOM.
#[derive(Debug, Default)]
pub struct FormState {
    input: AssessmentInput,
    options: FieldOptions,
    errors: ValidationErrors,
    // Number inputs whose text did not parse; the record keeps the last good value.
    unparsed: BTreeMap<FieldName, String>,
    prediction: Option<PredictionLabel>,
    last_ticket: u64,
    in_flight: Option<u64>,
    notice: Option<Notice>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &AssessmentInput {
        &self.input
    }

    pub fn choices(&self, field: FieldName) -> &[String] {
        self.options.choices(field)
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn prediction(&self) -> Option<&PredictionLabel> {
        self.prediction.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn load_options(&mut self, options: FieldOptions) {
        self.options = options;
    }

    pub fn set_choice(&mut self, field: FieldName, value: String) {
        if self.input.set_choice(field, value) {
            self.errors.remove(field);
        }
    }

    /// Text shown in a number input: the raw text if it failed to parse,
    /// otherwise the stored value.
    pub fn number_text(&self, field: FieldName) -> String {
        match self.unparsed.get(&field) {
            Some(raw) => raw.clone(),
            None => self.input.display_value(field),
        }
    }

    pub fn set_number_text(&mut self, field: FieldName, raw: &str) {
        if !field.is_numeric() {
            return;
        }
        self.errors.remove(field);
        match raw.trim().parse::<i32>() {
            Ok(value) => {
                self.unparsed.remove(&field);
                self.input.set_number(field, value);
            }
            Err(_) => {
                self.unparsed.insert(field, raw.to_string());
            }
        }
    }

    /// Validates the form and, if it passes, issues a new ticket that
    /// supersedes any submission still in flight. Returns `None` (and records
    /// field errors) when validation fails.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        let mut errors = match self.input.validate_against(&self.options) {
            Ok(()) => ValidationErrors::default(),
            Err(errors) => errors,
        };
        for field in self.unparsed.keys() {
            errors.insert(*field, format!("{} must be a whole number", field.label()));
        }

        if !errors.is_empty() {
            log::warn!("Submission blocked: {}", errors);
            self.errors = errors;
            self.notice = Some(Notice::Failure(FIX_FIELDS.to_string()));
            return None;
        }

        self.errors = ValidationErrors::default();
        self.last_ticket += 1;
        self.in_flight = Some(self.last_ticket);
        Some(Submission {
            ticket: self.last_ticket,
            input: self.input.clone(),
        })
    }

    /// Returns false when the ticket was superseded and the label dropped.
    pub fn complete_submission(&mut self, ticket: u64, label: PredictionLabel) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.prediction = Some(label);
        self.notice = Some(Notice::Success(SUBMIT_SUCCESS.to_string()));
        true
    }

    /// Keeps the previous prediction. Returns false for superseded tickets.
    pub fn fail_submission(&mut self, ticket: u64) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.notice = Some(Notice::Failure(SUBMIT_FAILURE.to_string()));
        true
    }

    fn settle(&mut self, ticket: u64) -> bool {
        if ticket != self.last_ticket {
            log::debug!("Dropping response for superseded submission {}", ticket);
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Called when the result dialog opens without anything to show.
    pub fn flag_missing_result(&mut self) {
        if self.prediction.is_none() {
            self.notice = Some(Notice::Failure(NO_RESULT_YET.to_string()));
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
