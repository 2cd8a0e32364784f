use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::assessment::{AssessmentInput, FieldKind, FieldName};
use crate::options::FieldOptions;

/// Inclusive bounds of a numeric field. `max` is open-ended when `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    pub min: i32,
    pub max: Option<i32>,
}

impl NumericRange {
    pub const fn between(min: i32, max: i32) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: i32) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && self.max.is_none_or(|max| value <= max)
    }

    fn message(&self, label: &str) -> String {
        match self.max {
            Some(max) => format!("{} must be between {} and {}", label, self.min, max),
            None => format!("{} must be at least {}", label, self.min),
        }
    }
}

/// Field-level validation failures, one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    /// Replaces any earlier message for `field`.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl AssessmentInput {
    /// Checks numeric ranges and required choices.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.collect_errors(None).into_result()
    }

    /// Like [`validate`](Self::validate), and also rejects choices that are not
    /// offered. Fields whose option list is empty are not membership-checked.
    pub fn validate_against(&self, options: &FieldOptions) -> Result<(), ValidationErrors> {
        self.collect_errors(Some(options)).into_result()
    }

    fn collect_errors(&self, options: Option<&FieldOptions>) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        for field in FieldName::iter() {
            match field.kind() {
                FieldKind::Number(range) => {
                    let value = self.number(field).unwrap_or_default();
                    if !range.contains(value) {
                        errors.insert(field, range.message(field.label()));
                    }
                }
                FieldKind::Choice { required } => {
                    let value = self.choice(field).unwrap_or_default();
                    if value.trim().is_empty() {
                        if required {
                            errors.insert(field, format!("{} is required", field.label()));
                        }
                        continue;
                    }
                    if let Some(options) = options {
                        let choices = options.choices(field);
                        if !choices.is_empty() && !options.offers(field, value) {
                            errors.insert(
                                field,
                                format!("'{}' is not one of the offered choices", value),
                            );
                        }
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> AssessmentInput {
        AssessmentInput {
            gender: "Female".into(),
            age: 27,
            city: "Pune".into(),
            employment_status: "Working Professional".into(),
            profession: "Teacher".into(),
            work_pressure: 3,
            sleep_duration: "7-8 hours".into(),
            dietary_habits: "Moderate".into(),
            degree: "B.Ed".into(),
            suicidal_thoughts: "No".into(),
            family_history: "Yes".into(),
            job_satisfaction: 4,
            work_hours: 9,
            financial_stress: 2,
        }
    }

    #[test]
    fn complete_input_passes() {
        assert_eq!(complete_input().validate(), Ok(()));
    }

    #[test]
    fn numeric_ranges_are_inclusive() {
        let cases = [
            (FieldName::Age, 17, false),
            (FieldName::Age, 18, true),
            (FieldName::Age, 95, true),
            (FieldName::WorkPressure, 0, false),
            (FieldName::WorkPressure, 1, true),
            (FieldName::WorkPressure, 5, true),
            (FieldName::WorkPressure, 6, false),
            (FieldName::JobSatisfaction, 0, false),
            (FieldName::JobSatisfaction, 6, false),
            (FieldName::FinancialStress, -1, false),
            (FieldName::FinancialStress, 5, true),
            (FieldName::WorkHours, -1, false),
            (FieldName::WorkHours, 0, true),
            (FieldName::WorkHours, 12, true),
            (FieldName::WorkHours, 13, false),
        ];

        for (field, value, accepted) in cases {
            let mut input = complete_input();
            input.set_number(field, value);
            let result = input.validate();
            assert_eq!(result.is_ok(), accepted, "{:?} = {}", field, value);
            if let Err(errors) = result {
                assert_eq!(errors.len(), 1);
                assert!(errors.get(field).is_some());
            }
        }
    }

    #[test]
    fn range_messages_name_the_field() {
        let mut input = complete_input();
        input.work_hours = 14;
        input.age = 12;
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.get(FieldName::WorkHours),
            Some("Work/Study Hours must be between 0 and 12")
        );
        assert_eq!(errors.get(FieldName::Age), Some("Age must be at least 18"));
    }

    #[test]
    fn required_choices_must_be_non_empty() {
        let mut input = complete_input();
        input.gender.clear();
        input.city = "   ".into();
        input.profession.clear();

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get(FieldName::Gender), Some("Gender is required"));
        assert_eq!(errors.get(FieldName::City), Some("City is required"));
        assert_eq!(errors.get(FieldName::Profession), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn default_input_is_rejected_for_missing_choices() {
        let errors = AssessmentInput::default().validate().unwrap_err();
        let fields: Vec<FieldName> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                FieldName::Gender,
                FieldName::City,
                FieldName::EmploymentStatus,
                FieldName::SleepDuration,
                FieldName::DietaryHabits,
                FieldName::Degree,
                FieldName::SuicidalThoughts,
                FieldName::FamilyHistory,
            ]
        );
    }

    #[test]
    fn membership_checked_only_when_options_loaded() {
        let input = complete_input();
        let options = FieldOptions {
            city: vec!["Delhi".into(), "Surat".into()],
            ..FieldOptions::default()
        };

        let errors = input.validate_against(&options).unwrap_err();
        assert_eq!(
            errors.get(FieldName::City),
            Some("'Pune' is not one of the offered choices")
        );
        assert_eq!(errors.len(), 1);

        assert_eq!(input.validate_against(&FieldOptions::default()), Ok(()));
    }

    #[test]
    fn errors_serialize_keyed_by_wire_name() {
        let mut errors = ValidationErrors::default();
        errors.insert(FieldName::WorkHours, "too many");
        errors.insert(FieldName::SuicidalThoughts, "required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Have_Suicidal_Thoughts": "required",
                "Work_Hours": "too many"
            })
        );
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }
}
