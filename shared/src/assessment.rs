use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, IntoStaticStr};

use crate::validation::NumericRange;

/// Every field of the assessment form, in the order the form presents them.
///
/// The strum/serde names are the JSON keys the inference backend expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum FieldName {
    Gender,
    Age,
    City,
    #[strum(serialize = "Working_Professional_or_Student")]
    #[serde(rename = "Working_Professional_or_Student")]
    EmploymentStatus,
    Profession,
    #[strum(serialize = "Work_Pressure")]
    #[serde(rename = "Work_Pressure")]
    WorkPressure,
    #[strum(serialize = "Sleep_Duration")]
    #[serde(rename = "Sleep_Duration")]
    SleepDuration,
    #[strum(serialize = "Dietary_Habits")]
    #[serde(rename = "Dietary_Habits")]
    DietaryHabits,
    Degree,
    #[strum(serialize = "Have_Suicidal_Thoughts")]
    #[serde(rename = "Have_Suicidal_Thoughts")]
    SuicidalThoughts,
    #[strum(serialize = "Family_History")]
    #[serde(rename = "Family_History")]
    FamilyHistory,
    #[strum(serialize = "Job_Satisfaction")]
    #[serde(rename = "Job_Satisfaction")]
    JobSatisfaction,
    #[strum(serialize = "Work_Hours")]
    #[serde(rename = "Work_Hours")]
    WorkHours,
    #[strum(serialize = "Financial_Stress")]
    #[serde(rename = "Financial_Stress")]
    FinancialStress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A value picked from the options service's list for this field.
    Choice { required: bool },
    Number(NumericRange),
}

impl FieldName {
    /// JSON key used on the wire.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Gender => "Gender",
            FieldName::Age => "Age",
            FieldName::City => "City",
            FieldName::EmploymentStatus => "Working Professional or Student?",
            FieldName::Profession => "Profession",
            FieldName::WorkPressure => "Work Pressure",
            FieldName::SleepDuration => "Sleep Duration",
            FieldName::DietaryHabits => "Dietary Habits",
            FieldName::Degree => "Degree",
            FieldName::SuicidalThoughts => "Have suicidal thoughts?",
            FieldName::FamilyHistory => "Family History of Mental Illness",
            FieldName::JobSatisfaction => "Job Satisfaction",
            FieldName::WorkHours => "Work/Study Hours",
            FieldName::FinancialStress => "Financial Stress",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::Age => FieldKind::Number(NumericRange::at_least(18)),
            FieldName::WorkPressure
            | FieldName::JobSatisfaction
            | FieldName::FinancialStress => FieldKind::Number(NumericRange::between(1, 5)),
            FieldName::WorkHours => FieldKind::Number(NumericRange::between(0, 12)),
            FieldName::Profession => FieldKind::Choice { required: false },
            _ => FieldKind::Choice { required: true },
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self.kind(), FieldKind::Number(_))
    }
}

/// The complete set of answers submitted for a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Working_Professional_or_Student")]
    pub employment_status: String,
    #[serde(rename = "Profession", default)]
    pub profession: String,
    #[serde(rename = "Work_Pressure")]
    pub work_pressure: i32,
    #[serde(rename = "Sleep_Duration")]
    pub sleep_duration: String,
    #[serde(rename = "Dietary_Habits")]
    pub dietary_habits: String,
    #[serde(rename = "Degree")]
    pub degree: String,
    #[serde(rename = "Have_Suicidal_Thoughts")]
    pub suicidal_thoughts: String,
    #[serde(rename = "Family_History")]
    pub family_history: String,
    #[serde(rename = "Job_Satisfaction")]
    pub job_satisfaction: i32,
    #[serde(rename = "Work_Hours")]
    pub work_hours: i32,
    #[serde(rename = "Financial_Stress")]
    pub financial_stress: i32,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            gender: String::new(),
            age: 18,
            city: String::new(),
            employment_status: String::new(),
            profession: String::new(),
            work_pressure: 1,
            sleep_duration: String::new(),
            dietary_habits: String::new(),
            degree: String::new(),
            suicidal_thoughts: String::new(),
            family_history: String::new(),
            job_satisfaction: 1,
            work_hours: 0,
            financial_stress: 1,
        }
    }
}

impl AssessmentInput {
    /// Current value of a choice field, `None` for numeric fields.
    pub fn choice(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Gender => &self.gender,
            FieldName::City => &self.city,
            FieldName::EmploymentStatus => &self.employment_status,
            FieldName::Profession => &self.profession,
            FieldName::SleepDuration => &self.sleep_duration,
            FieldName::DietaryHabits => &self.dietary_habits,
            FieldName::Degree => &self.degree,
            FieldName::SuicidalThoughts => &self.suicidal_thoughts,
            FieldName::FamilyHistory => &self.family_history,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn choice_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::Gender => &mut self.gender,
            FieldName::City => &mut self.city,
            FieldName::EmploymentStatus => &mut self.employment_status,
            FieldName::Profession => &mut self.profession,
            FieldName::SleepDuration => &mut self.sleep_duration,
            FieldName::DietaryHabits => &mut self.dietary_habits,
            FieldName::Degree => &mut self.degree,
            FieldName::SuicidalThoughts => &mut self.suicidal_thoughts,
            FieldName::FamilyHistory => &mut self.family_history,
            _ => return None,
        };
        Some(value)
    }

    /// Current value of a numeric field, `None` for choice fields.
    pub fn number(&self, field: FieldName) -> Option<i32> {
        match field {
            FieldName::Age => Some(self.age),
            FieldName::WorkPressure => Some(self.work_pressure),
            FieldName::JobSatisfaction => Some(self.job_satisfaction),
            FieldName::WorkHours => Some(self.work_hours),
            FieldName::FinancialStress => Some(self.financial_stress),
            _ => None,
        }
    }

    fn number_mut(&mut self, field: FieldName) -> Option<&mut i32> {
        match field {
            FieldName::Age => Some(&mut self.age),
            FieldName::WorkPressure => Some(&mut self.work_pressure),
            FieldName::JobSatisfaction => Some(&mut self.job_satisfaction),
            FieldName::WorkHours => Some(&mut self.work_hours),
            FieldName::FinancialStress => Some(&mut self.financial_stress),
            _ => None,
        }
    }

    /// Returns false when `field` is not a choice field.
    pub fn set_choice(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        match self.choice_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns false when `field` is not a numeric field.
    pub fn set_number(&mut self, field: FieldName, value: i32) -> bool {
        match self.number_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn display_value(&self, field: FieldName) -> String {
        match (self.choice(field), self.number(field)) {
            (Some(choice), _) => choice.to_string(),
            (None, Some(number)) => number.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fields_iterate_in_form_order() {
        let keys: Vec<&str> = FieldName::iter().map(FieldName::key).collect();
        assert_eq!(
            keys,
            vec![
                "Gender",
                "Age",
                "City",
                "Working_Professional_or_Student",
                "Profession",
                "Work_Pressure",
                "Sleep_Duration",
                "Dietary_Habits",
                "Degree",
                "Have_Suicidal_Thoughts",
                "Family_History",
                "Job_Satisfaction",
                "Work_Hours",
                "Financial_Stress",
            ]
        );
    }

    #[test]
    fn serializes_with_backend_keys() {
        let input = AssessmentInput {
            gender: "Female".into(),
            city: "Pune".into(),
            ..AssessmentInput::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 14);
        for field in FieldName::iter() {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(json["Gender"], "Female");
        assert_eq!(json["Age"], 18);
        assert_eq!(json["Work_Hours"], 0);
    }

    #[test]
    fn profession_may_be_omitted() {
        let json = serde_json::json!({
            "Gender": "Male",
            "Age": 30,
            "City": "Delhi",
            "Working_Professional_or_Student": "Student",
            "Work_Pressure": 3,
            "Sleep_Duration": "5-6 hours",
            "Dietary_Habits": "Healthy",
            "Degree": "BSc",
            "Have_Suicidal_Thoughts": "No",
            "Family_History": "No",
            "Job_Satisfaction": 2,
            "Work_Hours": 8,
            "Financial_Stress": 4
        });
        let input: AssessmentInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.profession, "");
        assert_eq!(input.age, 30);
    }

    #[test]
    fn setters_reject_wrong_kind() {
        let mut input = AssessmentInput::default();
        assert!(!input.set_number(FieldName::City, 4));
        assert!(!input.set_choice(FieldName::Age, "40"));
        assert!(input.set_number(FieldName::WorkHours, 9));
        assert!(input.set_choice(FieldName::Degree, "MSc"));
        assert_eq!(input.display_value(FieldName::WorkHours), "9");
        assert_eq!(input.display_value(FieldName::Degree), "MSc");
    }

    #[test]
    fn every_field_is_either_choice_or_number() {
        let input = AssessmentInput::default();
        for field in FieldName::iter() {
            assert_ne!(input.choice(field).is_some(), input.number(field).is_some());
            assert_eq!(field.is_numeric(), input.number(field).is_some());
        }
    }
}
