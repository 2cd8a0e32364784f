use serde::{Deserialize, Serialize};

use crate::assessment::FieldName;

/// Valid values for each choice field, as returned by the options service.
///
/// Keys missing from the response decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    #[serde(rename = "Gender")]
    pub gender: Vec<String>,
    #[serde(rename = "City")]
    pub city: Vec<String>,
    #[serde(rename = "Working_Professional_or_Student")]
    pub employment_status: Vec<String>,
    #[serde(rename = "Profession")]
    pub profession: Vec<String>,
    #[serde(rename = "Sleep_Duration")]
    pub sleep_duration: Vec<String>,
    #[serde(rename = "Dietary_Habits")]
    pub dietary_habits: Vec<String>,
    #[serde(rename = "Degree")]
    pub degree: Vec<String>,
    #[serde(rename = "Have_Suicidal_Thoughts")]
    pub suicidal_thoughts: Vec<String>,
    #[serde(rename = "Family_History")]
    pub family_history: Vec<String>,
}

impl FieldOptions {
    /// Choices for `field` in the order the service returned them. Numeric
    /// fields have none.
    pub fn choices(&self, field: FieldName) -> &[String] {
        match field {
            FieldName::Gender => &self.gender,
            FieldName::City => &self.city,
            FieldName::EmploymentStatus => &self.employment_status,
            FieldName::Profession => &self.profession,
            FieldName::SleepDuration => &self.sleep_duration,
            FieldName::DietaryHabits => &self.dietary_habits,
            FieldName::Degree => &self.degree,
            FieldName::SuicidalThoughts => &self.suicidal_thoughts,
            FieldName::FamilyHistory => &self.family_history,
            _ => &[],
        }
    }

    pub fn offers(&self, field: FieldName, value: &str) -> bool {
        self.choices(field).iter().any(|choice| choice == value)
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.gender,
            &self.city,
            &self.employment_status,
            &self.profession,
            &self.sleep_duration,
            &self.dietary_habits,
            &self.degree,
            &self.suicidal_thoughts,
            &self.family_history,
        ]
        .iter()
        .all(|list| list.is_empty())
    }
}
