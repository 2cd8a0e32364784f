use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Label the inference backend returns for a positive classification.
pub const DEPRESSION_LABEL: &str = "DEPRESSION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    Positive,
    Negative,
}

/// Classification label of the most recent successful prediction.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub struct PredictionLabel(String);

impl PredictionLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only an exact `DEPRESSION` label is positive.
    pub fn outcome(&self) -> PredictionOutcome {
        if self.0 == DEPRESSION_LABEL {
            PredictionOutcome::Positive
        } else {
            PredictionOutcome::Negative
        }
    }
}

impl From<PredictionResponse> for PredictionLabel {
    fn from(response: PredictionResponse) -> Self {
        Self(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depression_label_is_positive() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"result": "DEPRESSION"}"#).unwrap();
        let label = PredictionLabel::from(response);
        assert_eq!(label.outcome(), PredictionOutcome::Positive);
        assert_eq!(label.to_string(), "DEPRESSION");
    }

    #[test]
    fn anything_else_is_negative() {
        for raw in ["NO DEPRESSION", "depression", "", "DEPRESSION "] {
            let label = PredictionLabel::from(raw.to_string());
            assert_eq!(label.outcome(), PredictionOutcome::Negative, "{raw:?}");
        }
    }
}
