mod assessment;
mod options;
mod prediction;
mod validation;

pub use assessment::{AssessmentInput, FieldKind, FieldName};
pub use options::FieldOptions;
pub use prediction::{DEPRESSION_LABEL, PredictionLabel, PredictionOutcome, PredictionResponse};
pub use validation::{NumericRange, ValidationErrors};
