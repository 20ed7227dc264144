//! Disease identifiers and verdict wording.

use serde::{Deserialize, Serialize};

/// The three diseases with a pre-trained classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiseaseId {
    Diabetes,
    Heart,
    Parkinsons,
}

impl DiseaseId {
    /// All diseases, in menu order.
    pub const ALL: [DiseaseId; 3] = [Self::Diabetes, Self::Heart, Self::Parkinsons];

    /// Page title shown in the TUI.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Prediction",
            Self::Heart => "Heart Disease Prediction",
            Self::Parkinsons => "Parkinsons Prediction",
        }
    }

    /// File name of the model artifact for this disease.
    #[must_use]
    pub fn artifact_name(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes.json",
            Self::Heart => "heart.json",
            Self::Parkinsons => "parkinsons.json",
        }
    }

    /// Message shown when the classifier returns label 1.
    #[must_use]
    pub fn positive_message(&self) -> &'static str {
        match self {
            Self::Diabetes => "The person is diabetic",
            Self::Heart => "The person is having heart disease",
            Self::Parkinsons => "The person has Parkinson's disease",
        }
    }

    /// Message shown for any other label (the only other observed value is 0).
    #[must_use]
    pub fn negative_message(&self) -> &'static str {
        match self {
            Self::Diabetes => "The person is not diabetic",
            Self::Heart => "The person does not have any heart disease",
            Self::Parkinsons => "The person does not have Parkinson's disease",
        }
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diabetes => write!(f, "diabetes"),
            Self::Heart => write!(f, "heart"),
            Self::Parkinsons => write!(f, "parkinsons"),
        }
    }
}
