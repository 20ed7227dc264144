//! Screening verdicts.
//!
//! A verdict pairs the raw 0/1 classifier label with the fixed
//! disease-specific display message. Created per submit action, shown once,
//! never persisted.

use serde::Serialize;

use super::DiseaseId;

/// Outcome of one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Unique identifier
    pub id: String,

    /// Disease the classifier was asked about
    pub disease: DiseaseId,

    /// Raw classifier output (1 = positive finding)
    pub label: u8,

    /// Fixed display message for this disease and label
    pub message: &'static str,

    /// Timestamp of the prediction
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Verdict {
    /// Map a raw classifier label to a verdict. Label 1 is the positive
    /// finding; any other value is negative.
    #[must_use]
    pub fn new(disease: DiseaseId, label: u8) -> Self {
        let message = if label == 1 {
            disease.positive_message()
        } else {
            disease.negative_message()
        };

        Self {
            id: uuid_v4(),
            disease,
            label,
            message,
            created_at: chrono::Utc::now(),
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.label == 1
    }
}

/// Generate a simple UUID v4 (random) using a CSPRNG.
///
/// ChaCha20Rng seeded from OS entropy, so ids are unpredictable on all
/// platforms.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_one_is_positive() {
        let v = Verdict::new(DiseaseId::Diabetes, 1);
        assert!(v.is_positive());
        assert_eq!(v.message, "The person is diabetic");
    }

    #[test]
    fn test_label_zero_is_negative() {
        let v = Verdict::new(DiseaseId::Heart, 0);
        assert!(!v.is_positive());
        assert_eq!(v.message, "The person does not have any heart disease");
    }

    #[test]
    fn test_any_non_one_label_is_negative() {
        let v = Verdict::new(DiseaseId::Parkinsons, 2);
        assert!(!v.is_positive());
        assert_eq!(v.message, DiseaseId::Parkinsons.negative_message());
    }

    #[test]
    fn test_uuid_generation() {
        let id1 = uuid_v4();
        let id2 = uuid_v4();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format with dashes
    }
}
