//! Static feature specifications and validated feature vectors.
//!
//! Each disease has a fixed, ordered list of named numeric fields with
//! inclusive bounds and a default value. Collection rejects out-of-range
//! values; it never clamps and never passes them through.

use serde::Serialize;

use super::DiseaseId;

/// Whether a field takes whole numbers or decimals. Affects input hints
/// only; values travel as `f64` either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
}

/// One named input field with inclusive bounds and a default.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Units and typical range, shown next to the input.
    pub hint: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn int(name: &'static str, hint: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            hint,
            min,
            max,
            default: 0.0,
            kind: FieldKind::Integer,
        }
    }

    const fn dec(name: &'static str, hint: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            hint,
            min,
            max,
            default: 0.0,
            kind: FieldKind::Decimal,
        }
    }

    /// Whether `value` lies within this field's inclusive bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

const DIABETES_FIELDS: [FieldSpec; 8] = [
    FieldSpec::int("Pregnancies", "count (0-17 typical)", 0.0, 20.0),
    FieldSpec::int("Glucose", "mg/dL (70-140 normal)", 0.0, 200.0),
    FieldSpec::int("BloodPressure", "mmHg (90-120 normal)", 0.0, 150.0),
    FieldSpec::int("SkinThickness", "mm (10-50 normal)", 0.0, 100.0),
    FieldSpec::int("Insulin", "uU/mL (16-166 normal)", 0.0, 1000.0),
    FieldSpec::dec("BMI", "kg/m2 (18.5-24.9 normal)", 0.0, 70.0),
    FieldSpec::dec("DiabetesPedigreeFunction", "score (0.08-2.42 typical)", 0.0, 3.0),
    FieldSpec::int("Age", "years (21-81 typical)", 0.0, 120.0),
];

const HEART_FIELDS: [FieldSpec; 13] = [
    FieldSpec::int("Age", "years (29-77 typical)", 0.0, 120.0),
    FieldSpec::int("Sex", "0=female, 1=male", 0.0, 1.0),
    FieldSpec::int("ChestPainType", "0=typical angina .. 3=asymptomatic", 0.0, 3.0),
    FieldSpec::int("RestingBP", "mmHg (90-120 normal)", 0.0, 200.0),
    FieldSpec::int("Cholesterol", "mg/dL (126-200 normal)", 0.0, 600.0),
    FieldSpec::int("FastingBS", "1 if >120 mg/dL, else 0", 0.0, 1.0),
    FieldSpec::int("RestingECG", "0=normal, 1=ST-T abn., 2=LVH", 0.0, 2.0),
    FieldSpec::int("MaxHeartRate", "bpm (71-202 typical)", 0.0, 300.0),
    FieldSpec::int("ExerciseAngina", "1=yes, 0=no", 0.0, 1.0),
    FieldSpec::dec("OldPeak", "ST depression, mm (0-6.2 typical)", 0.0, 10.0),
    FieldSpec::int("Slope", "0=up, 1=flat, 2=down", 0.0, 2.0),
    FieldSpec::int("NumVessels", "vessels colored (0-3)", 0.0, 3.0),
    FieldSpec::int("Thalassemia", "0=normal, 1=fixed, 2=reversible", 0.0, 2.0),
];

const PARKINSONS_FIELDS: [FieldSpec; 22] = [
    FieldSpec::dec("MDVP:Fo(Hz)", "Hz (88-260 typical)", 0.0, 300.0),
    FieldSpec::dec("MDVP:Fhi(Hz)", "Hz (102-592 typical)", 0.0, 600.0),
    FieldSpec::dec("MDVP:Flo(Hz)", "Hz (65-239 typical)", 0.0, 300.0),
    FieldSpec::dec("MDVP:Jitter(%)", "0.001-0.033 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:Jitter(Abs)", "7e-6 - 2.6e-4 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:RAP", "0.0006-0.021 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:PPQ", "0.0006-0.019 typical", 0.0, 1.0),
    FieldSpec::dec("Jitter:DDP", "0.0018-0.063 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:Shimmer", "0.009-0.119 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:Shimmer(dB)", "dB (0.085-1.302 typical)", 0.0, 1.0),
    FieldSpec::dec("Shimmer:APQ3", "0.004-0.031 typical", 0.0, 1.0),
    FieldSpec::dec("Shimmer:APQ5", "0.005-0.042 typical", 0.0, 1.0),
    FieldSpec::dec("MDVP:APQ", "0.007-0.054 typical", 0.0, 1.0),
    FieldSpec::dec("Shimmer:DDA", "0.013-0.169 typical", 0.0, 1.0),
    FieldSpec::dec("NHR", "0.0006-0.314 typical", 0.0, 1.0),
    FieldSpec::dec("HNR", "8.4-33.0 typical", 0.0, 50.0),
    FieldSpec::dec("RPDE", "0.256-0.685 typical", 0.0, 1.0),
    FieldSpec::dec("DFA", "0.574-0.825 typical", 0.0, 1.0),
    FieldSpec::dec("spread1", "-7.96 - -2.43 typical", -10.0, 0.0),
    FieldSpec::dec("spread2", "0.006-0.450 typical", 0.0, 1.0),
    FieldSpec::dec("D2", "1.42-3.67 typical", 0.0, 5.0),
    FieldSpec::dec("PPE", "0.044-0.527 typical", 0.0, 1.0),
];

static DIABETES_SPEC: FeatureSpec = FeatureSpec {
    disease: DiseaseId::Diabetes,
    fields: &DIABETES_FIELDS,
};
static HEART_SPEC: FeatureSpec = FeatureSpec {
    disease: DiseaseId::Heart,
    fields: &HEART_FIELDS,
};
static PARKINSONS_SPEC: FeatureSpec = FeatureSpec {
    disease: DiseaseId::Parkinsons,
    fields: &PARKINSONS_FIELDS,
};

/// Ordered field list for one disease. Immutable, defined at compile time.
#[derive(Debug)]
pub struct FeatureSpec {
    disease: DiseaseId,
    fields: &'static [FieldSpec],
}

impl FeatureSpec {
    /// The spec for a disease.
    #[must_use]
    pub fn of(disease: DiseaseId) -> &'static FeatureSpec {
        match disease {
            DiseaseId::Diabetes => &DIABETES_SPEC,
            DiseaseId::Heart => &HEART_SPEC,
            DiseaseId::Parkinsons => &PARKINSONS_SPEC,
        }
    }

    #[must_use]
    pub fn disease(&self) -> DiseaseId {
        self.disease
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Number of features the classifier for this disease expects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a validated feature vector from per-field values.
    ///
    /// `values` must be in field order; `None` slots take the field default.
    /// Out-of-range values are rejected, never clamped.
    ///
    /// # Errors
    /// Returns `ValidationError` naming the first offending field.
    pub fn collect(&self, values: &[Option<f64>]) -> Result<FeatureVector, ValidationError> {
        if values.len() != self.fields.len() {
            return Err(ValidationError {
                field: "<form>",
                message: format!(
                    "expected {} values, got {}",
                    self.fields.len(),
                    values.len()
                ),
            });
        }

        let mut out = Vec::with_capacity(self.fields.len());
        for (field, value) in self.fields.iter().zip(values) {
            let v = value.unwrap_or(field.default);
            if !v.is_finite() {
                return Err(ValidationError {
                    field: field.name,
                    message: "value must be a finite number".to_string(),
                });
            }
            if !field.contains(v) {
                return Err(ValidationError {
                    field: field.name,
                    message: format!("value {v} out of range [{}, {}]", field.min, field.max),
                });
            }
            out.push(v);
        }

        Ok(FeatureVector { values: out })
    }
}

/// Ordered numeric values for one submit action.
///
/// `FeatureSpec::collect` is the only path that guarantees bounds and
/// length; `from_raw` exists so the invoker can still be handed a wrongly
/// sized vector and report it instead of crashing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Wrap raw values without validation.
    #[must_use]
    pub fn from_raw(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A field value outside its bounds, or malformed input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts_match_model_contracts() {
        assert_eq!(FeatureSpec::of(DiseaseId::Diabetes).len(), 8);
        assert_eq!(FeatureSpec::of(DiseaseId::Heart).len(), 13);
        assert_eq!(FeatureSpec::of(DiseaseId::Parkinsons).len(), 22);
    }

    #[test]
    fn test_collect_preserves_length_and_order() {
        let spec = FeatureSpec::of(DiseaseId::Diabetes);
        let input = [2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0];
        let values: Vec<Option<f64>> = input.iter().copied().map(Some).collect();

        let vector = spec.collect(&values).expect("in-range values");
        assert_eq!(vector.len(), 8);
        assert_eq!(vector.as_slice(), &input);
    }

    #[test]
    fn test_collect_applies_defaults_for_omitted_fields() {
        let spec = FeatureSpec::of(DiseaseId::Heart);
        let mut values: Vec<Option<f64>> = vec![None; spec.len()];
        values[0] = Some(54.0);

        let vector = spec.collect(&values).expect("defaults are in range");
        assert_eq!(vector.len(), 13);
        assert!((vector.as_slice()[0] - 54.0).abs() < f64::EPSILON);
        assert!(vector.as_slice()[1..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_collect_rejects_out_of_range() {
        let spec = FeatureSpec::of(DiseaseId::Diabetes);
        let mut values: Vec<Option<f64>> = vec![None; spec.len()];
        values[1] = Some(250.0); // Glucose max is 200

        let err = spec.collect(&values).unwrap_err();
        assert_eq!(err.field, "Glucose");
    }

    #[test]
    fn test_collect_rejects_below_min() {
        let spec = FeatureSpec::of(DiseaseId::Parkinsons);
        let mut values: Vec<Option<f64>> = vec![None; spec.len()];
        // spread1 lives in [-10, 0]; its default of 0.0 is valid but 1.0 is not
        values[18] = Some(1.0);

        let err = spec.collect(&values).unwrap_err();
        assert_eq!(err.field, "spread1");
    }

    #[test]
    fn test_collect_rejects_non_finite() {
        let spec = FeatureSpec::of(DiseaseId::Diabetes);
        let mut values: Vec<Option<f64>> = vec![None; spec.len()];
        values[5] = Some(f64::NAN);

        assert!(spec.collect(&values).is_err());
    }

    #[test]
    fn test_collect_rejects_wrong_slot_count() {
        let spec = FeatureSpec::of(DiseaseId::Diabetes);
        assert!(spec.collect(&[Some(1.0); 7]).is_err());
    }
}
