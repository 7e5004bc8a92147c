//! BMI Calculator

use crate::error::{AppError, AppResult};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid height and weight values.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting with a healthcare provider about maintaining a healthy weight."
            }
            BmiCategory::Normal => {
                "Great! You're in a healthy weight range. Keep maintaining a balanced diet and regular exercise."
            }
            BmiCategory::Overweight => {
                "Consider increasing physical activity and consulting with a healthcare provider for guidance."
            }
            BmiCategory::Obese => {
                "Please consult with a healthcare provider for guidance on achieving a healthy weight."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// Rounded to one decimal place
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn display(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// Category is decided on the unrounded value; only the reported number is rounded.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(height_cm) || !valid(weight_kg) {
        return Err(AppError::Validation(INVALID_INPUT_MESSAGE.to_string()));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiResult {
        bmi: (bmi * 10.0).round() / 10.0,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Parse a form field; blank or non-numeric input is `None`
pub fn parse_measurement(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// Calculate from raw form text
pub fn evaluate(height: &str, weight: &str) -> AppResult<BmiResult> {
    match (parse_measurement(height), parse_measurement(weight)) {
        (Some(height_cm), Some(weight_kg)) => calculate_bmi(height_cm, weight_kg),
        _ => Err(AppError::Validation(INVALID_INPUT_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_adult() {
        let result = calculate_bmi(180.0, 75.0).unwrap();
        assert!((result.bmi - 23.1).abs() < 1e-9);
        assert_eq!(result.display(), "23.1");
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.label(), "Normal");
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(calculate_bmi(100.0, 18.4).unwrap().category, BmiCategory::Underweight);
        assert_eq!(calculate_bmi(100.0, 18.5).unwrap().category, BmiCategory::Normal);
        assert_eq!(calculate_bmi(100.0, 25.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(calculate_bmi(100.0, 30.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_category_uses_unrounded_value() {
        // 99.84 / 2.0^2 = 24.96, which reports as 25.0 but is still Normal
        let result = calculate_bmi(200.0, 99.84).unwrap();
        assert_eq!(result.display(), "25.0");
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_invalid_inputs() {
        for (height, weight) in [(0.0, 70.0), (170.0, 0.0), (-170.0, 70.0), (f64::NAN, 70.0), (170.0, f64::INFINITY)] {
            let err = calculate_bmi(height, weight).unwrap_err();
            assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        }
    }

    #[test]
    fn test_evaluate_form_text() {
        assert_eq!(evaluate(" 180 ", "75").unwrap().display(), "23.1");
        assert!(evaluate("", "75").is_err());
        assert!(evaluate("180", "seventy").is_err());
    }
}
