//! Risk tier presentation.
//!
//! Pure mapping from the service's free-form `risk_level` string to a
//! display tier (color, icon, recommendation copy), plus the BMI category
//! helper shown next to the BMI slider.

use serde::{Deserialize, Serialize};

/// Risk tier derived from the service's `risk_level` string.
///
/// The label is matched case-insensitively; anything outside the three
/// known tiers degrades to [`RiskTier::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Low risk of diabetes
    Low,
    /// Moderate risk, prevention measures suggested
    Moderate,
    /// High risk, professional evaluation advised
    High,
    /// Unrecognized label, neutral presentation
    Unknown,
}

/// Recommendation copy rendered below the probability breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub body: &'static str,
}

impl RiskTier {
    /// Classify a risk label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),      // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),      // Rose (#F43F5E)
            Self::Unknown => (148, 163, 184), // Slate (#94A3B8)
        }
    }

    /// Short glyph shown next to the tier badge.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Low => "⛨",
            Self::Moderate => "↗",
            Self::High => "⚠",
            Self::Unknown => "·",
        }
    }

    /// Recommendation block for this tier, if any.
    ///
    /// Unknown tiers render no recommendation.
    #[must_use]
    pub fn recommendation(&self) -> Option<Recommendation> {
        match self {
            Self::Low => Some(Recommendation {
                title: "Great news!",
                body: "Your diabetes risk is low. Continue maintaining a healthy \
                       lifestyle with regular exercise and balanced diet.",
            }),
            Self::Moderate => Some(Recommendation {
                title: "Consider prevention measures",
                body: "Your risk is moderate. Consider lifestyle changes like \
                       increased physical activity, weight management, and \
                       regular health checkups.",
            }),
            Self::High => Some(Recommendation {
                title: "Consult a healthcare provider",
                body: "Your risk is high. Please consult with a healthcare \
                       professional for proper evaluation and potential \
                       preventive measures.",
            }),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// BMI category per the WHO thresholds used by the form badge.
#[must_use]
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_match_is_case_insensitive() {
        for label in ["LOW", "low", "Low", " low "] {
            assert_eq!(RiskTier::from_label(label), RiskTier::Low);
        }
        assert_eq!(RiskTier::from_label("Moderate"), RiskTier::Moderate);
        assert_eq!(RiskTier::from_label("hIgH"), RiskTier::High);
    }

    #[test]
    fn test_unknown_label_degrades_to_neutral() {
        for label in ["unknown", "", "critical", "lowish"] {
            let tier = RiskTier::from_label(label);
            assert_eq!(tier, RiskTier::Unknown);
            assert!(tier.recommendation().is_none());
            assert_eq!(tier.color(), (148, 163, 184));
        }
    }

    #[test]
    fn test_known_tiers_carry_recommendations() {
        assert_eq!(
            RiskTier::Low.recommendation().expect("low copy").title,
            "Great news!"
        );
        assert_eq!(
            RiskTier::Moderate.recommendation().expect("moderate copy").title,
            "Consider prevention measures"
        );
        assert_eq!(
            RiskTier::High.recommendation().expect("high copy").title,
            "Consult a healthcare provider"
        );
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.4), "Underweight");
        assert_eq!(bmi_category(18.5), "Normal");
        assert_eq!(bmi_category(24.9), "Normal");
        assert_eq!(bmi_category(25.0), "Overweight");
        assert_eq!(bmi_category(29.9), "Overweight");
        assert_eq!(bmi_category(30.0), "Obese");
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(RiskTier::Low.color(), (16, 185, 129));
        assert_eq!(RiskTier::Moderate.color(), (251, 191, 36));
        assert_eq!(RiskTier::High.color(), (244, 63, 94));
    }
}
