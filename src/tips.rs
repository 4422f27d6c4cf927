//! Static sustainability tips keyed by the dominant scoring category.
//!
//! This is a fixed rule table, not a model call: the highest-scoring category
//! of a submission selects a canned recommendation.

use crate::models::ScoreResult;
use serde::Serialize;

/// A canned recommendation shown alongside a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub impact: &'static str,
    pub reasoning: &'static str,
}

/// Rule table: dominant category -> tip. Categories of both presets appear,
/// so the table serves either engine configuration.
static TIP_RULES: &[(&str, Tip)] = &[
    (
        "transportation",
        Tip {
            title: "Switch to Electric or Hybrid Vehicle",
            description: "Consider upgrading to an EV or hybrid for your next car.",
            category: "Transportation",
            impact: "High",
            reasoning: "Transportation is one of the largest emission sources.",
        },
    ),
    (
        "energy",
        Tip {
            title: "Switch to Renewable Energy",
            description: "Install solar panels or choose a renewable energy plan.",
            category: "Energy",
            impact: "High",
            reasoning: "Energy consumption is a major source of emissions.",
        },
    ),
    (
        "travel",
        Tip {
            title: "Fly Less, Travel Slower",
            description: "Replace short-haul flights with rail where practical.",
            category: "Travel",
            impact: "High",
            reasoning: "A single flight can outweigh months of other emissions.",
        },
    ),
    (
        "diet",
        Tip {
            title: "Eat More Plant-Based Meals",
            description: "Try replacing a few meat-based meals each week.",
            category: "Diet",
            impact: "Medium",
            reasoning: "Meat production is carbon intensive compared to plants.",
        },
    ),
    (
        "food",
        Tip {
            title: "Eat More Plant-Based Meals",
            description: "Try replacing a few meat-based meals each week.",
            category: "Food",
            impact: "Medium",
            reasoning: "Meat production is carbon intensive compared to plants.",
        },
    ),
    (
        "water",
        Tip {
            title: "Cut Household Water Use",
            description: "Shorter showers and efficient fixtures add up quickly.",
            category: "Water",
            impact: "Medium",
            reasoning: "Heating and treating water consumes significant energy.",
        },
    ),
    (
        "waste",
        Tip {
            title: "Recycle and Compost More",
            description: "Sort recyclables consistently and compost food scraps.",
            category: "Waste",
            impact: "Medium",
            reasoning: "Landfill waste releases methane as it decomposes.",
        },
    ),
    (
        "heating",
        Tip {
            title: "Upgrade Your Heating",
            description: "A heat pump cuts heating emissions dramatically.",
            category: "Heating",
            impact: "High",
            reasoning: "Home heating is a large share of household energy use.",
        },
    ),
];

/// Tips for a scored submission, selected by its highest-scoring category.
///
/// An all-zero result (nothing answered) yields no tips. A dominant category
/// without a rule also yields none; unanswered categories never dominate.
pub fn tips_for(result: &ScoreResult) -> Vec<Tip> {
    let dominant = result
        .scores
        .iter()
        .filter(|(_, score)| **score > 0.0)
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let Some((category, _)) = dominant else {
        return Vec::new();
    };

    TIP_RULES
        .iter()
        .filter(|(rule_category, _)| rule_category == category)
        .map(|(_, tip)| *tip)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringEngine;
    use crate::models::SurveyResponse;

    #[test]
    fn test_dominant_transportation_selects_transport_tip() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            transport_mode: Some("car-gasoline".to_string()),
            transport_frequency: Some("daily".to_string()),
            travel_distance: Some("very-long".to_string()),
            water_usage: Some("low".to_string()),
            ..Default::default()
        };

        let tips = tips_for(&engine.compute_score(&response));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].category, "Transportation");
    }

    #[test]
    fn test_dominant_travel_selects_flight_tip() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            air_travel_freq: Some("very-frequently".to_string()),
            energy_consumption: Some("low".to_string()),
            ..Default::default()
        };

        let tips = tips_for(&engine.compute_score(&response));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].category, "Travel");
    }

    #[test]
    fn test_empty_submission_yields_no_tips() {
        let engine = ScoringEngine::carbon();
        let tips = tips_for(&engine.compute_score(&SurveyResponse::default()));
        assert!(tips.is_empty());
    }

    #[test]
    fn test_environmental_food_category_has_a_rule() {
        let engine = ScoringEngine::environmental();
        let response = SurveyResponse {
            diet_type: Some("meat-heavy".to_string()),
            ..Default::default()
        };

        let tips = tips_for(&engine.compute_score(&response));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].category, "Food");
    }
}
