use crate::core::tables::{preset_by_name, ScoringPreset, CARBON, ENVIRONMENTAL};
use crate::models::{ScoreResult, SurveyResponse};
use std::collections::BTreeMap;

/// Carbon impact scoring engine.
///
/// Pure and total over any well-formed survey: every category declared by the
/// preset starts at 0.0, answered categories are scored from the preset's
/// tables, and the aggregate is the exact sum of all category scores.
///
/// Per-category rules:
/// - transportation: `base(mode) * frequency(freq) * distance(dist)`,
///   computed only when all three answers are present
/// - energy: `table(level)`, scaled by the renewable factor when the
///   renewable-energy flag is set
/// - everything else: a single table lookup of the answer token
///
/// An unanswered category stays at 0.0; an unrecognized answer token scores
/// the table's default. The two are deliberately distinct policies.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    preset: &'static ScoringPreset,
}

impl ScoringEngine {
    pub fn new(preset: &'static ScoringPreset) -> Self {
        Self { preset }
    }

    /// Engine for the current-generation calculator.
    pub fn carbon() -> Self {
        Self::new(&CARBON)
    }

    /// Engine for the first-generation calculator.
    pub fn environmental() -> Self {
        Self::new(&ENVIRONMENTAL)
    }

    /// Engine for a preset selected by its configured name.
    pub fn by_name(name: &str) -> Option<Self> {
        preset_by_name(name).map(Self::new)
    }

    pub fn preset(&self) -> &'static ScoringPreset {
        self.preset
    }

    /// Score one survey response.
    pub fn compute_score(&self, response: &SurveyResponse) -> ScoreResult {
        let mut scores: BTreeMap<String, f64> = self
            .preset
            .categories
            .iter()
            .map(|category| (category.to_string(), 0.0))
            .collect();

        let transport = &self.preset.transport;
        if let (Some(mode), Some(freq), Some(dist)) = (
            response.transport_mode.as_deref(),
            response.transport_frequency.as_deref(),
            response.travel_distance.as_deref(),
        ) {
            let score = transport.base.lookup(mode)
                * transport.frequency.lookup(freq)
                * transport.distance.lookup(dist);
            scores.insert(transport.category.to_string(), score);
        }

        let energy = &self.preset.energy;
        if let Some(level) = response.energy_consumption.as_deref() {
            let mut score = energy.table.lookup(level);
            if response.renewable() {
                score *= energy.renewable_factor;
            }
            scores.insert(energy.category.to_string(), score);
        }

        for rule in self.preset.simple {
            if let Some(token) = response.answer(rule.field) {
                scores.insert(rule.category.to_string(), rule.table.lookup(token));
            }
        }

        let total_score: f64 = scores.values().sum();
        let impact_category = self.preset.thresholds.classify(total_score);

        ScoreResult {
            scores,
            total_score,
            impact_category: impact_category.to_string(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::carbon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(field: &str, token: &str) -> SurveyResponse {
        let mut response = SurveyResponse::default();
        match field {
            "water" => response.water_usage = Some(token.to_string()),
            "diet" => response.diet_type = Some(token.to_string()),
            "energy" => response.energy_consumption = Some(token.to_string()),
            _ => panic!("unknown field {field}"),
        }
        response
    }

    #[test]
    fn test_empty_survey_scores_zero_and_low() {
        for engine in [ScoringEngine::carbon(), ScoringEngine::environmental()] {
            let result = engine.compute_score(&SurveyResponse::default());
            assert_eq!(result.total_score, 0.0);
            assert_eq!(result.impact_category, "Low");
            assert_eq!(result.scores.len(), engine.preset().categories.len());
            assert!(result.scores.values().all(|&score| score == 0.0));
        }
    }

    #[test]
    fn test_aggregate_is_sum_of_category_scores() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            transport_mode: Some("car-gasoline".to_string()),
            transport_frequency: Some("weekly".to_string()),
            travel_distance: Some("long".to_string()),
            energy_consumption: Some("high".to_string()),
            diet_type: Some("omnivore".to_string()),
            air_travel_freq: Some("occasionally".to_string()),
            garden_practices: Some("sustainable".to_string()),
            ..Default::default()
        };

        let result = engine.compute_score(&response);
        let sum: f64 = result.scores.values().sum();
        assert_eq!(result.total_score, sum);
    }

    #[test]
    fn test_transportation_requires_all_three_answers() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            transport_mode: Some("car-gasoline".to_string()),
            transport_frequency: Some("daily".to_string()),
            // distance unanswered
            ..Default::default()
        };

        let result = engine.compute_score(&response);
        assert_eq!(result.scores["transportation"], 0.0);
    }

    #[test]
    fn test_transportation_composite_score() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            transport_mode: Some("car-gasoline".to_string()),
            transport_frequency: Some("daily".to_string()),
            travel_distance: Some("medium".to_string()),
            ..Default::default()
        };

        let result = engine.compute_score(&response);
        assert_eq!(result.scores["transportation"], 120.0);
    }

    #[test]
    fn test_unrecognized_transport_mode_uses_default_base() {
        let engine = ScoringEngine::environmental();
        let response = SurveyResponse {
            transport_mode: Some("teleporter".to_string()),
            transport_frequency: Some("daily".to_string()),
            travel_distance: Some("medium".to_string()),
            ..Default::default()
        };

        // default base 60 * daily 1.0 * medium 0.9
        let result = engine.compute_score(&response);
        assert!((result.scores["transportation"] - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_renewable_flag_scales_energy() {
        for engine in [ScoringEngine::carbon(), ScoringEngine::environmental()] {
            let factor = engine.preset().energy.renewable_factor;
            for token in ["low", "medium", "high", "unrecognized"] {
                let mut response = answered("energy", token);
                let plain = engine.compute_score(&response).scores["energy"];

                response.uses_renewable_energy = Some(true);
                let reduced = engine.compute_score(&response).scores["energy"];

                assert_eq!(reduced, plain * factor, "token {token}");
            }
        }
    }

    #[test]
    fn test_renewable_flag_alone_scores_nothing() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            uses_renewable_energy: Some(true),
            ..Default::default()
        };

        // No consumption answer: the energy category was not answered.
        let result = engine.compute_score(&response);
        assert_eq!(result.scores["energy"], 0.0);
    }

    #[test]
    fn test_unanswered_differs_from_unrecognized() {
        let engine = ScoringEngine::carbon();

        let unanswered = engine.compute_score(&SurveyResponse::default());
        assert_eq!(unanswered.scores["water"], 0.0);

        let unrecognized = engine.compute_score(&answered("water", "oceanic"));
        assert_eq!(unrecognized.scores["water"], 40.0);
    }

    #[test]
    fn test_environmental_ruleless_categories_stay_zero() {
        let engine = ScoringEngine::environmental();
        let response = SurveyResponse {
            heating_type: Some("electric".to_string()),
            pet_ownership: Some("multiple".to_string()),
            home_size: Some("4+".to_string()),
            ..Default::default()
        };

        let result = engine.compute_score(&response);
        assert_eq!(result.scores["heating"], 0.0);
        assert_eq!(result.scores["pets"], 0.0);
        assert_eq!(result.scores["house"], 0.0);
        assert_eq!(result.total_score, 0.0);
    }

    #[test]
    fn test_low_impact_lifestyle_scenario() {
        // bike daily/short + low energy with renewables, everything else unset:
        // transportation = 10 * 1.0 * 0.4 = 4.0, energy = 30 * 0.4 = 12.0
        let engine = ScoringEngine::environmental();
        let response = SurveyResponse {
            transport_mode: Some("bike".to_string()),
            transport_frequency: Some("daily".to_string()),
            travel_distance: Some("short".to_string()),
            energy_consumption: Some("low".to_string()),
            uses_renewable_energy: Some(true),
            ..Default::default()
        };

        let result = engine.compute_score(&response);
        assert!((result.scores["transportation"] - 4.0).abs() < 1e-9);
        assert!((result.scores["energy"] - 12.0).abs() < 1e-9);
        assert!((result.total_score - 16.0).abs() < 1e-9);
        assert_eq!(result.impact_category, "Low");
    }

    #[test]
    fn test_high_impact_lifestyle_scenario() {
        let engine = ScoringEngine::carbon();
        let response = SurveyResponse {
            transport_mode: Some("car-gasoline".to_string()),
            transport_frequency: Some("daily".to_string()),
            travel_distance: Some("very-long".to_string()),
            energy_consumption: Some("very-high".to_string()),
            diet_type: Some("high-meat".to_string()),
            air_travel_freq: Some("very-frequently".to_string()),
            ..Default::default()
        };

        // 240 + 160 + 120 + 500 = 1020
        let result = engine.compute_score(&response);
        assert!((result.total_score - 1020.0).abs() < 1e-9);
        assert_eq!(result.impact_category, "High");
    }

    #[test]
    fn test_engine_by_name() {
        assert!(ScoringEngine::by_name("carbon").is_some());
        assert!(ScoringEngine::by_name("environmental").is_some());
        assert!(ScoringEngine::by_name("quantum").is_none());
    }
}
