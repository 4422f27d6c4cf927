// Integration tests for Giki Score

use giki_score::core::{get_question_subset, ScoringEngine, CARBON, ENVIRONMENTAL};
use giki_score::models::{ScoreResult, SurveyResponse};
use giki_score::tips::tips_for;

fn full_carbon_survey() -> SurveyResponse {
    SurveyResponse {
        transport_mode: Some("car-gasoline".to_string()),
        transport_frequency: Some("daily".to_string()),
        travel_distance: Some("medium".to_string()),
        energy_consumption: Some("medium".to_string()),
        uses_renewable_energy: Some(false),
        water_usage: Some("medium".to_string()),
        diet_type: Some("omnivore".to_string()),
        food_waste_level: Some("some".to_string()),
        clothes_per_month: Some("3-5".to_string()),
        recycling_habits: Some("sometimes".to_string()),
        streaming_habits: Some("moderate".to_string()),
        air_travel_freq: Some("rarely".to_string()),
        appliance_usage: Some("moderate".to_string()),
        home_size: Some("2-bedroom".to_string()),
        heating_type: Some("gas".to_string()),
        digital_devices: Some("3-5".to_string()),
        pet_ownership: Some("none".to_string()),
        garden_practices: Some("none".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_full_carbon_survey_end_to_end() {
    let engine = ScoringEngine::carbon();
    let result = engine.compute_score(&full_carbon_survey());

    // transportation 120 + energy 80 + water 40 + diet 80 + foodWaste 25
    // + shopping 30 + waste 25 + electronics 15 + travel 50 + appliance 40
    // + home 45 + heating 60 + digital 25 + pets 0 + garden 0
    assert!((result.total_score - 635.0).abs() < 1e-9);
    assert_eq!(result.impact_category, "High");
    assert_eq!(result.scores.len(), CARBON.categories.len());
}

#[test]
fn test_minimal_lifestyle_scores_low() {
    let engine = ScoringEngine::carbon();
    let survey = SurveyResponse {
        transport_mode: Some("walking".to_string()),
        transport_frequency: Some("daily".to_string()),
        travel_distance: Some("short".to_string()),
        energy_consumption: Some("very-low".to_string()),
        uses_renewable_energy: Some(true),
        water_usage: Some("very-low".to_string()),
        diet_type: Some("vegan".to_string()),
        food_waste_level: Some("none".to_string()),
        recycling_habits: Some("always".to_string()),
        garden_practices: Some("sustainable".to_string()),
        ..Default::default()
    };

    // 0 + 6 + 10 + 20 + 0 + 0 - 20 = 16
    let result = engine.compute_score(&survey);
    assert!((result.total_score - 16.0).abs() < 1e-9);
    assert_eq!(result.impact_category, "Low");
}

#[test]
fn test_partial_survey_only_scores_answered_categories() {
    let engine = ScoringEngine::environmental();
    let survey = SurveyResponse {
        diet_type: Some("pescatarian".to_string()),
        waste_generation: Some("minimal".to_string()),
        ..Default::default()
    };

    let result = engine.compute_score(&survey);
    assert_eq!(result.scores["food"], 45.0);
    assert_eq!(result.scores["waste"], 10.0);
    assert_eq!(result.scores["transportation"], 0.0);
    assert_eq!(result.scores["energy"], 0.0);
    assert!((result.total_score - 55.0).abs() < 1e-9);
    assert_eq!(result.impact_category, "Low");
}

#[test]
fn test_tips_target_the_worst_category() {
    let engine = ScoringEngine::carbon();
    let survey = SurveyResponse {
        air_travel_freq: Some("very-frequently".to_string()),
        water_usage: Some("low".to_string()),
        ..Default::default()
    };

    let result = engine.compute_score(&survey);
    let tips = tips_for(&result);

    assert!(!tips.is_empty());
    assert!(tips.iter().all(|tip| tip.category == "Travel"));
}

#[test]
fn test_survey_deserializes_current_field_names() {
    let json = r#"{
        "transportMode": "bicycle",
        "transportFrequency": "daily",
        "travelDistance": "short",
        "energyConsumption": "low",
        "usesRenewableEnergy": true,
        "dietType": "vegan"
    }"#;

    let survey: SurveyResponse = serde_json::from_str(json).unwrap();
    assert_eq!(survey.transport_mode.as_deref(), Some("bicycle"));
    assert_eq!(survey.diet_type.as_deref(), Some("vegan"));
    assert_eq!(survey.uses_renewable_energy, Some(true));
}

#[test]
fn test_survey_deserializes_legacy_field_names() {
    // First-generation clients submit under the original field names.
    let json = r#"{
        "transportationType": "car-petrol",
        "transportationFrequency": "weekly",
        "transportationDistance": "medium",
        "electricityUnits": "high",
        "renewableEnergy": false,
        "foodPreferences": "omnivore",
        "waterConsumption": "medium"
    }"#;

    let survey: SurveyResponse = serde_json::from_str(json).unwrap();
    assert_eq!(survey.transport_mode.as_deref(), Some("car-petrol"));
    assert_eq!(survey.energy_consumption.as_deref(), Some("high"));
    assert_eq!(survey.diet_type.as_deref(), Some("omnivore"));
    assert_eq!(survey.water_usage.as_deref(), Some("medium"));

    let result = ScoringEngine::environmental().compute_score(&survey);
    // 100 * 0.6 * 0.9 + 100 + 70 + 30 = 254
    assert!((result.total_score - 254.0).abs() < 1e-9);
    assert_eq!(result.impact_category, "Moderate");
}

#[test]
fn test_score_result_serializes_camel_case() {
    let result = ScoringEngine::carbon().compute_score(&SurveyResponse::default());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("totalScore").is_some());
    assert!(json.get("impactCategory").is_some());
    assert_eq!(
        json["scores"].as_object().unwrap().len(),
        CARBON.categories.len()
    );
}

#[test]
fn test_score_result_round_trips_through_json() {
    let original = ScoringEngine::carbon().compute_score(&full_carbon_survey());
    let json = serde_json::to_string(&original).unwrap();
    let restored: ScoreResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.total_score, original.total_score);
    assert_eq!(restored.impact_category, original.impact_category);
    assert_eq!(restored.scores, original.scores);
}

#[test]
fn test_question_subset_for_each_preset() {
    for preset in [&CARBON, &ENVIRONMENTAL] {
        let (min, max) = preset.question_bounds;
        let subset = get_question_subset(preset.catalog, min, max).unwrap();

        assert!((min..=max).contains(&subset.len()), "{}", preset.name);
        for question in &subset {
            assert!(preset.catalog.iter().any(|q| q.id == question.id));
        }
    }
}
