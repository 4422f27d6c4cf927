use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One filled-in survey, one answer per category.
///
/// Every field is optional: an unanswered category simply contributes 0.0 to
/// the score. Field names follow the current survey form; aliases accept the
/// older submission payload shape so historical clients keep working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(default, alias = "transportationType", rename = "transportMode")]
    pub transport_mode: Option<String>,
    #[serde(default, alias = "transportationFrequency", rename = "transportFrequency")]
    pub transport_frequency: Option<String>,
    #[serde(default, alias = "transportationDistance", rename = "travelDistance")]
    pub travel_distance: Option<String>,
    #[serde(default, alias = "electricityUnits", rename = "energyConsumption")]
    pub energy_consumption: Option<String>,
    #[serde(default, alias = "renewableEnergy", rename = "usesRenewableEnergy")]
    pub uses_renewable_energy: Option<bool>,
    #[serde(default, alias = "waterConsumption", rename = "waterUsage")]
    pub water_usage: Option<String>,
    #[serde(default, alias = "foodPreferences", rename = "dietType")]
    pub diet_type: Option<String>,
    #[serde(default, alias = "meatConsumptionFrequency", rename = "meatIntakeFreq")]
    pub meat_intake_freq: Option<String>,
    #[serde(default, rename = "foodWasteLevel")]
    pub food_waste_level: Option<String>,
    #[serde(default, rename = "wasteGeneration")]
    pub waste_generation: Option<String>,
    #[serde(default, alias = "clothingPurchases", rename = "clothesPerMonth")]
    pub clothes_per_month: Option<String>,
    #[serde(default, alias = "recyclingBehaviour", rename = "recyclingHabits")]
    pub recycling_habits: Option<String>,
    #[serde(default, alias = "onlineStreamingTime", rename = "streamingHabits")]
    pub streaming_habits: Option<String>,
    #[serde(default, alias = "airTravelFrequency", rename = "airTravelFreq")]
    pub air_travel_freq: Option<String>,
    #[serde(default, alias = "applianceUse", rename = "applianceUsage")]
    pub appliance_usage: Option<String>,
    #[serde(default, alias = "houseSize", rename = "homeSize")]
    pub home_size: Option<String>,
    #[serde(default, alias = "heatingSystem", rename = "heatingType")]
    pub heating_type: Option<String>,
    #[serde(default, alias = "wasteManagement", rename = "wasteDisposal")]
    pub waste_disposal: Option<String>,
    #[serde(default, alias = "gadgetCount", rename = "digitalDevices")]
    pub digital_devices: Option<String>,
    #[serde(default, alias = "petStatus", rename = "petOwnership")]
    pub pet_ownership: Option<String>,
    #[serde(default, alias = "gardeningHabits", rename = "gardenPractices")]
    pub garden_practices: Option<String>,
}

/// Addressable survey fields, used by the score tables to pull the answer
/// token for a simple (single-lookup) category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyField {
    WaterUsage,
    DietType,
    FoodWasteLevel,
    WasteGeneration,
    ClothesPerMonth,
    RecyclingHabits,
    StreamingHabits,
    AirTravelFreq,
    ApplianceUsage,
    HomeSize,
    HeatingType,
    DigitalDevices,
    PetOwnership,
    GardenPractices,
}

impl SurveyResponse {
    /// Answer token for a field, if the question was answered.
    pub fn answer(&self, field: SurveyField) -> Option<&str> {
        match field {
            SurveyField::WaterUsage => self.water_usage.as_deref(),
            SurveyField::DietType => self.diet_type.as_deref(),
            SurveyField::FoodWasteLevel => self.food_waste_level.as_deref(),
            SurveyField::WasteGeneration => self.waste_generation.as_deref(),
            SurveyField::ClothesPerMonth => self.clothes_per_month.as_deref(),
            SurveyField::RecyclingHabits => self.recycling_habits.as_deref(),
            SurveyField::StreamingHabits => self.streaming_habits.as_deref(),
            SurveyField::AirTravelFreq => self.air_travel_freq.as_deref(),
            SurveyField::ApplianceUsage => self.appliance_usage.as_deref(),
            SurveyField::HomeSize => self.home_size.as_deref(),
            SurveyField::HeatingType => self.heating_type.as_deref(),
            SurveyField::DigitalDevices => self.digital_devices.as_deref(),
            SurveyField::PetOwnership => self.pet_ownership.as_deref(),
            SurveyField::GardenPractices => self.garden_practices.as_deref(),
        }
    }

    /// True when the renewable-energy flag is explicitly set to yes.
    pub fn renewable(&self) -> bool {
        self.uses_renewable_energy.unwrap_or(false)
    }
}

/// Result of scoring one survey.
///
/// Every category declared by the active preset is present in `scores`,
/// defaulting to 0.0 when the category was not answered. `total_score` is
/// always the exact sum of the per-category scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: BTreeMap<String, f64>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "impactCategory")]
    pub impact_category: String,
}

/// Persisted survey submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: uuid::Uuid,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub answers: SurveyResponse,
    pub scores: BTreeMap<String, f64>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "impactCategory")]
    pub impact_category: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
