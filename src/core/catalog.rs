use serde::Serialize;

/// Widget the survey form renders for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Select,
    Radio,
}

/// One selectable answer: the token the scoring tables understand plus the
/// label the form displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A survey question definition. Static, loaded once, shared by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub category: &'static str,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub options: &'static [QuestionOption],
}

const fn opt(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { value, label }
}

/// Question catalog for the `carbon` preset.
pub static CARBON_CATALOG: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "transportation",
        category: "Transportation",
        prompt: "What is your primary mode of transportation?",
        kind: InputKind::Select,
        options: &[
            opt("car-gasoline", "Gasoline Car"),
            opt("car-diesel", "Diesel Car"),
            opt("car-electric", "Electric Car"),
            opt("public-transport", "Public Transport"),
            opt("bicycle", "Bicycle"),
            opt("walking", "Walking"),
            opt("motorcycle", "Motorcycle"),
        ],
    },
    QuestionDefinition {
        id: "transportationFrequency",
        category: "Transportation",
        prompt: "How often do you use your primary transportation?",
        kind: InputKind::Select,
        options: &[
            opt("daily", "Daily"),
            opt("weekly", "Few times a week"),
            opt("monthly", "Few times a month"),
            opt("rarely", "Rarely"),
            opt("never", "Never"),
        ],
    },
    QuestionDefinition {
        id: "transportationDistance",
        category: "Transportation",
        prompt: "What is your typical travel distance?",
        kind: InputKind::Select,
        options: &[
            opt("short", "Short (< 10km)"),
            opt("medium", "Medium (10-50km)"),
            opt("long", "Long (50-100km)"),
            opt("very-long", "Very Long (> 100km)"),
        ],
    },
    QuestionDefinition {
        id: "electricityUnits",
        category: "Energy",
        prompt: "How much electricity do you use monthly?",
        kind: InputKind::Select,
        options: &[
            opt("very-low", "Very Low (< 200 kWh)"),
            opt("low", "Low (200-400 kWh)"),
            opt("medium", "Medium (400-600 kWh)"),
            opt("high", "High (600-800 kWh)"),
            opt("very-high", "Very High (> 800 kWh)"),
        ],
    },
    QuestionDefinition {
        id: "renewableEnergy",
        category: "Energy",
        prompt: "Do you use renewable energy sources?",
        kind: InputKind::Radio,
        options: &[opt("true", "Yes"), opt("false", "No")],
    },
    QuestionDefinition {
        id: "waterUsage",
        category: "Water",
        prompt: "How would you rate your water usage?",
        kind: InputKind::Select,
        options: &[
            opt("very-low", "Very Low"),
            opt("low", "Low"),
            opt("medium", "Medium"),
            opt("high", "High"),
            opt("very-high", "Very High"),
        ],
    },
    QuestionDefinition {
        id: "dietType",
        category: "Diet",
        prompt: "What best describes your diet?",
        kind: InputKind::Select,
        options: &[
            opt("vegan", "Vegan"),
            opt("vegetarian", "Vegetarian"),
            opt("pescatarian", "Pescatarian"),
            opt("omnivore", "Omnivore"),
            opt("high-meat", "High Meat Consumption"),
        ],
    },
    QuestionDefinition {
        id: "foodWasteLevel",
        category: "Food Waste",
        prompt: "How much food do you typically waste?",
        kind: InputKind::Select,
        options: &[
            opt("none", "None"),
            opt("minimal", "Minimal"),
            opt("some", "Some"),
            opt("moderate", "Moderate"),
            opt("high", "High"),
        ],
    },
    QuestionDefinition {
        id: "clothesPerMonth",
        category: "Shopping",
        prompt: "How many new clothing items do you buy per month?",
        kind: InputKind::Select,
        options: &[
            opt("0", "0"),
            opt("1-2", "1-2"),
            opt("3-5", "3-5"),
            opt("6-10", "6-10"),
            opt("10+", "10+"),
        ],
    },
    QuestionDefinition {
        id: "recyclingHabits",
        category: "Waste",
        prompt: "How often do you recycle?",
        kind: InputKind::Select,
        options: &[
            opt("always", "Always"),
            opt("often", "Often"),
            opt("sometimes", "Sometimes"),
            opt("rarely", "Rarely"),
            opt("never", "Never"),
        ],
    },
    QuestionDefinition {
        id: "streamingHabits",
        category: "Electronics",
        prompt: "How much do you stream videos/music daily?",
        kind: InputKind::Select,
        options: &[
            opt("minimal", "Minimal (< 1 hour)"),
            opt("moderate", "Moderate (1-3 hours)"),
            opt("high", "High (3-6 hours)"),
            opt("very-high", "Very High (> 6 hours)"),
        ],
    },
    QuestionDefinition {
        id: "airTravelFreq",
        category: "Travel",
        prompt: "How often do you travel by air?",
        kind: InputKind::Select,
        options: &[
            opt("never", "Never"),
            opt("rarely", "Rarely (once a year)"),
            opt("occasionally", "Occasionally (2-3 times a year)"),
            opt("frequently", "Frequently (4-6 times a year)"),
            opt("very-frequently", "Very Frequently (> 6 times a year)"),
        ],
    },
    QuestionDefinition {
        id: "applianceUsage",
        category: "Appliances",
        prompt: "How would you rate your home appliance usage?",
        kind: InputKind::Select,
        options: &[
            opt("minimal", "Minimal"),
            opt("moderate", "Moderate"),
            opt("high", "High"),
            opt("very-high", "Very High"),
        ],
    },
    QuestionDefinition {
        id: "homeSize",
        category: "Home",
        prompt: "What size is your home?",
        kind: InputKind::Select,
        options: &[
            opt("studio", "Studio"),
            opt("1-bedroom", "1 Bedroom"),
            opt("2-bedroom", "2 Bedrooms"),
            opt("3-bedroom", "3 Bedrooms"),
            opt("4+", "4+ Bedrooms"),
        ],
    },
    QuestionDefinition {
        id: "heatingType",
        category: "Heating",
        prompt: "What type of heating do you use?",
        kind: InputKind::Select,
        options: &[
            opt("electric", "Electric"),
            opt("gas", "Natural Gas"),
            opt("oil", "Oil"),
            opt("wood", "Wood"),
            opt("solar", "Solar"),
            opt("heat-pump", "Heat Pump"),
        ],
    },
    QuestionDefinition {
        id: "digitalDevices",
        category: "Digital",
        prompt: "How many digital devices do you own?",
        kind: InputKind::Select,
        options: &[
            opt("1-2", "1-2 devices"),
            opt("3-5", "3-5 devices"),
            opt("6-10", "6-10 devices"),
            opt("10+", "10+ devices"),
        ],
    },
    QuestionDefinition {
        id: "petOwnership",
        category: "Pets",
        prompt: "Do you own any pets?",
        kind: InputKind::Select,
        options: &[
            opt("none", "No pets"),
            opt("small", "Small pets (hamsters, fish)"),
            opt("medium", "Medium pets (cats, small dogs)"),
            opt("large", "Large pets (big dogs)"),
            opt("multiple", "Multiple pets"),
        ],
    },
    QuestionDefinition {
        id: "gardenPractices",
        category: "Garden",
        prompt: "What gardening practices do you follow?",
        kind: InputKind::Select,
        options: &[
            opt("none", "No garden"),
            opt("basic", "Basic gardening"),
            opt("organic", "Organic gardening"),
            opt("composting", "Composting"),
            opt("sustainable", "Sustainable practices"),
        ],
    },
];

/// Question catalog for the `environmental` preset. Questions for the scored
/// categories use exactly the tokens their score tables recognize.
pub static ENVIRONMENTAL_CATALOG: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "transportation",
        category: "Transportation",
        prompt: "How do you primarily commute?",
        kind: InputKind::Select,
        options: &[
            opt("car-petrol", "Petrol Car"),
            opt("car-diesel", "Diesel Car"),
            opt("car-hybrid", "Hybrid Car"),
            opt("public-transport", "Public Transport"),
            opt("bike", "Bicycle"),
            opt("foot", "Walking"),
            opt("motorbike", "Motorbike"),
        ],
    },
    QuestionDefinition {
        id: "transportFrequency",
        category: "Transportation",
        prompt: "How often do you commute this way?",
        kind: InputKind::Select,
        options: &[
            opt("daily", "Daily"),
            opt("weekly", "A few times a week"),
            opt("monthly", "A few times a month"),
            opt("rarely", "Rarely"),
            opt("never", "Never"),
        ],
    },
    QuestionDefinition {
        id: "travelDistance",
        category: "Transportation",
        prompt: "How far do you usually travel?",
        kind: InputKind::Select,
        options: &[
            opt("short", "Short (< 10km)"),
            opt("medium", "Medium (10-50km)"),
            opt("long", "Long (50-100km)"),
            opt("very-long", "Very Long (> 100km)"),
        ],
    },
    QuestionDefinition {
        id: "energyConsumption",
        category: "Energy",
        prompt: "How much energy does your household consume?",
        kind: InputKind::Select,
        options: &[
            opt("low", "Low"),
            opt("medium", "Medium"),
            opt("high", "High"),
            opt("very-high", "Very High"),
        ],
    },
    QuestionDefinition {
        id: "usesRenewableEnergy",
        category: "Energy",
        prompt: "Do you use renewable energy sources?",
        kind: InputKind::Radio,
        options: &[opt("true", "Yes"), opt("false", "No")],
    },
    QuestionDefinition {
        id: "waterConsumption",
        category: "Water",
        prompt: "How would you rate your water consumption?",
        kind: InputKind::Select,
        options: &[
            opt("low", "Low"),
            opt("medium", "Medium"),
            opt("high", "High"),
            opt("very-high", "Very High"),
        ],
    },
    QuestionDefinition {
        id: "foodPreferences",
        category: "Food",
        prompt: "What best describes your eating habits?",
        kind: InputKind::Select,
        options: &[
            opt("vegan", "Vegan"),
            opt("vegetarian", "Vegetarian"),
            opt("pescatarian", "Pescatarian"),
            opt("omnivore", "Omnivore"),
            opt("meat-heavy", "Meat Heavy"),
        ],
    },
    QuestionDefinition {
        id: "wasteGeneration",
        category: "Waste",
        prompt: "How much household waste do you generate?",
        kind: InputKind::Select,
        options: &[
            opt("none", "None"),
            opt("minimal", "Minimal"),
            opt("moderate", "Moderate"),
            opt("high", "High"),
        ],
    },
    QuestionDefinition {
        id: "clothingPurchases",
        category: "Shopping",
        prompt: "How many clothing items do you buy per month?",
        kind: InputKind::Select,
        options: &[
            opt("0", "0"),
            opt("1-2", "1-2"),
            opt("3-5", "3-5"),
            opt("6-10", "6-10"),
            opt("10+", "10+"),
        ],
    },
    QuestionDefinition {
        id: "recyclingBehaviour",
        category: "Waste",
        prompt: "How often do you recycle?",
        kind: InputKind::Select,
        options: &[
            opt("always", "Always"),
            opt("often", "Often"),
            opt("sometimes", "Sometimes"),
            opt("rarely", "Rarely"),
            opt("never", "Never"),
        ],
    },
    QuestionDefinition {
        id: "onlineStreamingTime",
        category: "Electronics",
        prompt: "How much time do you spend streaming daily?",
        kind: InputKind::Select,
        options: &[
            opt("minimal", "Minimal (< 1 hour)"),
            opt("moderate", "Moderate (1-3 hours)"),
            opt("high", "High (3-6 hours)"),
            opt("very-high", "Very High (> 6 hours)"),
        ],
    },
    QuestionDefinition {
        id: "airTravelFrequency",
        category: "Travel",
        prompt: "How often do you fly?",
        kind: InputKind::Select,
        options: &[
            opt("never", "Never"),
            opt("rarely", "Rarely (once a year)"),
            opt("occasionally", "Occasionally (2-3 times a year)"),
            opt("frequently", "Frequently (4-6 times a year)"),
            opt("very-frequently", "Very Frequently (> 6 times a year)"),
        ],
    },
    QuestionDefinition {
        id: "applianceUse",
        category: "Appliances",
        prompt: "How heavily do you use home appliances?",
        kind: InputKind::Select,
        options: &[
            opt("minimal", "Minimal"),
            opt("moderate", "Moderate"),
            opt("high", "High"),
            opt("very-high", "Very High"),
        ],
    },
    QuestionDefinition {
        id: "houseSize",
        category: "House",
        prompt: "What size is your house?",
        kind: InputKind::Select,
        options: &[
            opt("studio", "Studio"),
            opt("1-bedroom", "1 Bedroom"),
            opt("2-bedroom", "2 Bedrooms"),
            opt("3-bedroom", "3 Bedrooms"),
            opt("4+", "4+ Bedrooms"),
        ],
    },
    QuestionDefinition {
        id: "heatingSystem",
        category: "Heating",
        prompt: "What heating system does your home use?",
        kind: InputKind::Select,
        options: &[
            opt("electric", "Electric"),
            opt("gas", "Natural Gas"),
            opt("oil", "Oil"),
            opt("wood", "Wood"),
            opt("solar", "Solar"),
            opt("heat-pump", "Heat Pump"),
        ],
    },
    QuestionDefinition {
        id: "gadgetCount",
        category: "Gadgets",
        prompt: "How many electronic gadgets do you own?",
        kind: InputKind::Select,
        options: &[
            opt("1-2", "1-2 devices"),
            opt("3-5", "3-5 devices"),
            opt("6-10", "6-10 devices"),
            opt("10+", "10+ devices"),
        ],
    },
    QuestionDefinition {
        id: "petStatus",
        category: "Pets",
        prompt: "Do you keep any pets?",
        kind: InputKind::Select,
        options: &[
            opt("none", "No pets"),
            opt("small", "Small pets (hamsters, fish)"),
            opt("medium", "Medium pets (cats, small dogs)"),
            opt("large", "Large pets (big dogs)"),
            opt("multiple", "Multiple pets"),
        ],
    },
    QuestionDefinition {
        id: "gardeningHabits",
        category: "Garden",
        prompt: "What gardening practices do you follow?",
        kind: InputKind::Select,
        options: &[
            opt("none", "No garden"),
            opt("basic", "Basic gardening"),
            opt("organic", "Organic gardening"),
            opt("composting", "Composting"),
            opt("sustainable", "Sustainable practices"),
        ],
    },
];
