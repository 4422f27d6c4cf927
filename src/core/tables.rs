use crate::core::catalog::{self, QuestionDefinition};
use crate::models::SurveyField;

/// Immutable token -> score mapping with a default for unrecognized tokens.
///
/// Lookups are total: an answer token that is not in the table degrades to
/// the table's default score instead of erroring. Tables are small (at most
/// seven entries) so a linear scan over static data beats hashing.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl ScoreTable {
    pub const fn new(entries: &'static [(&'static str, f64)], default: f64) -> Self {
        Self { entries, default }
    }

    /// Score for a token, falling back to the table default on a miss.
    #[inline]
    pub fn lookup(&self, token: &str) -> f64 {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, score)| *score)
            .unwrap_or(self.default)
    }

    pub const fn default_score(&self) -> f64 {
        self.default
    }

    /// All recognized tokens, in table order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }
}

/// Transportation is a composite category: base impact of the transport mode
/// scaled by usage frequency and typical trip distance.
#[derive(Debug, Clone, Copy)]
pub struct TransportRule {
    pub category: &'static str,
    pub base: ScoreTable,
    pub frequency: ScoreTable,
    pub distance: ScoreTable,
}

/// Energy score is a plain lookup, scaled down by a fixed factor when the
/// household reports renewable energy sources.
#[derive(Debug, Clone, Copy)]
pub struct EnergyRule {
    pub category: &'static str,
    pub table: ScoreTable,
    pub renewable_factor: f64,
}

/// A category whose score is a single table lookup of one survey answer.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRule {
    pub category: &'static str,
    pub field: SurveyField,
    pub table: ScoreTable,
}

/// Ascending staircase mapping an aggregate score to an impact label.
///
/// Intervals are half-open: a total exactly at a threshold falls into the
/// upper bracket.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub low_below: f64,
    pub mid_below: f64,
    pub labels: [&'static str; 3],
}

impl Thresholds {
    #[inline]
    pub fn classify(&self, total: f64) -> &'static str {
        if total < self.low_below {
            self.labels[0]
        } else if total < self.mid_below {
            self.labels[1]
        } else {
            self.labels[2]
        }
    }
}

/// One complete scoring configuration: category list, score tables,
/// classification thresholds, question catalog and sampler bounds.
///
/// The two presets below are the two calculator generations that shipped
/// with GikiZero. They share the engine; only this data differs.
#[derive(Debug)]
pub struct ScoringPreset {
    pub name: &'static str,
    /// Every category present in a `ScoreResult`, answered or not.
    pub categories: &'static [&'static str],
    pub transport: TransportRule,
    pub energy: EnergyRule,
    pub simple: &'static [SimpleRule],
    pub thresholds: Thresholds,
    pub catalog: &'static [QuestionDefinition],
    /// Inclusive (min, max) draw range for the question sampler.
    pub question_bounds: (usize, usize),
}

/// Look up a preset by its configured name.
pub fn preset_by_name(name: &str) -> Option<&'static ScoringPreset> {
    match name {
        "carbon" => Some(&CARBON),
        "environmental" => Some(&ENVIRONMENTAL),
        _ => None,
    }
}

/// Current-generation calculator: 15 categories, all with score tables.
pub static CARBON: ScoringPreset = ScoringPreset {
    name: "carbon",
    categories: &[
        "transportation",
        "energy",
        "water",
        "diet",
        "foodWaste",
        "shopping",
        "waste",
        "electronics",
        "travel",
        "appliance",
        "home",
        "heating",
        "digital",
        "pets",
        "garden",
    ],
    transport: TransportRule {
        category: "transportation",
        base: ScoreTable::new(
            &[
                ("car-gasoline", 120.0),
                ("car-diesel", 110.0),
                ("car-electric", 40.0),
                ("public-transport", 30.0),
                ("bicycle", 5.0),
                ("walking", 0.0),
                ("motorcycle", 80.0),
            ],
            60.0,
        ),
        frequency: ScoreTable::new(
            &[
                ("daily", 1.0),
                ("weekly", 0.7),
                ("monthly", 0.3),
                ("rarely", 0.1),
                ("never", 0.0),
            ],
            0.5,
        ),
        distance: ScoreTable::new(
            &[
                ("short", 0.5),
                ("medium", 1.0),
                ("long", 1.5),
                ("very-long", 2.0),
            ],
            1.0,
        ),
    },
    energy: EnergyRule {
        category: "energy",
        table: ScoreTable::new(
            &[
                ("very-low", 20.0),
                ("low", 40.0),
                ("medium", 80.0),
                ("high", 120.0),
                ("very-high", 160.0),
            ],
            80.0,
        ),
        // 70% reduction for renewable energy
        renewable_factor: 0.3,
    },
    simple: &[
        SimpleRule {
            category: "water",
            field: SurveyField::WaterUsage,
            table: ScoreTable::new(
                &[
                    ("very-low", 10.0),
                    ("low", 20.0),
                    ("medium", 40.0),
                    ("high", 60.0),
                    ("very-high", 80.0),
                ],
                40.0,
            ),
        },
        SimpleRule {
            category: "diet",
            field: SurveyField::DietType,
            table: ScoreTable::new(
                &[
                    ("vegan", 20.0),
                    ("vegetarian", 35.0),
                    ("pescatarian", 50.0),
                    ("omnivore", 80.0),
                    ("high-meat", 120.0),
                ],
                80.0,
            ),
        },
        SimpleRule {
            category: "foodWaste",
            field: SurveyField::FoodWasteLevel,
            table: ScoreTable::new(
                &[
                    ("none", 0.0),
                    ("minimal", 10.0),
                    ("some", 25.0),
                    ("moderate", 40.0),
                    ("high", 60.0),
                ],
                25.0,
            ),
        },
        SimpleRule {
            category: "shopping",
            field: SurveyField::ClothesPerMonth,
            table: ScoreTable::new(
                &[
                    ("0", 0.0),
                    ("1-2", 15.0),
                    ("3-5", 30.0),
                    ("6-10", 50.0),
                    ("10+", 80.0),
                ],
                30.0,
            ),
        },
        SimpleRule {
            category: "waste",
            field: SurveyField::RecyclingHabits,
            table: ScoreTable::new(
                &[
                    ("always", 0.0),
                    ("often", 10.0),
                    ("sometimes", 25.0),
                    ("rarely", 40.0),
                    ("never", 60.0),
                ],
                25.0,
            ),
        },
        SimpleRule {
            category: "electronics",
            field: SurveyField::StreamingHabits,
            table: ScoreTable::new(
                &[
                    ("minimal", 5.0),
                    ("moderate", 15.0),
                    ("high", 30.0),
                    ("very-high", 50.0),
                ],
                15.0,
            ),
        },
        SimpleRule {
            category: "travel",
            field: SurveyField::AirTravelFreq,
            table: ScoreTable::new(
                &[
                    ("never", 0.0),
                    ("rarely", 50.0),
                    ("occasionally", 150.0),
                    ("frequently", 300.0),
                    ("very-frequently", 500.0),
                ],
                50.0,
            ),
        },
        SimpleRule {
            category: "appliance",
            field: SurveyField::ApplianceUsage,
            table: ScoreTable::new(
                &[
                    ("minimal", 20.0),
                    ("moderate", 40.0),
                    ("high", 60.0),
                    ("very-high", 80.0),
                ],
                40.0,
            ),
        },
        SimpleRule {
            category: "home",
            field: SurveyField::HomeSize,
            table: ScoreTable::new(
                &[
                    ("studio", 20.0),
                    ("1-bedroom", 30.0),
                    ("2-bedroom", 45.0),
                    ("3-bedroom", 60.0),
                    ("4+", 80.0),
                ],
                45.0,
            ),
        },
        SimpleRule {
            category: "heating",
            field: SurveyField::HeatingType,
            table: ScoreTable::new(
                &[
                    ("electric", 80.0),
                    ("gas", 60.0),
                    ("oil", 70.0),
                    ("wood", 40.0),
                    ("solar", 20.0),
                    ("heat-pump", 30.0),
                ],
                60.0,
            ),
        },
        SimpleRule {
            category: "digital",
            field: SurveyField::DigitalDevices,
            table: ScoreTable::new(
                &[("1-2", 10.0), ("3-5", 25.0), ("6-10", 40.0), ("10+", 60.0)],
                25.0,
            ),
        },
        SimpleRule {
            category: "pets",
            field: SurveyField::PetOwnership,
            table: ScoreTable::new(
                &[
                    ("none", 0.0),
                    ("small", 15.0),
                    ("medium", 25.0),
                    ("large", 35.0),
                    ("multiple", 50.0),
                ],
                0.0,
            ),
        },
        SimpleRule {
            category: "garden",
            field: SurveyField::GardenPractices,
            table: ScoreTable::new(
                &[
                    ("none", 0.0),
                    ("basic", 5.0),
                    // Negative scores for net-positive impact
                    ("organic", -10.0),
                    ("composting", -15.0),
                    ("sustainable", -20.0),
                ],
                0.0,
            ),
        },
    ],
    thresholds: Thresholds {
        low_below: 300.0,
        mid_below: 600.0,
        labels: ["Low", "Medium", "High"],
    },
    catalog: catalog::CARBON_CATALOG,
    question_bounds: (10, 12),
};

/// First-generation calculator. Declares 14 categories but carries score
/// tables for five of them; the rest always report 0.0, matching the
/// shipped behavior.
pub static ENVIRONMENTAL: ScoringPreset = ScoringPreset {
    name: "environmental",
    categories: &[
        "transportation",
        "energy",
        "water",
        "food",
        "waste",
        "shopping",
        "electronics",
        "travel",
        "appliances",
        "house",
        "heating",
        "gadgets",
        "pets",
        "garden",
    ],
    transport: TransportRule {
        category: "transportation",
        base: ScoreTable::new(
            &[
                ("car-petrol", 100.0),
                ("car-diesel", 95.0),
                ("car-hybrid", 50.0),
                ("public-transport", 40.0),
                ("bike", 10.0),
                ("foot", 0.0),
                ("motorbike", 70.0),
            ],
            60.0,
        ),
        frequency: ScoreTable::new(
            &[
                ("daily", 1.0),
                ("weekly", 0.6),
                ("monthly", 0.3),
                ("rarely", 0.1),
                ("never", 0.0),
            ],
            0.5,
        ),
        distance: ScoreTable::new(
            &[
                ("short", 0.4),
                ("medium", 0.9),
                ("long", 1.3),
                ("very-long", 1.7),
            ],
            1.0,
        ),
    },
    energy: EnergyRule {
        category: "energy",
        table: ScoreTable::new(
            &[
                ("low", 30.0),
                ("medium", 70.0),
                ("high", 100.0),
                ("very-high", 150.0),
            ],
            70.0,
        ),
        // 60% reduction for renewable energy
        renewable_factor: 0.4,
    },
    simple: &[
        SimpleRule {
            category: "water",
            field: SurveyField::WaterUsage,
            table: ScoreTable::new(
                &[
                    ("low", 10.0),
                    ("medium", 30.0),
                    ("high", 50.0),
                    ("very-high", 70.0),
                ],
                40.0,
            ),
        },
        SimpleRule {
            category: "food",
            field: SurveyField::DietType,
            table: ScoreTable::new(
                &[
                    ("vegan", 15.0),
                    ("vegetarian", 30.0),
                    ("pescatarian", 45.0),
                    ("omnivore", 70.0),
                    ("meat-heavy", 100.0),
                ],
                70.0,
            ),
        },
        SimpleRule {
            category: "waste",
            field: SurveyField::WasteGeneration,
            table: ScoreTable::new(
                &[
                    ("none", 0.0),
                    ("minimal", 10.0),
                    ("moderate", 30.0),
                    ("high", 50.0),
                ],
                20.0,
            ),
        },
    ],
    thresholds: Thresholds {
        low_below: 200.0,
        mid_below: 400.0,
        labels: ["Low", "Moderate", "High"],
    },
    catalog: catalog::ENVIRONMENTAL_CATALOG,
    question_bounds: (8, 12),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_recognized_tokens() {
        assert_eq!(ENVIRONMENTAL.transport.base.lookup("car-petrol"), 100.0);
        assert_eq!(ENVIRONMENTAL.transport.base.lookup("bike"), 10.0);
        assert_eq!(ENVIRONMENTAL.energy.table.lookup("low"), 30.0);
        assert_eq!(CARBON.transport.base.lookup("car-gasoline"), 120.0);
        assert_eq!(CARBON.transport.base.lookup("walking"), 0.0);
        assert_eq!(CARBON.energy.table.lookup("very-high"), 160.0);
    }

    #[test]
    fn test_lookup_unrecognized_token_falls_back_to_default() {
        assert_eq!(ENVIRONMENTAL.transport.base.lookup("rocket"), 60.0);
        assert_eq!(CARBON.transport.base.lookup("rocket"), 60.0);
        assert_eq!(CARBON.transport.frequency.lookup("sometimes"), 0.5);
        assert_eq!(CARBON.transport.distance.lookup("cosmic"), 1.0);
        assert_eq!(ENVIRONMENTAL.energy.table.lookup("unknown"), 70.0);
    }

    #[test]
    fn test_negative_garden_scores() {
        let garden = CARBON
            .simple
            .iter()
            .find(|rule| rule.category == "garden")
            .unwrap();
        assert_eq!(garden.table.lookup("sustainable"), -20.0);
        assert_eq!(garden.table.lookup("composting"), -15.0);
        assert_eq!(garden.table.lookup("basic"), 5.0);
    }

    #[test]
    fn test_classify_thresholds_are_half_open() {
        // A total exactly at a threshold lands in the upper bracket.
        assert_eq!(ENVIRONMENTAL.thresholds.classify(199.9), "Low");
        assert_eq!(ENVIRONMENTAL.thresholds.classify(200.0), "Moderate");
        assert_eq!(ENVIRONMENTAL.thresholds.classify(399.9), "Moderate");
        assert_eq!(ENVIRONMENTAL.thresholds.classify(400.0), "High");

        assert_eq!(CARBON.thresholds.classify(299.9), "Low");
        assert_eq!(CARBON.thresholds.classify(300.0), "Medium");
        assert_eq!(CARBON.thresholds.classify(599.9), "Medium");
        assert_eq!(CARBON.thresholds.classify(600.0), "High");
    }

    #[test]
    fn test_classify_zero_is_low() {
        assert_eq!(CARBON.thresholds.classify(0.0), "Low");
        assert_eq!(ENVIRONMENTAL.thresholds.classify(0.0), "Low");
    }

    #[test]
    fn test_preset_by_name() {
        assert_eq!(preset_by_name("carbon").unwrap().name, "carbon");
        assert_eq!(
            preset_by_name("environmental").unwrap().name,
            "environmental"
        );
        assert!(preset_by_name("legacy").is_none());
    }

    #[test]
    fn test_simple_rules_reference_declared_categories() {
        for preset in [&CARBON, &ENVIRONMENTAL] {
            assert!(preset.categories.contains(&preset.transport.category));
            assert!(preset.categories.contains(&preset.energy.category));
            for rule in preset.simple {
                assert!(
                    preset.categories.contains(&rule.category),
                    "{} rule {} not in declared categories",
                    preset.name,
                    rule.category
                );
            }
        }
    }
}
