use serde::{Deserialize, Serialize};

/// The analyzer's sole output. Field names serialize in the historical
/// camelCase report shape so pre-computed reports pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub player: String,
    pub boss: String,
    /// Combat duration in seconds, derived from the first and last timestamp
    /// seen. Never negative.
    pub duration: f64,
    pub dps: f64,
    pub total_damage: u64,
    /// Crits over hits across damage abilities only. Always in [0, 1].
    pub crit_rate: f64,
    /// One entry per ability with at least one cast, in catalog order.
    pub abilities: Vec<AbilitySummary>,
    pub casting_time: CastingTimeBreakdown,
    /// Always exactly five entries, in rule-table order.
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySummary {
    pub name: String,
    pub casts: u32,
    pub damage: u64,
    pub dps: f64,
    pub crit_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastingTimeBreakdown {
    pub total_time: f64,
    /// Time spent actively casting. Currently equal to `total_time`: the
    /// breakdown does not yet measure gaps between casts.
    pub casting_time: f64,
    pub idle_time: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub status: bool,
    pub description: String,
}

impl AnalysisReport {
    /// The fixed illustrative report returned when real parsing cannot
    /// proceed. Callers of the never-crash wrapper can only detect fallback
    /// by comparing against these literal values.
    pub fn mock() -> Self {
        AnalysisReport {
            player: "Retribution Paladin".to_string(),
            boss: "Onyxia".to_string(),
            duration: 300.0,
            dps: 1250.5,
            total_damage: 375_150,
            crit_rate: 0.25,
            abilities: vec![
                AbilitySummary {
                    name: "Judgment".to_string(),
                    casts: 30,
                    damage: 75_000,
                    dps: 250.0,
                    crit_rate: 0.3,
                },
                AbilitySummary {
                    name: "Crusader Strike".to_string(),
                    casts: 60,
                    damage: 120_000,
                    dps: 400.0,
                    crit_rate: 0.25,
                },
                AbilitySummary {
                    name: "Consecration".to_string(),
                    casts: 15,
                    damage: 45_000,
                    dps: 150.0,
                    crit_rate: 0.2,
                },
                AbilitySummary {
                    name: "Divine Storm".to_string(),
                    casts: 10,
                    damage: 60_000,
                    dps: 200.0,
                    crit_rate: 0.3,
                },
                AbilitySummary {
                    name: "Melee Swing".to_string(),
                    casts: 150,
                    damage: 75_150,
                    dps: 250.5,
                    crit_rate: 0.2,
                },
            ],
            casting_time: CastingTimeBreakdown {
                total_time: 300.0,
                casting_time: 270.0,
                idle_time: 30.0,
                efficiency: 0.9,
            },
            checklist: vec![
                ChecklistItem {
                    name: "Judgment usage".to_string(),
                    status: true,
                    description: "Judgment uptime was kept high".to_string(),
                },
                ChecklistItem {
                    name: "Crusader Strike usage".to_string(),
                    status: true,
                    description: "Crusader Strike was used on cooldown".to_string(),
                },
                ChecklistItem {
                    name: "Consecration usage".to_string(),
                    status: false,
                    description: "Consecration was cast too infrequently; use it more often"
                        .to_string(),
                },
                ChecklistItem {
                    name: "Divine Storm usage".to_string(),
                    status: true,
                    description: "Divine Storm was used well".to_string(),
                },
                ChecklistItem {
                    name: "Overall casting efficiency".to_string(),
                    status: true,
                    description: "Casting efficiency was good with little idle time".to_string(),
                },
            ],
        }
    }
}
