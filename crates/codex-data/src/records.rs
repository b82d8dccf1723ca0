//! Entity records, one struct per collection.
//!
//! Fields mirror the source document one-to-one; free-text fields that name
//! other entities are run through the cross-linker at render time rather
//! than carrying hand-authored links.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Civilization {
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub leaders: Vec<String>,
    pub victory_types: Vec<String>,
    pub unique_units: Vec<String>,
    pub wonders: Vec<String>,
    pub historical_relations: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leader {
    pub description: String,
    pub civilization: String,
    pub abilities: Vec<String>,
    pub tendency: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub description: String,
    /// Broad role, e.g. "Melee" or "Ranged".
    #[serde(rename = "type")]
    pub category: String,
    pub strength: String,
    pub civilizations: Vec<String>,
    pub historical_context: String,
    pub strategies: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub description: String,
    pub uses: String,
    pub found_in: String,
    pub historical_context: String,
    pub trivia: String,
    pub civilizations: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wonder {
    pub description: String,
    pub civilization: String,
    pub benefits: String,
    pub historical_context: String,
    pub trivia: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VictoryPath {
    pub description: String,
    pub best_civilizations: Vec<String>,
}
