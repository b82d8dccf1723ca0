//! The full reference catalogue and name-keyed lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::records::{Civilization, Leader, Resource, Unit, VictoryPath, Wonder};

/// Every collection of the source document, keyed by entity name.
///
/// Loaded wholesale per render; never mutated. `resources` is the one
/// collection the original document has shipped without, so it alone
/// defaults to empty instead of failing the parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub civilizations: BTreeMap<String, Civilization>,
    pub leaders: BTreeMap<String, Leader>,
    pub units: BTreeMap<String, Unit>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
    pub wonders: BTreeMap<String, Wonder>,
    pub victory_types: BTreeMap<String, VictoryPath>,
}

impl Catalog {
    /// Entity names in one collection, in key order.
    pub fn names(&self, collection: Collection) -> impl Iterator<Item = &str> {
        let keys: Box<dyn Iterator<Item = &String> + '_> = match collection {
            Collection::Civilizations => Box::new(self.civilizations.keys()),
            Collection::Leaders => Box::new(self.leaders.keys()),
            Collection::Units => Box::new(self.units.keys()),
            Collection::Resources => Box::new(self.resources.keys()),
            Collection::Wonders => Box::new(self.wonders.keys()),
            Collection::VictoryTypes => Box::new(self.victory_types.keys()),
        };
        keys.map(String::as_str)
    }

    /// Resolve a route parameter against one collection's keys.
    pub fn resolve(&self, collection: Collection, param: &str) -> Option<&str> {
        let want = normalize_param(param);
        self.names(collection)
            .find(|key| key.trim().to_lowercase() == want)
    }
}

/// Route parameters arrive URL-decoded and dash-separated; keys are matched
/// case- and dash-insensitively.
pub fn normalize_param(param: &str) -> String {
    param.replace('-', " ").trim().to_lowercase()
}
