use serde::{Deserialize, Serialize};

/// The named grouping an entity is stored under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Civilizations,
    Leaders,
    Units,
    Resources,
    Wonders,
    VictoryTypes,
}

impl Collection {
    /// Collections whose names participate in cross-linking, in precedence
    /// order: a name catalogued under more than one collection links to the
    /// earliest of these.
    pub const LINKABLE: [Collection; 5] = [
        Collection::Civilizations,
        Collection::Resources,
        Collection::Wonders,
        Collection::Leaders,
        Collection::Units,
    ];

    /// All collections, in navigation order.
    pub const ALL: [Collection; 6] = [
        Collection::Civilizations,
        Collection::Leaders,
        Collection::Units,
        Collection::Resources,
        Collection::Wonders,
        Collection::VictoryTypes,
    ];

    /// URL path segment for this collection's routes. Victory paths serve
    /// under `/victory`, not `/victory_types`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Collection::Civilizations => "civilizations",
            Collection::Leaders => "leaders",
            Collection::Units => "units",
            Collection::Resources => "resources",
            Collection::Wonders => "wonders",
            Collection::VictoryTypes => "victory",
        }
    }

    /// Inverse of [`path_segment`](Self::path_segment), for route dispatch.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.path_segment() == segment)
    }

    /// Heading used on index pages.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Civilizations => "Civilizations",
            Collection::Leaders => "Leaders",
            Collection::Units => "Units",
            Collection::Resources => "Resources",
            Collection::Wonders => "Wonders",
            Collection::VictoryTypes => "Victory Paths",
        }
    }

    /// Singular label used in not-found messages.
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Civilizations => "Civilization",
            Collection::Leaders => "Leader",
            Collection::Units => "Unit",
            Collection::Resources => "Resource",
            Collection::Wonders => "Wonder",
            Collection::VictoryTypes => "Victory Type",
        }
    }
}
