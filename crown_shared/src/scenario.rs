use crate::{faction::Faction, map::Position};

#[cfg(feature = "serde")]
use crate::error::ScenarioError;

/// Initial state of one territory, as authored in a scenario file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioTerritory {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Position,
    pub owner: Faction,
    pub army: u32,
    pub gold_income: u32,
    pub neighbors: Vec<String>,
}

/// The territory set a session starts from. Territory order is the stable
/// iteration order used everywhere else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "serde", serde(rename = "territory"))]
    pub territories: Vec<ScenarioTerritory>,
}

macro_rules! scenario {
    ($($name:literal @ ($x:expr, $y:expr) => $owner:ident {
        army: $army:expr,
        gold_income: $income:expr,
        neighbors: [$($neighbor:literal),* $(,)?],
    },)*) => {
        $crate::scenario::Scenario {
            territories: ::std::vec![
                $($crate::scenario::ScenarioTerritory {
                    name: ::std::string::String::from($name),
                    position: $crate::map::Position { x: $x, y: $y },
                    owner: $crate::faction::Faction::$owner,
                    army: $army,
                    gold_income: $income,
                    neighbors: ::std::vec![$(::std::string::String::from($neighbor),)*],
                },)*
            ],
        }
    };
}

impl Scenario {
    /// The six-territory realm the game ships with.
    pub fn crown_conquest() -> Self {
        scenario! {
            "Northland" @ (200.0, 100.0) => Player {
                army: 50,
                gold_income: 15,
                neighbors: ["Westland", "Eastland", "Highland"],
            },
            "Southland" @ (200.0, 400.0) => Enemy {
                army: 30,
                gold_income: 10,
                neighbors: ["Westland", "Eastland"],
            },
            "Eastland" @ (500.0, 250.0) => Enemy {
                army: 40,
                gold_income: 12,
                neighbors: ["Northland", "Southland", "Midland"],
            },
            "Westland" @ (100.0, 250.0) => Neutral {
                army: 20,
                gold_income: 8,
                neighbors: ["Northland", "Southland", "Midland"],
            },
            "Midland" @ (300.0, 250.0) => Neutral {
                army: 25,
                gold_income: 10,
                neighbors: ["Eastland", "Westland", "Highland"],
            },
            "Highland" @ (300.0, 150.0) => Player {
                army: 35,
                gold_income: 12,
                neighbors: ["Northland", "Midland"],
            },
        }
    }

    /// Parses a scenario from TOML, one `[[territory]]` table per territory.
    /// Graph integrity is checked when the scenario is turned into a map.
    #[cfg(feature = "serde")]
    pub fn from_toml(source: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(source)?)
    }
}
