use crown_shared::faction::Side;
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::STARTING_GOLD;

/// How an army's size turns into a combat roll.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthModel {
    /// `floor(r * army) + army / 2`, losses are half the winning roll.
    #[default]
    Biased,
    /// `floor(r * army)`, losses are the full winning roll.
    Simple,
}

impl StrengthModel {
    pub fn roll(self, army: u32, r: f64) -> f64 {
        let army = f64::from(army);
        match self {
            StrengthModel::Biased => (r * army).floor() + army * 0.5,
            StrengthModel::Simple => (r * army).floor(),
        }
    }

    /// Army lost by the losing side of a battle won with `roll`.
    pub fn losses(self, roll: f64) -> u32 {
        let divisor = match self {
            StrengthModel::Biased => 2.0,
            StrengthModel::Simple => 1.0,
        };

        (roll / divisor).floor() as u32
    }
}

/// When Player income is credited.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCadence {
    /// Player is paid after its action, Enemy at the start of its turn.
    #[default]
    Once,
    /// As [`Once`], and Player is paid again when the Enemy turn ends.
    ///
    /// [`Once`]: IncomeCadence::Once
    Twice,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strength_model: StrengthModel,
    pub income_cadence: IncomeCadence,
    pub player_gold: u32,
    pub enemy_gold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strength_model: StrengthModel::default(),
            income_cadence: IncomeCadence::default(),
            player_gold: STARTING_GOLD,
            enemy_gold: STARTING_GOLD,
        }
    }
}

impl EngineConfig {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn starting_gold(&self) -> EnumMap<Side, u32> {
        EnumMap::from_fn(|side| match side {
            Side::Player => self.player_gold,
            Side::Enemy => self.enemy_gold,
        })
    }
}
