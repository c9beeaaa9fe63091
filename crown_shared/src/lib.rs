pub mod error;
pub mod faction;
pub mod map;
pub mod record;
pub mod scenario;

pub use faction::NUM_FACTIONS;

use faction::Faction;
use map::TerritoryId;

/// Mutable state of one territory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Territory {
    pub id: TerritoryId,
    pub owner: Faction,
    pub army: u32,
}

impl Territory {
    pub fn new(id: TerritoryId, owner: Faction, army: u32) -> Self {
        Self { id, owner, army }
    }

    /// Adds `delta` to the army, clamping at zero. Returns the new army.
    pub fn add_army(&mut self, delta: i64) -> u32 {
        self.army = (i64::from(self.army) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        self.army
    }
}
