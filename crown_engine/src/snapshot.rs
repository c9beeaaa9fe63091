use crown_shared::{
    faction::{Faction, Side},
    map::Position,
    record::Outcome,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerritoryView {
    pub name: String,
    pub owner: Faction,
    pub army: u32,
    pub gold_income: u32,
    pub position: Position,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PendingMoveView {
    pub source: String,
    pub target: String,
    pub max: u32,
}

/// Read-only view of a session, produced after every state change for the
/// host to redraw from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub territories: Vec<TerritoryView>,
    pub player_gold: u32,
    pub enemy_gold: u32,
    pub turn: Side,
    pub status: String,
    pub selected_territory: Option<String>,
    pub pending_move: Option<PendingMoveView>,
    pub help_visible: bool,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn territory(&self, name: &str) -> Option<&TerritoryView> {
        self.territories.iter().find(|x| x.name == name)
    }
}
