use crate::map::TerritoryId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Attack(MoveAttack),
    Fortify(MoveFortify),
    Recruit(MoveRecruit),
}

impl Move {
    /// Returns `true` if the move is [`Attack`].
    ///
    /// [`Attack`]: Move::Attack
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Self::Attack(..))
    }

    /// Returns `true` if the move is [`Fortify`].
    ///
    /// [`Fortify`]: Move::Fortify
    #[must_use]
    pub fn is_fortify(&self) -> bool {
        matches!(self, Self::Fortify(..))
    }

    /// Returns `true` if the move is [`Recruit`].
    ///
    /// [`Recruit`]: Move::Recruit
    #[must_use]
    pub fn is_recruit(&self) -> bool {
        matches!(self, Self::Recruit(..))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAttack {
    pub attacking_territory: TerritoryId,
    pub defending_territory: TerritoryId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveFortify {
    pub source_territory: TerritoryId,
    pub target_territory: TerritoryId,
    pub troop_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecruit {
    pub territory: TerritoryId,
    pub cost: u32,
    pub army: u32,
}
