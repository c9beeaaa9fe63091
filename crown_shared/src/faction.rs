use std::fmt;

pub const NUM_FACTIONS: usize = 3;

/// Ownership category of a territory.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, enum_map::Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    Player,
    Enemy,
    Neutral,
}

impl Faction {
    pub const ALL: [Faction; NUM_FACTIONS] = [Faction::Player, Faction::Enemy, Faction::Neutral];

    /// Returns `true` if the faction is [`Player`].
    ///
    /// [`Player`]: Faction::Player
    #[must_use]
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    /// Returns `true` if the faction is [`Enemy`].
    ///
    /// [`Enemy`]: Faction::Enemy
    #[must_use]
    pub fn is_enemy(&self) -> bool {
        matches!(self, Self::Enemy)
    }

    /// Returns `true` if the faction is [`Neutral`].
    ///
    /// [`Neutral`]: Faction::Neutral
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }

    /// The side that plays turns for this faction. Neutral never takes a turn.
    pub fn side(self) -> Option<Side> {
        match self {
            Faction::Player => Some(Side::Player),
            Faction::Enemy => Some(Side::Enemy),
            Faction::Neutral => None,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Faction::Player => "Player",
            Faction::Enemy => "Enemy",
            Faction::Neutral => "Neutral",
        };

        f.write_str(name)
    }
}

/// A faction that takes turns and holds gold.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, enum_map::Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    #[must_use]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    pub fn faction(self) -> Faction {
        self.into()
    }
}

impl From<Side> for Faction {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Faction::Player,
            Side::Enemy => Faction::Enemy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.faction(), f)
    }
}
