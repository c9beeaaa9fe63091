use thiserror::Error;

/// Integrity problems found while loading a scenario. These are fatal at setup time.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("scenario has no territories")]
    Empty,

    #[error("scenario has {0} territories, more than a map can address")]
    TooManyTerritories(usize),

    #[error("territory {0} is defined more than once")]
    DuplicateTerritory(String),

    #[error("territory {territory} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { territory: String, neighbor: String },

    #[error("territory {0} lists itself as a neighbor")]
    SelfAdjacent(String),

    #[error("{territory} borders {neighbor} but {neighbor} does not border {territory}")]
    AsymmetricAdjacency { territory: String, neighbor: String },

    #[cfg(feature = "serde")]
    #[error("could not parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A rejected action. The session is left untouched and the turn does not advance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("The game is over")]
    GameOver,

    #[error("Wait for your turn!")]
    NotYourTurn,

    #[error("No territory selected!")]
    NoSelection,

    #[error("Not enough gold! ({gold}/{cost})")]
    InsufficientFunds { gold: u32, cost: u32 },

    #[error("{0} is not yours to command")]
    NotOwned(String),

    #[error("{to} does not border {from}")]
    NotAdjacent { from: String, to: String },

    #[error("Invalid move amount! ({amount}, Max: {max})")]
    InvalidMoveAmount { amount: u32, max: u32 },

    #[error("No army move is waiting for an amount")]
    NoPendingMove,

    #[error("Cannot attack with an empty army")]
    EmptyArmy,

    #[error("Cannot attack a territory held by the same faction")]
    FriendlyTarget,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown territory: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidAction(#[from] ActionError),
}

impl GameError {
    /// Returns `true` if the error is an [`ActionError::InsufficientFunds`].
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction(ActionError::InsufficientFunds { .. })
        )
    }

    /// Returns `true` if the error is a [`NotFound`].
    ///
    /// [`NotFound`]: GameError::NotFound
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }
}
