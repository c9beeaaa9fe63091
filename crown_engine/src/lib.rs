pub mod combat;
pub mod config;
pub mod dice;
pub mod economy;
pub mod game_engine;
pub mod policy;
pub mod snapshot;
pub mod state;

pub const STARTING_GOLD: u32 = 100;
pub const RECRUIT_COST: u32 = 20;
pub const RECRUIT_ARMY: u32 = 10;
pub const MAX_GAME_RECORDING_SIZE: usize = 15000;

pub const HELP_TEXT: &str = "Crown Conquest Online\n\
    Objective: Conquer all territories to become king.\n\
    1. Click a territory to select it.\n\
    2. Click another to move armies or attack.\n\
    3. Press 'R' to recruit (20 gold, +10 soldiers).\n\
    4. Earn gold per territory per turn.\n\
    5. Press 'I' to toggle instructions.\n\
    Click to start!";
