pub mod autopilot;
pub mod simple;
