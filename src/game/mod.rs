// Gameplay: characters and the simulation that drives them

pub mod characters;
pub mod simulation;

pub use simulation::{
    CombatEffect, GameEvent, MovementIntent, Simulation, SimulationError, TickReport,
};
