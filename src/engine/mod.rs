// Engine-side plumbing: input actions and fixed-timestep timing

pub mod game_loop;
pub mod input;
