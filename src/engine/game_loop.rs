/// Game loop timing and control system
///
/// Implements a fixed timestep accumulator. The host feeds it the real time
/// of each frame and gets back how many fixed simulation ticks to run, so
/// gameplay logic advances at a consistent rate regardless of frame rate.
use std::time::Duration;

/// Target simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Total simulated time fed into the loop
    elapsed: Duration,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            elapsed: Duration::ZERO,
            paused: false,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame that lasted `frame_time`, returns the number of fixed updates to run
    pub fn begin_frame(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.elapsed += frame_time;

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_STEPS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator - self.accumulator.min(FIXED_TIMESTEP_DURATION)
            );
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed timestep for simulation updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get total time fed into the loop
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
