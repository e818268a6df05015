// Fixed-timestep game loop
//
// Runs the simulation on a fixed timestep and hands every tick a
// `FrameTime`. The simulation clock only advances when a tick runs, so
// the game logic never reads the wall clock and replays deterministically.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Ticks a single frame may run before the backlog is dropped
const MAX_SIMULATION_STEPS: u32 = 5;

/// Frames averaged for the FPS readout
const FPS_WINDOW_SIZE: usize = 60;

/// Timing context for one simulation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Simulation clock at the start of the tick, in milliseconds
    pub previous: f64,
    /// Length of the tick in seconds
    pub seconds_passed: f32,
}

impl FrameTime {
    pub fn new(previous: f64, seconds_passed: f32) -> Self {
        Self {
            previous,
            seconds_passed,
        }
    }

    /// The tick that follows this one, `seconds_passed` later
    pub fn advance(&self, seconds_passed: f32) -> Self {
        Self {
            previous: self.previous + f64::from(self.seconds_passed) * 1000.0,
            seconds_passed,
        }
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Fixed-step driver: turns wall time into a whole number of ticks
#[derive(Debug)]
pub struct GameLoop {
    /// Accumulated wall time not yet consumed by ticks
    accumulator: Duration,

    /// Wall time the previous frame began
    last_frame: Instant,

    /// Simulation clock handed to the next tick
    clock: FrameTime,

    paused: bool,

    /// Recent frame lengths, oldest first
    recent_frames: VecDeque<Duration>,

    frame_count: u64,

    /// Ticks handed out by `next_tick`
    tick_count: u64,

    /// Averaged over `recent_frames`, refreshed every 10 frames
    fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            clock: FrameTime::new(0.0, FIXED_TIMESTEP),
            paused: false,
            recent_frames: VecDeque::with_capacity(FPS_WINDOW_SIZE + 1),
            frame_count: 0,
            tick_count: 0,
            fps: 0.0,
        }
    }

    /// Start a frame and return how many ticks to run before drawing.
    ///
    /// Call [`next_tick`](Self::next_tick) once per returned tick.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.record_frame(elapsed);

        if self.paused {
            return 0;
        }
        self.consume(elapsed)
    }

    /// Bank `elapsed` wall time and take as many whole ticks as allowed
    fn consume(&mut self, elapsed: Duration) -> u32 {
        let step = fixed_timestep_duration();
        self.accumulator += elapsed;

        let mut ticks = 0;
        while ticks < MAX_SIMULATION_STEPS && self.accumulator >= step {
            self.accumulator -= step;
            ticks += 1;
        }
        // Still behind after the cap: drop the backlog, keep a partial tick
        if self.accumulator >= step {
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Timing for the next tick; advances the simulation clock
    pub fn next_tick(&mut self) -> FrameTime {
        let time = self.clock;
        self.clock = self.clock.advance(FIXED_TIMESTEP);
        self.tick_count += 1;
        time
    }

    /// Simulation clock the next tick will see
    pub fn clock(&self) -> FrameTime {
        self.clock
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop handing out ticks; the simulation clock freezes
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Wall time spent paused is not simulated
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn record_frame(&mut self, elapsed: Duration) {
        self.recent_frames.push_back(elapsed);
        if self.recent_frames.len() > FPS_WINDOW_SIZE {
            self.recent_frames.pop_front();
        }

        if self.frame_count % 10 != 0 {
            return;
        }
        let total: Duration = self.recent_frames.iter().sum();
        let average = total.as_secs_f32() / self.recent_frames.len() as f32;
        self.fps = if average > 0.0 { 1.0 / average } else { 0.0 };
    }
}

/// Wall time of one tick, matching what `next_tick` adds to the clock
fn fixed_timestep_duration() -> Duration {
    Duration::from_secs_f32(FIXED_TIMESTEP)
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
