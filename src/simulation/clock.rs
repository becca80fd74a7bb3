// simulation/clock.rs
// Time scale and pause state. The wall-clock tick rate never changes; only the
// simulated time per tick does, so the integrator always sees base_tick * scale.

use tracing::debug;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockState {
    Running,
    /// Holds the scale to restore on resume.
    Paused { saved: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    base_tick: f32,
    time_scale: f32,
    state: ClockState,
    /// Cached base_tick * time_scale, refreshed by every operation.
    effective_tick: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(config::DEFAULT_BASE_TICK)
    }
}

impl SimulationClock {
    /// `base_tick` is fixed for the lifetime of the clock.
    pub fn new(base_tick: f32) -> Self {
        let mut clock = Self {
            base_tick,
            time_scale: config::DEFAULT_TIME_SCALE,
            state: ClockState::Running,
            effective_tick: 0.0,
        };
        clock.recompute();
        clock
    }

    pub fn base_tick(&self) -> f32 {
        self.base_tick
    }

    /// Current multiplier; 0 while paused.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, ClockState::Paused { .. })
    }

    /// Simulated seconds advanced per fixed tick.
    pub fn effective_tick(&self) -> f32 {
        self.effective_tick
    }

    /// Halve the time scale. Ignored while paused. Returns whether it changed.
    pub fn halve(&mut self) -> bool {
        self.rescale(0.5)
    }

    /// Double the time scale. Ignored while paused. Returns whether it changed.
    pub fn double(&mut self) -> bool {
        self.rescale(2.0)
    }

    /// Running(s) -> Paused(s) with an effective scale of 0, or back.
    pub fn toggle_pause(&mut self) {
        match self.state {
            ClockState::Running => {
                self.state = ClockState::Paused {
                    saved: self.time_scale,
                };
                self.time_scale = 0.0;
            }
            ClockState::Paused { saved } => {
                self.state = ClockState::Running;
                self.time_scale = saved;
            }
        }
        self.recompute();
    }

    /// Text for a status line, e.g. `Time scale: x0.5` or `Time scale: paused (x2)`.
    pub fn display_text(&self) -> String {
        match self.state {
            ClockState::Running => format!("Time scale: x{}", self.time_scale),
            ClockState::Paused { saved } => format!("Time scale: paused (x{saved})"),
        }
    }

    fn rescale(&mut self, factor: f32) -> bool {
        if self.is_paused() {
            debug!(factor, "time scale change ignored while paused");
            return false;
        }
        self.time_scale *= factor;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.effective_tick = self.base_tick * self.time_scale;
    }
}
