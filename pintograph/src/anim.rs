//! Stateful animation: wall-clock run control and the accumulated pen trace.
use crate::config::{ConfigError, PintoConfig};
use crate::mech::{DegenerateLinkage, Frame};
use crate::point::rotate_about;
use std::time::Instant;

/// Run state of the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    /// Initial state, also entered by reset
    #[default]
    Idle,
    /// Accumulating within the run window
    Running,
    /// Run window exceeded, snapshot frozen until the next reset
    Stopped,
}

/// Wall-clock run window with start/stop/reset transitions.
///
/// Elapsed time is measured from the last reset (or from the first tick),
/// never from a start signal.
#[derive(Debug, Default)]
pub struct SimClock {
    start: Option<Instant>,
    state: ClockState,
}

impl SimClock {
    /// Apply one round of control signals, returning the elapsed seconds
    /// when the clock ends up running.
    ///
    /// Transition priority: reset re-arms the origin and overrides start;
    /// start switches to running without touching the origin; exceeding
    /// `runtime` stops the run. A stopped run ignores bare start signals,
    /// the overrun rule re-stops it on the same tick.
    pub fn tick(&mut self, start: bool, reset: bool, runtime: f64, now: Instant) -> Option<f64> {
        if reset {
            self.start = Some(now);
            self.state = ClockState::Idle;
        }
        if start && self.state != ClockState::Running {
            self.state = ClockState::Running;
        }
        let origin = *self.start.get_or_insert(now);
        let elapsed = now.duration_since(origin).as_secs_f64();
        if self.state == ClockState::Running && elapsed > runtime {
            self.state = ClockState::Stopped;
        }
        (self.state == ClockState::Running).then_some(elapsed)
    }

    /// Current run state.
    pub fn state(&self) -> ClockState {
        self.state
    }
}

/// Pen trace accumulated in the rotating frame of the pen disk.
///
/// Each point is appended pre-rotated by the disk angle and the polyline is
/// derotated as a whole when rendered, so the trace stays put on the
/// turning disk instead of smearing across the stationary frame.
#[derive(Debug, Default, Clone)]
pub struct PathTrace {
    points: Vec<[f64; 2]>,
}

impl PathTrace {
    /// Append a pen point, rotated by `angle` about `center`.
    pub fn append(&mut self, p: [f64; 2], center: [f64; 2], angle: f64) {
        self.points.push(rotate_about(p, center, angle));
    }

    /// The whole polyline rotated by `angle` about `center`.
    ///
    /// Callers pass the inverse disk angle to express the trace in the
    /// stationary frame. Zero- and one-point traces render as-is.
    pub fn render(&self, center: [f64; 2], angle: f64) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|&p| rotate_about(p, center, angle))
            .collect()
    }

    /// The accumulated points in the disk frame.
    pub fn raw(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Number of accumulated points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing has been traced yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop the accumulated trace.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Control signals of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Begin or continue the run
    pub start: bool,
    /// Re-arm the clock and wipe the trace, overrides `start`
    pub reset: bool,
    /// Run window in seconds
    pub runtime: f64,
}

/// Any error a tick can report.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum PintoError {
    /// Ill-formed configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Unreachable rod geometry at this time sample
    #[error(transparent)]
    Degenerate(#[from] DegenerateLinkage),
}

/// Snapshot returned from one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Geometry and linkage points, `None` until the first running tick
    pub frame: Option<Frame>,
    /// Rendered pen path
    pub path: Vec<[f64; 2]>,
    /// Elapsed seconds, zero when not running
    pub time: f64,
}

/// Stateful pintograph animation driver.
///
/// Owns the clock, the accumulated trace and the last computed snapshot.
/// A single instance must not be ticked concurrently; ticks are O(1) in the
/// trace size, which itself grows by one point per running tick.
#[derive(Debug, Default)]
pub struct Engine {
    clock: SimClock,
    trace: PathTrace,
    last: Option<Frame>,
}

impl Engine {
    /// Stateless single-shot evaluation at time `t`.
    pub fn evaluate_at(cfg: &PintoConfig, t: f64) -> Result<Frame, PintoError> {
        Ok(cfg.validated()?.frame(t)?)
    }

    /// Advance the animation by one tick.
    ///
    /// Failed validation leaves the prior state untouched. A degenerate
    /// sample aborts the call and keeps the previous trace and snapshot.
    /// When the clock is not running the last snapshot is returned frozen,
    /// with the trace reported in the pen-disk frame and `time` zero.
    pub fn tick(
        &mut self,
        cfg: &PintoConfig,
        sig: Signals,
        now: Instant,
    ) -> Result<TickResult, PintoError> {
        let mech = cfg.validated()?;
        if sig.reset {
            self.trace.clear();
            self.last = None;
        }
        let Some(t) = self.clock.tick(sig.start, sig.reset, sig.runtime, now) else {
            return Ok(TickResult {
                frame: self.last,
                path: self.trace.raw().to_vec(),
                time: 0.,
            });
        };
        let frame = mech.frame(t)?;
        let center = mech.centers()[2];
        let w3 = mech.omega()[2];
        self.trace.append(frame.pos.p, center, w3 * t);
        let path = self.trace.render(center, -w3 * t);
        self.last = Some(frame);
        Ok(TickResult { frame: Some(frame), path, time: t })
    }

    /// Run state of the internal clock.
    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    /// The accumulated trace in the pen-disk frame.
    pub fn trace(&self) -> &PathTrace {
        &self.trace
    }
}
