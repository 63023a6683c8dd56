use crate::constants::{DRAG_STEP_THRESHOLD_PX, STEP_INTERVAL_MS};

/// Immutable per-viewer configuration: which asset backs the viewer and how
/// its timeline is quantized into rotation frames.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    source_path: String,
    frame_count: u32,
    duration_seconds: f64,
}

impl ViewerConfig {
    pub fn new(
        source_path: impl Into<String>,
        frame_count: u32,
        duration_seconds: f64,
    ) -> anyhow::Result<Self> {
        if frame_count == 0 {
            anyhow::bail!("frame_count must be positive");
        }
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            anyhow::bail!("duration_seconds must be positive, got {duration_seconds}");
        }
        Ok(Self {
            source_path: source_path.into(),
            frame_count,
            duration_seconds,
        })
    }

    #[inline]
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Width of one frame's time slice in seconds.
    #[inline]
    pub fn time_per_frame(&self) -> f64 {
        self.duration_seconds / self.frame_count as f64
    }
}

/// Ephemeral drag bookkeeping; only meaningful while `active`.
#[derive(Default, Clone, Copy)]
pub struct DragSession {
    pub active: bool,
    pub anchor_x: f32,
    pub accumulated_dx: f32,
    // None until the first committed step of the session, so the first
    // qualifying move is never rate-limited
    pub last_step_ms: Option<f64>,
}

/// View state owned by the controller; presentation (scale class, icon
/// state) is derived from it, never stored separately.
#[derive(Default, Clone, Copy)]
pub struct ViewState {
    pub current_frame: u32,
    pub zoomed: bool,
    pub fullscreen: bool,
}

/// Seek target for the media surface, derived from the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekCommand {
    pub time_seconds: f64,
}

/// What the wiring layer should ask the platform for. The request is
/// advisory; the authoritative state arrives via `fullscreen_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Gesture-to-frame controller: turns a continuous horizontal drag into
/// discrete, rate-limited frame steps and owns the zoom/fullscreen toggles.
///
/// Sign convention: dragging right (+x) advances the frame index, dragging
/// left steps it back.
///
/// Timestamps are `Event.timeStamp` milliseconds passed in by the caller;
/// the controller never reads a clock, which keeps it host-testable.
pub struct ViewerController {
    config: ViewerConfig,
    pub session: DragSession,
    pub state: ViewState,
}

impl ViewerController {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            session: DragSession::default(),
            state: ViewState::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Begin a drag session at pointer position `x`. Does not move the
    /// frame. A pointer-down while a session is already active is ignored.
    pub fn drag_start(&mut self, x: f32) {
        if self.session.active {
            return;
        }
        self.session = DragSession {
            active: true,
            anchor_x: x,
            accumulated_dx: 0.0,
            last_step_ms: None,
        };
    }

    /// Sample the drag at pointer position `x`. Commits at most one frame
    /// step per call: deltas accumulate until they cross the pixel
    /// threshold, and steps are spaced at least `STEP_INTERVAL_MS` apart
    /// regardless of how much distance built up in between (no catch-up
    /// stepping).
    pub fn drag_move(&mut self, x: f32, now_ms: f64) -> Option<SeekCommand> {
        if !self.session.active {
            return None;
        }
        let delta = x - self.session.anchor_x;
        self.session.anchor_x = x;
        self.session.accumulated_dx += delta;

        if let Some(last) = self.session.last_step_ms {
            if now_ms - last < STEP_INTERVAL_MS {
                return None;
            }
        }
        if self.session.accumulated_dx.abs() < DRAG_STEP_THRESHOLD_PX {
            return None;
        }

        let direction: i64 = if self.session.accumulated_dx > 0.0 { 1 } else { -1 };
        // true modulo, never negative
        let n = self.config.frame_count as i64;
        let stepped = (self.state.current_frame as i64 + direction) % n;
        self.state.current_frame = ((stepped + n) % n) as u32;
        self.session.accumulated_dx = 0.0;
        self.session.last_step_ms = Some(now_ms);
        Some(self.seek_command())
    }

    /// End the drag session (pointer up, leave, or cancel — all identical).
    /// Leaves `current_frame` where it is.
    pub fn drag_end(&mut self) {
        self.session.active = false;
        self.session.accumulated_dx = 0.0;
    }

    /// Toggle the cosmetic zoom state; returns the new value. Never touches
    /// the frame or the media surface.
    pub fn double_activate(&mut self) -> bool {
        self.state.zoomed = !self.state.zoomed;
        self.state.zoomed
    }

    /// Which fullscreen transition to request next, based on the last state
    /// the platform reported.
    pub fn fullscreen_request(&self) -> FullscreenRequest {
        if self.state.fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        }
    }

    /// Platform notification: unconditionally adopt the reported state.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        self.state.fullscreen = is_fullscreen;
    }

    /// Seek target for the current frame; also used for the initial mount
    /// sync of the media surface.
    pub fn seek_command(&self) -> SeekCommand {
        SeekCommand {
            time_seconds: self.state.current_frame as f64 * self.config.time_per_frame(),
        }
    }
}
