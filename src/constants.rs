/// Drag interaction tuning constants.
///
/// Named here rather than inline in the handlers so the stepping behavior
/// (threshold, cadence, quantization) can be read in one place.
// Minimum accumulated horizontal drag distance (CSS px) to commit a frame step
pub const DRAG_STEP_THRESHOLD_PX: f32 = 10.0;

// Minimum interval between committed frame steps (ms, compared against
// Event.timeStamp), independent of pointer sampling rate
pub const STEP_INTERVAL_MS: f64 = 100.0;

// One revolution of the turntable is quantized into this many frames,
// shared by every viewer in the gallery
pub const TURNTABLE_FRAME_COUNT: u32 = 72;
