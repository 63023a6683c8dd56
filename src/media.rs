use web_sys as web;

use crate::controller::SeekCommand;

/// One-way sync from controller state onto the media element: pause first
/// so scrubbing can never start playback, then seek. The element's actual
/// decode position is never read back; an absent surface is a no-op target,
/// not an error.
pub fn sync_to_frame(video: Option<&web::HtmlVideoElement>, cmd: SeekCommand) {
    if let Some(video) = video {
        _ = video.pause();
        video.set_current_time(cmd.time_seconds);
    }
}

/// Configure an element as a scrub-only frame store: muted, inline,
/// preloaded, no autoplay and no native controls.
pub fn configure_for_scrubbing(video: &web::HtmlVideoElement, source_path: &str) {
    video.set_muted(true);
    video.set_preload("auto");
    video.set_autoplay(false);
    video.set_controls(false);
    _ = video.set_attribute("playsinline", "");
    video.set_src(source_path);
}
