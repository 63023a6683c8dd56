/// Gallery catalog: which turntable videos to mount and how to label them.
///
/// Asset paths are resolved relative to the site root; durations must match
/// the encoded files since the timeline is partitioned arithmetically, never
/// probed from the element.
#[derive(Debug, Clone, Copy)]
pub struct VideoItem {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub duration_seconds: f64,
}

pub const GALLERY_VIDEOS: &[VideoItem] = &[
    VideoItem {
        name: "goggle.mp4",
        label: Some("Goggles"),
        duration_seconds: 7.0,
    },
    VideoItem {
        name: "watch.mp4",
        label: Some("Watch"),
        duration_seconds: 20.0,
    },
];

impl VideoItem {
    /// Explicit label when present, otherwise derived from the file name:
    /// extension stripped, `-`/`_` separators spaced out, uppercased.
    pub fn display_label(&self) -> String {
        match self.label {
            Some(label) => label.to_string(),
            None => derive_label(self.name),
        }
    }
}

fn derive_label(name: &str) -> String {
    let stem = name.rsplit_once('.').map_or(name, |(stem, _ext)| stem);
    stem.replace(['-', '_'], " ").to_uppercase()
}
