/// Container extensions the loader will treat as video files.
pub const ACCEPTED_VIDEO_EXTENSIONS: &[&str] = &["webm", "mp4", "mkv"];

/// Still-image extensions that can carry animation frames.
pub const ACCEPTED_ANIMATED_IMAGE_EXTENSIONS: &[&str] = &["gif", "webp", "apng", "mjpeg"];

/// Returns the substring after the last `.` in `filename`, or `None` when the
/// name carries no extension.
///
/// No case normalization is performed; matching is exact. A trailing dot
/// yields `Some("")`.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn is_webp(filename: &str) -> bool {
    extension(filename) == Some("webp")
}

pub fn is_gif(filename: &str) -> bool {
    extension(filename) == Some("gif")
}

pub fn is_video(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ACCEPTED_VIDEO_EXTENSIONS.contains(&ext))
}
