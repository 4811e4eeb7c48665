//! Poster URL resolution with a local placeholder.

#[cfg(test)]
#[path = "poster_test.rs"]
mod poster_test;

/// Served from the public directory; shown when a poster fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// The URL to render for a poster that may have already failed.
pub fn poster_src(src: &str, failed: bool) -> String {
    if failed || src.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_owned()
    } else {
        src.to_owned()
    }
}
