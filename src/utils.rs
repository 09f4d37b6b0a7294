//! Extension extraction helpers.
//!
//! These functions only slice their input; they never allocate and never fail.
//! Normalization (dropping leading dots, lowercasing) is left to
//! [`MimeRecord::from_extension`](crate::MimeRecord::from_extension).
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::utils::url_extension;
//!
//! assert_eq!(url_extension("https://x.test/a/b/file.JPG?size=2#top"), "JPG");
//! assert_eq!(url_extension("/downloads/archive.tar.gz"), "gz");
//! assert_eq!(url_extension("https://x.test/a/b/noext"), "");
//! ```

/// Returns the extension of the last path segment of a URL or path.
///
/// Any `#fragment` and `?query` are dropped first. When the input carries a
/// `scheme://` prefix, the scheme and authority are skipped so that a host
/// name such as `example.com` is never mistaken for a file name. The extension
/// is the text after the final `.` of the final `/`-separated segment; a
/// segment without a dot, or ending in one, has an empty extension.
///
/// Only the last suffix of a multi-dot name is returned (`tar.gz` gives `gz`).
/// The result is returned as written, without percent-decoding or case folding.
///
/// # Examples
///
/// ```rust
/// use mime_kit::utils::url_extension;
///
/// assert_eq!(url_extension("https://example.com"), "");
/// assert_eq!(url_extension("https://example.com/"), "");
/// assert_eq!(url_extension("file:///tmp/report.pdf"), "pdf");
/// assert_eq!(url_extension("photo.png"), "png");
/// assert_eq!(url_extension("dir/trailing."), "");
/// ```
pub fn url_extension(url: &str) -> &str {
    let url = url.split_once('#').map_or(url, |(head, _)| head);
    let url = url.split_once('?').map_or(url, |(head, _)| head);

    let path = match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |start| &rest[start..]),
        None => url,
    };

    let segment = path.rsplit_once('/').map_or(path, |(_, last)| last);
    segment.rsplit_once('.').map_or("", |(_, extension)| extension)
}

/// Removes every leading `.` from an extension.
pub(crate) fn strip_dots(extension: &str) -> &str {
    extension.trim_start_matches('.')
}
