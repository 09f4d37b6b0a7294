//! Classification results.
//!
//! A [`MimeRecord`] is what every lookup returns: the MIME type, the
//! normalized extension it was derived from, and the [`Category`] tag.
//! Lookups never fail. An extension missing from the registry (including an
//! empty one) produces a fallback record of `application/octet-stream` tagged
//! [`Category::Bin`].
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{Category, MimeRecord};
//!
//! let record = MimeRecord::from_url("https://x.test/a/b/file.JPG");
//! assert_eq!(record.mime(), "image/jpeg");
//! assert_eq!(record.extension(), "jpg");
//! assert_eq!(record.category(), Category::Jpg);
//!
//! let unknown = MimeRecord::from_extension("not-a-real-ext");
//! assert_eq!(unknown.mime(), "application/octet-stream");
//! assert_eq!(unknown.category(), Category::Bin);
//! assert!(unknown.is_fallback());
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::registry::{self, FALLBACK_MIME};
use crate::utils::{strip_dots, url_extension};
use crate::Category;

/// The MIME type and category of a file extension.
///
/// Equality and hashing cover all three fields, so two records from different
/// extensions that share a MIME type (`htm` and `html`) are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeRecord {
    mime: &'static str,
    extension: Cow<'static, str>,
    category: Category,
    fallback: bool,
}

impl MimeRecord {
    pub(crate) const fn known(
        mime: &'static str,
        extension: &'static str,
        category: Category,
    ) -> Self {
        Self {
            mime,
            extension: Cow::Borrowed(extension),
            category,
            fallback: false,
        }
    }

    fn unknown(extension: &str) -> Self {
        let extension = extension.to_ascii_lowercase();
        tracing::trace!(
            target: "mime_kit::registry",
            extension = extension.as_str(),
            mime = FALLBACK_MIME,
            "unknown extension"
        );
        Self {
            mime: FALLBACK_MIME,
            extension: Cow::Owned(extension),
            category: Category::Bin,
            fallback: true,
        }
    }

    /// Classifies a file extension.
    ///
    /// Leading dots are ignored and matching is ASCII case-insensitive, so
    /// `"png"`, `"PNG"` and `".png"` give equal records. Unknown or empty
    /// extensions give the `application/octet-stream` fallback.
    ///
    /// The stored extension is already normalized, so classifying
    /// [`extension()`](Self::extension) again yields an equal record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::{Category, MimeRecord};
    ///
    /// assert_eq!(MimeRecord::from_extension(".PNG"), MimeRecord::from_extension("png"));
    /// assert_eq!(MimeRecord::from_extension("7z").category(), Category::SevenZ);
    /// assert!(MimeRecord::from_extension("").is_fallback());
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        let extension = strip_dots(extension);
        match registry::lookup(extension) {
            Some(&(key, mime, category)) => Self::known(mime, key, category),
            None => Self::unknown(extension),
        }
    }

    /// Classifies the last path segment of a URL or path string.
    ///
    /// See [`url_extension`](crate::utils::url_extension) for how the
    /// extension is extracted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::MimeRecord;
    ///
    /// let record = MimeRecord::from_url("https://x.test/a/b/archive.tar.gz");
    /// assert_eq!(record.extension(), "gz");
    /// assert_eq!(record.mime(), "application/gzip");
    /// ```
    pub fn from_url(url: &str) -> Self {
        Self::from_extension(url_extension(url))
    }

    /// Classifies a filesystem path by its extension.
    ///
    /// Paths without an extension, or whose extension is not valid UTF-8,
    /// give the fallback record.
    ///
    /// The extension is taken from [`Path::extension`](std::path::Path::extension),
    /// which treats a leading dot as part of the file name: `.png` has no
    /// extension here and falls back, while [`from_url`](Self::from_url)
    /// reads the same string as `png`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::MimeRecord;
    ///
    /// assert_eq!(MimeRecord::from_path("/srv/www/index.html").mime(), "text/html");
    /// assert!(MimeRecord::from_path("Makefile").is_fallback());
    /// assert!(MimeRecord::from_path(".png").is_fallback());
    /// assert!(!MimeRecord::from_url(".png").is_fallback());
    /// ```
    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Classifies the path component of a parsed URI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::MimeRecord;
    /// use http::Uri;
    ///
    /// let uri: Uri = "https://x.test/feed.rss?page=2".parse().unwrap();
    /// assert_eq!(MimeRecord::from_uri(&uri).mime(), "application/rss+xml");
    /// ```
    #[cfg(feature = "http")]
    pub fn from_uri(uri: &http::Uri) -> Self {
        Self::from_url(uri.path())
    }

    /// Returns the MIME type, e.g. `"text/html"`.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Returns the normalized (lowercase, dotless) extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the category tag.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` if the extension was not found in the registry.
    ///
    /// A table hit that happens to map to `application/octet-stream`
    /// (`exe`, `dmg`, …) is not a fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Returns the top-level type, e.g. `"image"` for `image/png`.
    pub fn type_(&self) -> &'static str {
        self.mime.split_once('/').map_or(self.mime, |(top, _)| top)
    }

    /// Returns the subtype, e.g. `"svg+xml"` for `image/svg+xml`.
    pub fn subtype(&self) -> &'static str {
        self.mime.split_once('/').map_or("", |(_, sub)| sub)
    }

    /// Consumes the record and returns the normalized extension.
    pub fn into_extension(self) -> String {
        self.extension.into_owned()
    }
}

impl fmt::Display for MimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime)
    }
}

impl AsRef<str> for MimeRecord {
    fn as_ref(&self) -> &str {
        self.mime
    }
}

impl FromStr for MimeRecord {
    type Err = Infallible;

    /// Classifies `s` as an extension; see [`MimeRecord::from_extension`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_extension(s))
    }
}

impl From<&str> for MimeRecord {
    fn from(extension: &str) -> Self {
        Self::from_extension(extension)
    }
}

/// Classifies a file extension. Shorthand for [`MimeRecord::from_extension`].
pub fn classify_extension(extension: &str) -> MimeRecord {
    MimeRecord::from_extension(extension)
}

/// Classifies a URL or path string. Shorthand for [`MimeRecord::from_url`].
pub fn classify_url(url: &str) -> MimeRecord {
    MimeRecord::from_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn case_variants_are_equal() {
        for record in registry::iter() {
            let upper = record.extension().to_ascii_uppercase();
            assert_eq!(classify_extension(&upper), record);
            let mut mixed = upper.clone();
            mixed[..1].make_ascii_lowercase();
            assert_eq!(classify_extension(&mixed), record);
        }
    }

    #[test]
    fn leading_dot_is_ignored() {
        assert_eq!(classify_extension(".png"), classify_extension("png"));
        assert_eq!(classify_extension(".PNG").extension(), "png");
        assert_eq!(classify_extension("..PNG"), classify_extension("png"));
        assert!(classify_extension("...").is_fallback());
        assert_eq!(classify_extension("...").extension(), "");
    }

    #[test]
    fn normalized_extension_reclassifies_to_same_record() {
        let inputs = ["..png", ".FooBar", "..Foo.Bar", "ÜNÏ", "...", "", "tar.gz", "JPEG"];
        for input in inputs {
            let record = classify_extension(input);
            assert_eq!(classify_extension(record.extension()), record, "{input:?}");
        }
    }

    #[test]
    fn fallback_record() {
        for input in ["", ".", "not-a-real-ext", "a/b", "tar.gz", "ünï"] {
            let record = classify_extension(input);
            assert_eq!(record.mime(), "application/octet-stream");
            assert_eq!(record.category(), Category::Bin);
            assert!(record.is_fallback());
        }
    }

    #[test]
    fn fallback_extension_is_normalized() {
        assert_eq!(classify_extension(".FooBar").extension(), "foobar");
        assert_eq!(classify_extension("ÜNÏ").extension(), "ÜnÏ");
        assert_eq!(classify_extension(".").extension(), "");
    }

    #[test]
    fn known_octet_stream_is_not_fallback() {
        let exe = classify_extension("exe");
        assert_eq!(exe.mime(), "application/octet-stream");
        assert_eq!(exe.category(), Category::Exe);
        assert!(!exe.is_fallback());
        assert_ne!(exe, classify_extension("bin"));
    }

    #[test]
    fn many_to_one() {
        let htm = classify_extension("htm");
        let html = classify_extension("html");
        assert_eq!(htm.mime(), html.mime());
        assert_eq!(htm.category(), Category::Html);
        assert_eq!(html.category(), Category::Html);
        assert_eq!(htm.extension(), "htm");
        assert_eq!(html.extension(), "html");
        assert_ne!(htm, html);
    }

    #[test]
    fn table_quirks_are_authoritative() {
        assert_eq!(classify_extension("ts").mime(), "video/mp2t");
        assert_eq!(classify_extension("woff2").mime(), "application/font-woff");
        assert_eq!(classify_extension("xhtml").category(), Category::Html);
        assert_eq!(classify_extension("docx").category(), Category::Doc);
    }

    #[test]
    fn url_classification() {
        let record = classify_url("https://x.test/a/b/file.JPG");
        assert_eq!(record.extension(), "jpg");
        assert_eq!(record.mime(), "image/jpeg");

        assert_eq!(classify_url("https://x.test/a/b/archive.tar.gz").extension(), "gz");

        let noext = classify_url("https://x.test/a/b/noext");
        assert!(noext.is_fallback());
        assert_eq!(noext.extension(), "");
    }

    #[test]
    fn type_and_subtype() {
        let svg = classify_extension("svg");
        assert_eq!(svg.type_(), "image");
        assert_eq!(svg.subtype(), "svg+xml");
        assert_eq!(svg.to_string(), "image/svg+xml");
        assert_eq!(svg.as_ref(), "image/svg+xml");
    }

    #[test]
    fn parse_and_convert() {
        let parsed: MimeRecord = "Md".parse().unwrap();
        assert_eq!(parsed, MimeRecord::from("md"));
        assert_eq!(parsed.into_extension(), "md");
    }

    #[cfg(feature = "std")]
    #[test]
    fn path_classification() {
        assert_eq!(MimeRecord::from_path("a/b/c.FLAC").category(), Category::Flac);
        assert!(MimeRecord::from_path("a/b/c").is_fallback());
        assert!(MimeRecord::from_path("a/b/.hidden").is_fallback());
        assert!(MimeRecord::from_path(".png").is_fallback());
        assert_eq!(MimeRecord::from_url(".png"), classify_extension("png"));
    }

    #[test]
    fn records_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MimeRecord>();
        assert_send_sync::<Category>();
    }
}
