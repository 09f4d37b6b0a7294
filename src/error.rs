//! Error types.
//!
//! Classification itself never fails: an extension the registry does not know
//! resolves to `application/octet-stream` with [`Category::Bin`](crate::Category::Bin)
//! (see [`MimeRecord::is_fallback`](crate::MimeRecord::is_fallback)). The only
//! fallible operation is parsing a category tag name back into a
//! [`Category`](crate::Category).
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{Category, ParseCategoryError};
//!
//! let err: ParseCategoryError = "Html".parse::<Category>().unwrap_err();
//! assert_eq!(err.input(), "Html");
//! assert_eq!(err.to_string(), "unknown category tag: `Html`");
//! ```

impl_error!(ParseCategoryError, "unknown category tag");

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn message_includes_input() {
        let err = ParseCategoryError::new("sevenz");
        assert_eq!(err.input(), "sevenz");
        assert_eq!(err.to_string(), "unknown category tag: `sevenz`");
    }

    #[test]
    fn is_core_error() {
        fn assert_error<E: core::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ParseCategoryError::new(""));
    }
}
