#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Classify files and URLs by extension.
//!
//! This crate maps a file name extension, or the extension at the end of a
//! URL path, to a MIME type string and a [`Category`] tag. It is meant for code
//! that has to set a `Content-Type` header, route files by kind or filter
//! uploads. It does no I/O and never looks at file contents.
//!
//! # Features
//!
//! - **Static registry** - a sorted, compile-time table of ~150 extensions; lookups
//!   are a binary search and never allocate on a hit
//! - **Case-insensitive** - `"PNG"`, `"png"` and `".png"` classify identically
//! - **Closed categories** - every result carries an exhaustive [`Category`] tag
//! - **Never fails** - unknown extensions resolve to `application/octet-stream`
//!   tagged [`Category::Bin`], see [`MimeRecord::is_fallback`]
//!
//! # Optional Features
//!
//! - `std` - [`MimeRecord::from_path`] for filesystem paths (enabled by default)
//! - `serde` - serialize records as their extension string (enabled by default)
//! - `mime` - convert records into [`mime::Mime`](https://docs.rs/mime) (enabled by default)
//! - `http` - convert records into `http::HeaderValue`, classify `http::Uri`
//!
//! # Examples
//!
//! ## Classifying an extension
//!
//! ```rust
//! use mime_kit::{classify_extension, Category};
//!
//! let record = classify_extension("HTML");
//! assert_eq!(record.mime(), "text/html");
//! assert_eq!(record.extension(), "html");
//! assert_eq!(record.category(), Category::Html);
//! ```
//!
//! ## Classifying a URL
//!
//! ```rust
//! use mime_kit::{classify_url, Category};
//!
//! let record = classify_url("https://cdn.example.com/media/song.mp3?download=1");
//! assert_eq!(record.category(), Category::Mp3);
//!
//! // Only the last suffix counts.
//! assert_eq!(classify_url("/backups/site.tar.gz").extension(), "gz");
//! ```
//!
//! ## Routing by category
//!
//! ```rust
//! use mime_kit::{classify_extension, Category};
//!
//! fn is_web_image(ext: &str) -> bool {
//!     matches!(
//!         classify_extension(ext).category(),
//!         Category::Jpg | Category::Png | Category::Gif | Category::Webp | Category::Svg
//!     )
//! }
//!
//! assert!(is_web_image("JPEG"));
//! assert!(!is_web_image("exe"));
//! ```
//!
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
pub use error::ParseCategoryError;

mod category;
pub use category::Category;

mod record;
pub use record::{classify_extension, classify_url, MimeRecord};

pub mod registry;

mod convert;

pub mod utils;
