//! Conversions into the types of optional companion crates.
//!
//! - `serde`: a [`MimeRecord`] is encoded as its extension string alone and
//!   decoded by classifying that string again, so decoding an unknown
//!   extension yields the fallback record rather than an error. A record
//!   therefore survives a round trip only as long as the registry keeps the
//!   same mapping for its extension. [`Category`] is encoded as its tag name.
//! - `mime`: a [`MimeRecord`] converts into a parsed [`mime::Mime`].
//! - `http`: a [`MimeRecord`] converts into a `Content-Type` ready
//!   [`http::HeaderValue`].

#[cfg(any(feature = "serde", feature = "mime", feature = "http"))]
use crate::MimeRecord;

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::MimeRecord;
    use crate::Category;

    impl Serialize for MimeRecord {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.extension())
        }
    }

    struct ExtensionVisitor;

    impl Visitor<'_> for ExtensionVisitor {
        type Value = MimeRecord;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a file extension string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(MimeRecord::from_extension(v))
        }
    }

    impl<'de> Deserialize<'de> for MimeRecord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(ExtensionVisitor)
        }
    }

    impl Serialize for Category {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    struct CategoryVisitor;

    impl Visitor<'_> for CategoryVisitor {
        type Value = Category;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a category tag name")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Category {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(CategoryVisitor)
        }
    }
}

#[cfg(feature = "mime")]
impl MimeRecord {
    /// Returns the MIME type as a parsed [`mime::Mime`].
    ///
    /// # Panics
    ///
    /// Never for records produced by this crate: every registry MIME string,
    /// and the fallback, is a valid media type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::MimeRecord;
    ///
    /// let record = MimeRecord::from_extension("json");
    /// assert_eq!(record.to_mime(), mime::APPLICATION_JSON);
    /// ```
    pub fn to_mime(&self) -> mime::Mime {
        self.mime()
            .parse()
            .expect("registry MIME strings are valid media types")
    }
}

#[cfg(feature = "mime")]
impl From<&MimeRecord> for mime::Mime {
    fn from(record: &MimeRecord) -> Self {
        record.to_mime()
    }
}

#[cfg(feature = "http")]
impl From<&MimeRecord> for http::HeaderValue {
    /// Builds a `Content-Type` value from the record's MIME type.
    fn from(record: &MimeRecord) -> Self {
        http::HeaderValue::from_static(record.mime())
    }
}

#[cfg(feature = "http")]
impl From<MimeRecord> for http::HeaderValue {
    fn from(record: MimeRecord) -> Self {
        (&record).into()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{Category, MimeRecord};

    #[cfg(feature = "serde")]
    #[test]
    fn record_encodes_as_extension() {
        let record = MimeRecord::from_extension(".JPEG");
        assert_eq!(serde_json::to_string(&record).unwrap(), r#""jpeg""#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_decodes_by_lookup() {
        let record: MimeRecord = serde_json::from_str(r#""PNG""#).unwrap();
        assert_eq!(record, MimeRecord::from_extension("png"));

        let unknown: MimeRecord = serde_json::from_str(r#""nope""#).unwrap();
        assert!(unknown.is_fallback());
        assert_eq!(unknown.extension(), "nope");

        assert!(serde_json::from_str::<MimeRecord>("42").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn known_records_round_trip() {
        for record in crate::registry::iter() {
            let encoded = serde_json::to_string(&record).unwrap();
            let decoded: MimeRecord = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, record);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn fallback_records_round_trip() {
        for input in ["..png", ".FooBar", "", "...", "tar.gz", "ÜNÏ"] {
            let record = MimeRecord::from_extension(input);
            let encoded = serde_json::to_string(&record).unwrap();
            let decoded: MimeRecord = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, record, "{input:?}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn category_encodes_as_tag_name() {
        use alloc::string::ToString;

        assert_eq!(serde_json::to_string(&Category::SevenZ).unwrap(), r#""sevenZ""#);
        let parsed: Category = serde_json::from_str(r#""threeGp""#).unwrap();
        assert_eq!(parsed, Category::ThreeGp);

        let err = serde_json::from_str::<Category>(r#""Html""#).unwrap_err();
        assert!(err.to_string().contains("unknown category tag"));
    }

    #[cfg(feature = "mime")]
    #[test]
    fn converts_to_mime() {
        let svg = MimeRecord::from_extension("svgz");
        let parsed = mime::Mime::from(&svg);
        assert_eq!(parsed.type_(), mime::IMAGE);
        assert_eq!(parsed.subtype(), mime::SVG);
        assert_eq!(parsed.suffix(), Some(mime::XML));

        assert_eq!(MimeRecord::from_extension("nope").to_mime(), mime::APPLICATION_OCTET_STREAM);
    }

    #[cfg(feature = "http")]
    #[test]
    fn converts_to_header_value() {
        let value = http::HeaderValue::from(MimeRecord::from_extension("css"));
        assert_eq!(value, "text/css");
    }

    #[cfg(feature = "http")]
    #[test]
    fn classifies_uri_path() {
        let uri: http::Uri = "https://x.test/a/b/clip.MKV?t=10.png".parse().unwrap();
        let record = MimeRecord::from_uri(&uri);
        assert_eq!(record.category(), Category::Mkv);
        assert_eq!(record.extension(), "mkv");
    }
}
