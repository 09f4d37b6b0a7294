//! The extension registry.
//!
//! A static table from lowercase extension to MIME type and [`Category`],
//! sorted by extension so lookups are a binary search. The table lives in
//! read-only memory; there is nothing to initialize and nothing to lock, and
//! it can be read from any number of threads.
//!
//! Where an extension is ambiguous the table's mapping is authoritative:
//! `ts` is an MPEG transport stream, not TypeScript.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::registry;
//!
//! let html = registry::iter().find(|record| record.extension() == "html").unwrap();
//! assert_eq!(html.mime(), "text/html");
//! assert!(registry::len() > 100);
//! ```

use core::cmp::Ordering;

use crate::{Category, MimeRecord};

/// MIME type reported for extensions the registry does not know.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// `(extension, mime, category)`, sorted by extension.
pub(crate) static ENTRIES: &[(&str, &str, Category)] = &[
    ("3gp", "video/3gpp", Category::ThreeGp),
    ("3gpp", "video/3gpp", Category::ThreeGp),
    ("7z", "application/x-7z-compressed", Category::SevenZ),
    ("aac", "audio/aac", Category::Aac),
    ("ai", "application/postscript", Category::Ai),
    ("amr", "audio/amr", Category::Amr),
    ("ar", "application/x-unix-archive", Category::Ar),
    ("asf", "video/x-ms-asf", Category::Asf),
    ("asx", "video/x-ms-asf", Category::Asx),
    ("atom", "application/atom+xml", Category::Atom),
    ("avi", "video/x-msvideo", Category::Avi),
    ("avif", "image/avif", Category::Avif),
    ("awb", "audio/amr-wb", Category::Amr),
    ("bin", "application/octet-stream", Category::Bin),
    ("bmp", "image/x-ms-bmp", Category::Bmp),
    ("bz2", "application/x-bzip2", Category::Bz2),
    ("cab", "application/vnd.ms-cab-compressed", Category::Cab),
    ("cco", "application/x-cocoa", Category::Cco),
    ("cr2", "image/x-canon-cr2", Category::Cr2),
    ("crt", "application/x-x509-ca-cert", Category::Crt),
    ("crx", "application/x-google-chrome-extension", Category::Crx),
    ("css", "text/css", Category::Css),
    ("csv", "text/csv", Category::Csv),
    ("deb", "application/x-deb", Category::Deb),
    ("der", "application/x-x509-ca-cert", Category::Der),
    ("dll", "application/octet-stream", Category::Dll),
    ("dmg", "application/octet-stream", Category::Dmg),
    ("doc", "application/msword", Category::Doc),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Category::Doc,
    ),
    ("ear", "application/java-archive", Category::Ear),
    ("eot", "application/vnd.ms-fontobject", Category::Eot),
    ("eps", "application/postscript", Category::Eps),
    ("epub", "application/epub+zip", Category::Epub),
    ("exe", "application/octet-stream", Category::Exe),
    ("flac", "audio/x-flac", Category::Flac),
    ("flif", "image/flif", Category::Flif),
    ("flv", "video/x-flv", Category::Flv),
    ("gif", "image/gif", Category::Gif),
    ("gz", "application/gzip", Category::Gz),
    ("heic", "image/heic", Category::Heic),
    ("heif", "image/heif", Category::Heic),
    ("hqx", "application/mac-binhex40", Category::Hqx),
    ("htc", "text/x-component", Category::Htc),
    ("htm", "text/html", Category::Html),
    ("html", "text/html", Category::Html),
    ("ical", "text/calendar", Category::Ical),
    ("ico", "image/x-icon", Category::Ico),
    ("ics", "text/calendar", Category::Ical),
    ("img", "application/octet-stream", Category::Img),
    ("iso", "application/octet-stream", Category::Iso),
    ("jad", "text/vnd.sun.j2me.app-descriptor", Category::Jad),
    ("jar", "application/java-archive", Category::Jar),
    ("jardiff", "application/x-java-archive-diff", Category::Jardiff),
    ("jng", "image/x-jng", Category::Jng),
    ("jnlp", "application/x-java-jnlp-file", Category::Jnlp),
    ("jpeg", "image/jpeg", Category::Jpg),
    ("jpg", "image/jpeg", Category::Jpg),
    ("js", "application/javascript", Category::Js),
    ("json", "application/json", Category::Json),
    ("jxl", "image/jxl", Category::Jxl),
    ("jxr", "image/vnd.ms-photo", Category::Jxr),
    ("kar", "audio/midi", Category::Midi),
    ("kml", "application/vnd.google-earth.kml+xml", Category::Kml),
    ("kmz", "application/vnd.google-earth.kmz", Category::Kmz),
    ("lz", "application/x-lzip", Category::Lz),
    ("m3u8", "application/vnd.apple.mpegurl", Category::M3u8),
    ("m4a", "audio/x-m4a", Category::M4a),
    ("m4v", "video/x-m4v", Category::M4v),
    ("md", "text/markdown", Category::Md),
    ("mid", "audio/midi", Category::Midi),
    ("midi", "audio/midi", Category::Midi),
    ("mjs", "application/javascript", Category::Js),
    ("mkv", "video/x-matroska", Category::Mkv),
    ("mml", "text/mathml", Category::Mml),
    ("mng", "video/x-mng", Category::Mng),
    ("mov", "video/quicktime", Category::Mov),
    ("mp3", "audio/mpeg", Category::Mp3),
    ("mp4", "video/mp4", Category::Mp4),
    ("mpeg", "video/mpeg", Category::Mpg),
    ("mpg", "video/mpeg", Category::Mpg),
    ("msi", "application/octet-stream", Category::Msi),
    ("msm", "application/octet-stream", Category::Msm),
    ("msp", "application/octet-stream", Category::Msp),
    ("mxf", "application/mxf", Category::Mxf),
    ("nes", "application/x-nintendo-nes-rom", Category::Nes),
    ("oga", "audio/ogg", Category::Ogg),
    ("ogg", "audio/ogg", Category::Ogg),
    ("ogv", "video/ogg", Category::Ogv),
    ("opus", "audio/opus", Category::Opus),
    ("otf", "application/font-sfnt", Category::Otf),
    ("pdb", "application/x-pilot", Category::Pdb),
    ("pdf", "application/pdf", Category::Pdf),
    ("pem", "application/x-x509-ca-cert", Category::Pem),
    ("pl", "application/x-perl", Category::Pl),
    ("pm", "application/x-perl", Category::Pm),
    ("png", "image/png", Category::Png),
    ("ppt", "application/vnd.ms-powerpoint", Category::Ppt),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        Category::Ppt,
    ),
    ("prc", "application/x-pilot", Category::Prc),
    ("ps", "application/postscript", Category::Ps),
    ("psd", "image/vnd.adobe.photoshop", Category::Psd),
    ("ra", "audio/x-realaudio", Category::Ra),
    ("rar", "application/x-rar-compressed", Category::Rar),
    ("rpm", "application/x-redhat-package-manager", Category::Rpm),
    ("rss", "application/rss+xml", Category::Rss),
    ("rtf", "application/rtf", Category::Rtf),
    ("run", "application/x-makeself", Category::Run),
    ("sea", "application/x-sea", Category::Sea),
    ("shtml", "text/html", Category::Html),
    ("sit", "application/x-stuffit", Category::Sit),
    ("sqlite", "application/x-sqlite3", Category::Sqlite),
    ("svg", "image/svg+xml", Category::Svg),
    ("svgz", "image/svg+xml", Category::Svg),
    ("swf", "application/x-shockwave-flash", Category::Swf),
    ("tar", "application/x-tar", Category::Tar),
    ("tcl", "application/x-tcl", Category::Tcl),
    ("tif", "image/tiff", Category::Tif),
    ("tiff", "image/tiff", Category::Tif),
    ("tk", "application/x-tcl", Category::Tk),
    ("toml", "application/toml", Category::Toml),
    ("ts", "video/mp2t", Category::Ts),
    ("ttf", "application/font-sfnt", Category::Ttf),
    ("txt", "text/plain", Category::Txt),
    ("vcard", "text/vcard", Category::Vcard),
    ("vcf", "text/vcard", Category::Vcard),
    ("war", "application/java-archive", Category::War),
    ("wasm", "application/wasm", Category::Wasm),
    ("wav", "audio/x-wav", Category::Wav),
    ("wbmp", "image/vnd.wap.wbmp", Category::Wbmp),
    ("webm", "video/webm", Category::Webm),
    ("webp", "image/webp", Category::Webp),
    ("wml", "text/vnd.wap.wml", Category::Wml),
    ("wmlc", "application/vnd.wap.wmlc", Category::Wmlc),
    ("wmv", "video/x-ms-wmv", Category::Wmv),
    ("woff", "application/font-woff", Category::Woff),
    ("woff2", "application/font-woff", Category::Woff),
    ("xhtml", "application/xhtml+xml", Category::Html),
    ("xls", "application/vnd.ms-excel", Category::Xls),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Category::Xls,
    ),
    ("xml", "text/xml", Category::Xml),
    ("xpi", "application/x-xpinstall", Category::Xpi),
    ("xspf", "application/xspf+xml", Category::Xspf),
    ("xz", "application/x-xz", Category::Xz),
    ("yaml", "application/yaml", Category::Yaml),
    ("yml", "application/yaml", Category::Yaml),
    ("z", "application/x-compress", Category::Z),
    ("zip", "application/zip", Category::Zip),
];

/// Compares a lowercase table key with raw input as if the input were lowercased.
fn cmp_key(key: &str, input: &str) -> Ordering {
    key.bytes()
        .cmp(input.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Finds the entry for an extension that has already had its leading dot removed.
pub(crate) fn lookup(extension: &str) -> Option<&'static (&'static str, &'static str, Category)> {
    ENTRIES
        .binary_search_by(|(key, _, _)| cmp_key(key, extension))
        .ok()
        .map(|index| &ENTRIES[index])
}

/// Iterates over every registry entry in extension order.
pub fn iter() -> impl ExactSizeIterator<Item = MimeRecord> + Clone {
    ENTRIES
        .iter()
        .map(|&(extension, mime, category)| MimeRecord::known(mime, extension, category))
}

/// Returns the number of registry entries.
pub fn len() -> usize {
    ENTRIES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_sorted_and_unique() {
        for pair in ENTRIES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} !< {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn keys_are_normalized() {
        for (key, _, _) in ENTRIES {
            assert!(!key.is_empty());
            assert!(!key.starts_with('.'));
            assert!(key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn mime_strings_are_type_slash_subtype() {
        for (key, mime, _) in ENTRIES {
            let (top, sub) = mime.split_once('/').unwrap();
            assert!(!top.is_empty() && !sub.is_empty(), "{key}: {mime}");
            assert!(!mime.contains(';'), "{key}: {mime}");
        }
    }

    #[cfg(feature = "mime")]
    #[test]
    fn mime_strings_parse() {
        for (key, essence, _) in ENTRIES {
            assert!(essence.parse::<mime::Mime>().is_ok(), "{key}: {essence}");
        }
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(lookup("png").map(|e| e.1), Some("image/png"));
        assert_eq!(lookup("PNG").map(|e| e.1), Some("image/png"));
        assert_eq!(lookup("Mp3").map(|e| e.2), Some(Category::Mp3));
        assert_eq!(lookup("3GP").map(|e| e.0), Some("3gp"));
    }

    #[test]
    fn lookup_misses() {
        assert!(lookup("").is_none());
        assert!(lookup(".png").is_none());
        assert!(lookup("pn").is_none());
        assert!(lookup("pngg").is_none());
        assert!(lookup("tar.gz").is_none());
        assert!(lookup("a/b").is_none());
        assert!(lookup("ünï").is_none());
    }

    #[test]
    fn lookup_finds_every_entry() {
        for entry in ENTRIES {
            assert_eq!(lookup(entry.0), Some(entry));
        }
    }

    #[test]
    fn iter_matches_table() {
        assert_eq!(iter().len(), len());
        assert!(iter().all(|record| !record.is_fallback()));
    }
}
