//! The closed set of file kinds the registry classifies into.
//!
//! Every registry entry carries exactly one [`Category`], and every
//! [`Category`] is reached by at least one entry. Several extensions can share
//! a tag: `jpg` and `jpeg` are both [`Category::Jpg`], `htm`, `html`, `shtml`
//! and `xhtml` are all [`Category::Html`].
//!
//! Tags have a stable textual name ([`Category::as_str`]) used for display and
//! serialization. Names follow the registry's historical spelling, so most are
//! the lowercase extension (`"html"`, `"mp3"`) while a few are camel case
//! (`"sevenZ"`, `"threeGp"`).
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::Category;
//!
//! assert_eq!(Category::SevenZ.as_str(), "sevenZ");
//! assert_eq!("threeGp".parse::<Category>(), Ok(Category::ThreeGp));
//! assert!(Category::Jpg.extensions().eq(["jpeg", "jpg"]));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCategoryError;
use crate::registry;

/// A file kind tag.
///
/// The enumeration is exhaustive on purpose so that `match` over a category is
/// checked by the compiler. [`Category::Bin`] doubles as the tag of every
/// extension the registry does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// AAC audio.
    Aac,
    /// Adobe Illustrator artwork.
    Ai,
    /// Adaptive Multi-Rate audio, narrow and wide band.
    Amr,
    /// Unix `ar` archive.
    Ar,
    /// Advanced Systems Format container.
    Asf,
    /// Advanced Stream Redirector playlist.
    Asx,
    /// Atom syndication feed.
    Atom,
    /// AVI video.
    Avi,
    /// AV1 image.
    Avif,
    /// Opaque binary data; also the tag of every unrecognized extension.
    Bin,
    /// Windows bitmap.
    Bmp,
    /// bzip2 compressed data.
    Bz2,
    /// Windows cabinet archive.
    Cab,
    /// Cocoa script.
    Cco,
    /// Canon raw image.
    Cr2,
    /// X.509 certificate.
    Crt,
    /// Chrome extension package.
    Crx,
    /// Cascading style sheet.
    Css,
    /// Comma-separated values.
    Csv,
    /// Debian package.
    Deb,
    /// DER-encoded X.509 certificate.
    Der,
    /// Windows dynamic library.
    Dll,
    /// Apple disk image.
    Dmg,
    /// Word document, legacy or OOXML.
    Doc,
    /// Java enterprise archive.
    Ear,
    /// Embedded OpenType font.
    Eot,
    /// Encapsulated PostScript.
    Eps,
    /// EPUB electronic book.
    Epub,
    /// Windows executable.
    Exe,
    /// FLAC lossless audio.
    Flac,
    /// Free Lossless Image Format.
    Flif,
    /// Flash video.
    Flv,
    /// GIF image.
    Gif,
    /// gzip compressed data.
    Gz,
    /// HEIF/HEIC image.
    Heic,
    /// BinHex archive.
    Hqx,
    /// HTML component.
    Htc,
    /// HTML or XHTML document.
    Html,
    /// iCalendar data.
    Ical,
    /// Windows icon.
    Ico,
    /// Raw disk image.
    Img,
    /// ISO 9660 disc image.
    Iso,
    /// Java application descriptor.
    Jad,
    /// Java archive.
    Jar,
    /// Java archive diff.
    Jardiff,
    /// JPEG Network Graphics.
    Jng,
    /// Java Network Launch Protocol file.
    Jnlp,
    /// JPEG image.
    Jpg,
    /// JavaScript source.
    Js,
    /// JSON document.
    Json,
    /// JPEG XL image.
    Jxl,
    /// JPEG XR image.
    Jxr,
    /// Keyhole Markup Language.
    Kml,
    /// Zipped Keyhole Markup Language.
    Kmz,
    /// lzip compressed data.
    Lz,
    /// HLS playlist.
    M3u8,
    /// MPEG-4 audio.
    M4a,
    /// MPEG-4 video, Apple variant.
    M4v,
    /// Markdown text.
    Md,
    /// MIDI sequence.
    Midi,
    /// Matroska video.
    Mkv,
    /// MathML document.
    Mml,
    /// Multiple-image Network Graphics.
    Mng,
    /// QuickTime movie.
    Mov,
    /// MP3 audio.
    Mp3,
    /// MPEG-4 video.
    Mp4,
    /// MPEG-1/2 video.
    Mpg,
    /// Windows installer package.
    Msi,
    /// Windows installer merge module.
    Msm,
    /// Windows installer patch.
    Msp,
    /// Material Exchange Format.
    Mxf,
    /// NES ROM image.
    Nes,
    /// Ogg audio.
    Ogg,
    /// Ogg video.
    Ogv,
    /// Opus audio.
    Opus,
    /// OpenType font.
    Otf,
    /// Palm database.
    Pdb,
    /// PDF document.
    Pdf,
    /// PEM-encoded certificate.
    Pem,
    /// Perl script.
    Pl,
    /// Perl module.
    Pm,
    /// PNG image.
    Png,
    /// PowerPoint presentation, legacy or OOXML.
    Ppt,
    /// Palm resource.
    Prc,
    /// PostScript document.
    Ps,
    /// Photoshop document.
    Psd,
    /// RealAudio.
    Ra,
    /// RAR archive.
    Rar,
    /// Red Hat package.
    Rpm,
    /// RSS feed.
    Rss,
    /// Rich Text Format.
    Rtf,
    /// Makeself self-extracting archive.
    Run,
    /// Self-extracting archive.
    Sea,
    /// 7-Zip archive.
    SevenZ,
    /// StuffIt archive.
    Sit,
    /// SQLite database.
    Sqlite,
    /// SVG image, plain or gzipped.
    Svg,
    /// Shockwave Flash.
    Swf,
    /// Tape archive.
    Tar,
    /// Tcl script.
    Tcl,
    /// 3GPP video.
    ThreeGp,
    /// TIFF image.
    Tif,
    /// Tk script.
    Tk,
    /// TOML document.
    Toml,
    /// MPEG transport stream.
    Ts,
    /// TrueType font.
    Ttf,
    /// Plain text.
    Txt,
    /// vCard contact.
    Vcard,
    /// Java web archive.
    War,
    /// WebAssembly module.
    Wasm,
    /// WAVE audio.
    Wav,
    /// Wireless bitmap.
    Wbmp,
    /// WebM video.
    Webm,
    /// WebP image.
    Webp,
    /// Wireless Markup Language.
    Wml,
    /// Compiled WML.
    Wmlc,
    /// Windows Media video.
    Wmv,
    /// Web Open Font Format.
    Woff,
    /// Excel workbook, legacy or OOXML.
    Xls,
    /// XML document.
    Xml,
    /// Mozilla extension package.
    Xpi,
    /// XSPF playlist.
    Xspf,
    /// xz compressed data.
    Xz,
    /// YAML document.
    Yaml,
    /// Unix `compress` data.
    Z,
    /// ZIP archive.
    Zip,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 126] = [
        Category::Aac,
        Category::Ai,
        Category::Amr,
        Category::Ar,
        Category::Asf,
        Category::Asx,
        Category::Atom,
        Category::Avi,
        Category::Avif,
        Category::Bin,
        Category::Bmp,
        Category::Bz2,
        Category::Cab,
        Category::Cco,
        Category::Cr2,
        Category::Crt,
        Category::Crx,
        Category::Css,
        Category::Csv,
        Category::Deb,
        Category::Der,
        Category::Dll,
        Category::Dmg,
        Category::Doc,
        Category::Ear,
        Category::Eot,
        Category::Eps,
        Category::Epub,
        Category::Exe,
        Category::Flac,
        Category::Flif,
        Category::Flv,
        Category::Gif,
        Category::Gz,
        Category::Heic,
        Category::Hqx,
        Category::Htc,
        Category::Html,
        Category::Ical,
        Category::Ico,
        Category::Img,
        Category::Iso,
        Category::Jad,
        Category::Jar,
        Category::Jardiff,
        Category::Jng,
        Category::Jnlp,
        Category::Jpg,
        Category::Js,
        Category::Json,
        Category::Jxl,
        Category::Jxr,
        Category::Kml,
        Category::Kmz,
        Category::Lz,
        Category::M3u8,
        Category::M4a,
        Category::M4v,
        Category::Md,
        Category::Midi,
        Category::Mkv,
        Category::Mml,
        Category::Mng,
        Category::Mov,
        Category::Mp3,
        Category::Mp4,
        Category::Mpg,
        Category::Msi,
        Category::Msm,
        Category::Msp,
        Category::Mxf,
        Category::Nes,
        Category::Ogg,
        Category::Ogv,
        Category::Opus,
        Category::Otf,
        Category::Pdb,
        Category::Pdf,
        Category::Pem,
        Category::Pl,
        Category::Pm,
        Category::Png,
        Category::Ppt,
        Category::Prc,
        Category::Ps,
        Category::Psd,
        Category::Ra,
        Category::Rar,
        Category::Rpm,
        Category::Rss,
        Category::Rtf,
        Category::Run,
        Category::Sea,
        Category::SevenZ,
        Category::Sit,
        Category::Sqlite,
        Category::Svg,
        Category::Swf,
        Category::Tar,
        Category::Tcl,
        Category::ThreeGp,
        Category::Tif,
        Category::Tk,
        Category::Toml,
        Category::Ts,
        Category::Ttf,
        Category::Txt,
        Category::Vcard,
        Category::War,
        Category::Wasm,
        Category::Wav,
        Category::Wbmp,
        Category::Webm,
        Category::Webp,
        Category::Wml,
        Category::Wmlc,
        Category::Wmv,
        Category::Woff,
        Category::Xls,
        Category::Xml,
        Category::Xpi,
        Category::Xspf,
        Category::Xz,
        Category::Yaml,
        Category::Z,
        Category::Zip,
    ];

    /// Returns the stable name of this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Aac => "aac",
            Category::Ai => "ai",
            Category::Amr => "amr",
            Category::Ar => "ar",
            Category::Asf => "asf",
            Category::Asx => "asx",
            Category::Atom => "atom",
            Category::Avi => "avi",
            Category::Avif => "avif",
            Category::Bin => "bin",
            Category::Bmp => "bmp",
            Category::Bz2 => "bz2",
            Category::Cab => "cab",
            Category::Cco => "cco",
            Category::Cr2 => "cr2",
            Category::Crt => "crt",
            Category::Crx => "crx",
            Category::Css => "css",
            Category::Csv => "csv",
            Category::Deb => "deb",
            Category::Der => "der",
            Category::Dll => "dll",
            Category::Dmg => "dmg",
            Category::Doc => "doc",
            Category::Ear => "ear",
            Category::Eot => "eot",
            Category::Eps => "eps",
            Category::Epub => "epub",
            Category::Exe => "exe",
            Category::Flac => "flac",
            Category::Flif => "flif",
            Category::Flv => "flv",
            Category::Gif => "gif",
            Category::Gz => "gz",
            Category::Heic => "heic",
            Category::Hqx => "hqx",
            Category::Htc => "htc",
            Category::Html => "html",
            Category::Ical => "ical",
            Category::Ico => "ico",
            Category::Img => "img",
            Category::Iso => "iso",
            Category::Jad => "jad",
            Category::Jar => "jar",
            Category::Jardiff => "jardiff",
            Category::Jng => "jng",
            Category::Jnlp => "jnlp",
            Category::Jpg => "jpg",
            Category::Js => "js",
            Category::Json => "json",
            Category::Jxl => "jxl",
            Category::Jxr => "jxr",
            Category::Kml => "kml",
            Category::Kmz => "kmz",
            Category::Lz => "lz",
            Category::M3u8 => "m3u8",
            Category::M4a => "m4a",
            Category::M4v => "m4v",
            Category::Md => "md",
            Category::Midi => "midi",
            Category::Mkv => "mkv",
            Category::Mml => "mml",
            Category::Mng => "mng",
            Category::Mov => "mov",
            Category::Mp3 => "mp3",
            Category::Mp4 => "mp4",
            Category::Mpg => "mpg",
            Category::Msi => "msi",
            Category::Msm => "msm",
            Category::Msp => "msp",
            Category::Mxf => "mxf",
            Category::Nes => "nes",
            Category::Ogg => "ogg",
            Category::Ogv => "ogv",
            Category::Opus => "opus",
            Category::Otf => "otf",
            Category::Pdb => "pdb",
            Category::Pdf => "pdf",
            Category::Pem => "pem",
            Category::Pl => "pl",
            Category::Pm => "pm",
            Category::Png => "png",
            Category::Ppt => "ppt",
            Category::Prc => "prc",
            Category::Ps => "ps",
            Category::Psd => "psd",
            Category::Ra => "ra",
            Category::Rar => "rar",
            Category::Rpm => "rpm",
            Category::Rss => "rss",
            Category::Rtf => "rtf",
            Category::Run => "run",
            Category::Sea => "sea",
            Category::SevenZ => "sevenZ",
            Category::Sit => "sit",
            Category::Sqlite => "sqlite",
            Category::Svg => "svg",
            Category::Swf => "swf",
            Category::Tar => "tar",
            Category::Tcl => "tcl",
            Category::ThreeGp => "threeGp",
            Category::Tif => "tif",
            Category::Tk => "tk",
            Category::Toml => "toml",
            Category::Ts => "ts",
            Category::Ttf => "ttf",
            Category::Txt => "txt",
            Category::Vcard => "vcard",
            Category::War => "war",
            Category::Wasm => "wasm",
            Category::Wav => "wav",
            Category::Wbmp => "wbmp",
            Category::Webm => "webm",
            Category::Webp => "webp",
            Category::Wml => "wml",
            Category::Wmlc => "wmlc",
            Category::Wmv => "wmv",
            Category::Woff => "woff",
            Category::Xls => "xls",
            Category::Xml => "xml",
            Category::Xpi => "xpi",
            Category::Xspf => "xspf",
            Category::Xz => "xz",
            Category::Yaml => "yaml",
            Category::Z => "z",
            Category::Zip => "zip",
        }
    }

    /// Iterates over the registry extensions mapped to this tag, in sorted order.
    ///
    /// [`Category::Bin`] yields only the extensions listed in the registry
    /// (`bin`), not the unknown extensions that fall back to it.
    pub fn extensions(self) -> impl Iterator<Item = &'static str> {
        registry::ENTRIES
            .iter()
            .filter(move |(_, _, category)| *category == self)
            .map(|(extension, _, _)| *extension)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses a tag name as produced by [`Category::as_str`]. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s {
            "aac" => Category::Aac,
            "ai" => Category::Ai,
            "amr" => Category::Amr,
            "ar" => Category::Ar,
            "asf" => Category::Asf,
            "asx" => Category::Asx,
            "atom" => Category::Atom,
            "avi" => Category::Avi,
            "avif" => Category::Avif,
            "bin" => Category::Bin,
            "bmp" => Category::Bmp,
            "bz2" => Category::Bz2,
            "cab" => Category::Cab,
            "cco" => Category::Cco,
            "cr2" => Category::Cr2,
            "crt" => Category::Crt,
            "crx" => Category::Crx,
            "css" => Category::Css,
            "csv" => Category::Csv,
            "deb" => Category::Deb,
            "der" => Category::Der,
            "dll" => Category::Dll,
            "dmg" => Category::Dmg,
            "doc" => Category::Doc,
            "ear" => Category::Ear,
            "eot" => Category::Eot,
            "eps" => Category::Eps,
            "epub" => Category::Epub,
            "exe" => Category::Exe,
            "flac" => Category::Flac,
            "flif" => Category::Flif,
            "flv" => Category::Flv,
            "gif" => Category::Gif,
            "gz" => Category::Gz,
            "heic" => Category::Heic,
            "hqx" => Category::Hqx,
            "htc" => Category::Htc,
            "html" => Category::Html,
            "ical" => Category::Ical,
            "ico" => Category::Ico,
            "img" => Category::Img,
            "iso" => Category::Iso,
            "jad" => Category::Jad,
            "jar" => Category::Jar,
            "jardiff" => Category::Jardiff,
            "jng" => Category::Jng,
            "jnlp" => Category::Jnlp,
            "jpg" => Category::Jpg,
            "js" => Category::Js,
            "json" => Category::Json,
            "jxl" => Category::Jxl,
            "jxr" => Category::Jxr,
            "kml" => Category::Kml,
            "kmz" => Category::Kmz,
            "lz" => Category::Lz,
            "m3u8" => Category::M3u8,
            "m4a" => Category::M4a,
            "m4v" => Category::M4v,
            "md" => Category::Md,
            "midi" => Category::Midi,
            "mkv" => Category::Mkv,
            "mml" => Category::Mml,
            "mng" => Category::Mng,
            "mov" => Category::Mov,
            "mp3" => Category::Mp3,
            "mp4" => Category::Mp4,
            "mpg" => Category::Mpg,
            "msi" => Category::Msi,
            "msm" => Category::Msm,
            "msp" => Category::Msp,
            "mxf" => Category::Mxf,
            "nes" => Category::Nes,
            "ogg" => Category::Ogg,
            "ogv" => Category::Ogv,
            "opus" => Category::Opus,
            "otf" => Category::Otf,
            "pdb" => Category::Pdb,
            "pdf" => Category::Pdf,
            "pem" => Category::Pem,
            "pl" => Category::Pl,
            "pm" => Category::Pm,
            "png" => Category::Png,
            "ppt" => Category::Ppt,
            "prc" => Category::Prc,
            "ps" => Category::Ps,
            "psd" => Category::Psd,
            "ra" => Category::Ra,
            "rar" => Category::Rar,
            "rpm" => Category::Rpm,
            "rss" => Category::Rss,
            "rtf" => Category::Rtf,
            "run" => Category::Run,
            "sea" => Category::Sea,
            "sevenZ" => Category::SevenZ,
            "sit" => Category::Sit,
            "sqlite" => Category::Sqlite,
            "svg" => Category::Svg,
            "swf" => Category::Swf,
            "tar" => Category::Tar,
            "tcl" => Category::Tcl,
            "threeGp" => Category::ThreeGp,
            "tif" => Category::Tif,
            "tk" => Category::Tk,
            "toml" => Category::Toml,
            "ts" => Category::Ts,
            "ttf" => Category::Ttf,
            "txt" => Category::Txt,
            "vcard" => Category::Vcard,
            "war" => Category::War,
            "wasm" => Category::Wasm,
            "wav" => Category::Wav,
            "wbmp" => Category::Wbmp,
            "webm" => Category::Webm,
            "webp" => Category::Webp,
            "wml" => Category::Wml,
            "wmlc" => Category::Wmlc,
            "wmv" => Category::Wmv,
            "woff" => Category::Woff,
            "xls" => Category::Xls,
            "xml" => Category::Xml,
            "xpi" => Category::Xpi,
            "xspf" => Category::Xspf,
            "xz" => Category::Xz,
            "yaml" => Category::Yaml,
            "z" => Category::Z,
            "zip" => Category::Zip,
            _ => return Err(ParseCategoryError::new(s)),
        };
        Ok(category)
    }
}
