//! Input decoding using chardetng and `encoding_rs`.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use simdutf8::basic::from_utf8;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (EF BB BF).
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Text decoded from raw input bytes.
#[derive(Debug, Clone)]
pub struct Decoded<'a> {
    /// UTF-8 text, borrowed when the input already was UTF-8.
    pub text: Cow<'a, str>,
    /// Encoding the input was read as.
    pub encoding: &'static Encoding,
    /// Whether a byte order mark was stripped.
    pub had_bom: bool,
}

impl Decoded<'_> {
    /// Returns true if the input had to be transcoded to UTF-8.
    pub fn was_transcoded(&self) -> bool {
        self.encoding != UTF_8
    }
}

/// Decode raw bytes to UTF-8 text.
///
/// UTF-16 is recognized by its BOM. A UTF-8 BOM is stripped. Input that is not
/// valid UTF-8 is handed to chardetng, which covers the common legacy
/// encodings (Windows-125x, ISO-8859, Shift_JIS, GBK, ...). Undecodable bytes
/// become U+FFFD rather than failing the load.
pub fn decode(data: &[u8]) -> Decoded<'_> {
    if data.starts_with(&[0xFF, 0xFE]) || data.starts_with(&[0xFE, 0xFF]) {
        let encoding = if data[0] == 0xFF { UTF_16LE } else { UTF_16BE };
        let (text, _) = encoding.decode_with_bom_removal(data);
        return Decoded {
            text,
            encoding,
            had_bom: true,
        };
    }

    let had_bom = has_utf8_bom(data);
    let data = skip_bom(data);

    if let Ok(text) = from_utf8(data) {
        return Decoded {
            text: Cow::Borrowed(text),
            encoding: UTF_8,
            had_bom,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, true);

    let text = if encoding == UTF_8 {
        String::from_utf8_lossy(data)
    } else {
        encoding.decode_without_bom_handling(data).0
    };

    Decoded {
        text,
        encoding,
        had_bom,
    }
}
