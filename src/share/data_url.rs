//! `data:image/png;base64,...` encoding of canvas snapshots.

use super::types::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix of every snapshot produced by [`encode_png`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Wraps PNG bytes into a data URL.
pub fn encode_png(png: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    out.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut out);
    out
}

/// Extracts the PNG bytes from a data URL or a bare base64 string.
///
/// Spaces in the payload are read back as `+`: query-string decoding turns an
/// unescaped `+` into a space, and base64 never contains spaces itself.
pub fn decode(source: &str) -> Result<Vec<u8>, DecodeError> {
    if source.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    // Only line breaks are trimmed; a trailing space may be an unescaped '+'.
    let source = source.trim_matches(|c| matches!(c, '\r' | '\n' | '\t'));

    let payload = match source.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| DecodeError::InvalidDataUrl("missing ',' separator".into()))?;
            let mime = header.strip_suffix(";base64").ok_or_else(|| {
                DecodeError::InvalidDataUrl("only base64 payloads are supported".into())
            })?;
            if !mime.eq_ignore_ascii_case("image/png") {
                return Err(DecodeError::UnsupportedMime(mime.to_string()));
            }
            payload
        }
        None => source,
    };

    let cleaned: String = payload
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = STANDARD.decode(cleaned.as_bytes())?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(DecodeError::NotPng);
    }
    Ok(bytes)
}
