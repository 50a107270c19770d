//! Payload decoding: base64 text to UTF-8 string
//!
//! Decoding is forgiving about noise and strict about structure. Bytes outside the
//! standard base64 alphabet (stray whitespace, a `\r` left over from a CRLF file, and so on)
//! are dropped before decoding. A `=` that cannot start padding is skipped, and the first
//! completed padding group ends the payload. Unpadded trailing symbols are still an error.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::preview::PreviewError;

/// Standard alphabet, canonical padding required, non-zero trailing bits tolerated
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

const PAD: u8 = b'=';

fn is_base64_data(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/')
}

/// Reduce `encoded` to data symbols plus the padding that terminates them
///
/// Walks the symbols in 4-character groups. Padding only counts from group position 2
/// onwards, and once it fills its group everything after it is ignored. Input that
/// runs out mid-group is returned unpadded so the engine rejects it.
fn normalize_symbols(encoded: &str) -> Vec<u8> {
    let mut symbols = Vec::with_capacity(encoded.len());
    let mut quad_pos = 0usize;
    let mut pads = 0usize;

    for b in encoded.bytes() {
        if b == PAD {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    symbols.extend(std::iter::repeat_n(PAD, 4 - quad_pos));
                    break;
                }
            }
            continue;
        }

        if !is_base64_data(b) {
            continue;
        }

        pads = 0;
        symbols.push(b);
        quad_pos = (quad_pos + 1) % 4;
    }

    symbols
}

/// Decode a base64 payload into UTF-8 text
///
/// # Examples
///
/// ```
/// use fzf_preview::decode::decode_payload;
///
/// assert_eq!(decode_payload("aGVsbG8=").unwrap(), "hello");
/// assert_eq!(decode_payload("aGVsbG8=\ttrailing").unwrap(), "hello");
/// assert!(decode_payload("!!!notbase64!!!").is_err());
/// ```
///
/// # Errors
///
/// Returns [`PreviewError::InvalidBase64`] for malformed input and
/// [`PreviewError::InvalidUtf8`] when the decoded bytes are not UTF-8.
pub fn decode_payload(encoded: &str) -> Result<String, PreviewError> {
    let symbols = normalize_symbols(encoded);
    let bytes = PAYLOAD_ENGINE.decode(&symbols)?;
    Ok(String::from_utf8(bytes)?)
}
