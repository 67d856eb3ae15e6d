//! Parser for the textual color notations accepted in deep-link fragments.
//!
//! Recognizes three grammars and decodes each into the canonical HSV
//! representation:
//!
//! - hex: optional leading `#`, then exactly 3 or 6 hex digits
//! - `rgb(<int>, <int>, <int>)`, case-insensitive token, whitespace-tolerant
//! - `hsl(<int>[º]?, <int>[%]?, <int>[%]?)`, case-insensitive token,
//!   degree and percent suffixes optional
//!
//! Validation is pure format matching; nothing here depends on a rendering
//! surface. Anything else is `ColorError::UnrecognizedFormat`, and callers
//! fall back to `Hsv::default()` instead of propagating the failure.

use crate::color::{hsl_to_hsv, rgb_to_hsv, Hsl, Hsv, Rgb};
use crate::error::ColorError;

/// Decodes a raw text token (URL fragment, user-pasted string) into HSV.
///
/// A leading `#` is stripped before matching, so both `#0f0` and the bare
/// fragment form `0f0` decode as hex. Out-of-range components are not hard
/// failures: `rgb()` channels clamp to 255, and `hsl()` values are wrapped
/// (hue) or clamped (percent) by the conversion itself.
pub fn parse_color_string(text: &str) -> Result<Hsv, ColorError> {
    let text = text.trim();
    let bare = text.strip_prefix('#').unwrap_or(text);

    if (bare.len() == 3 || bare.len() == 6) && bare.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(rgb_to_hsv(Rgb::from_hex(bare)?));
    }

    if starts_with_token(text, "rgb") {
        let [r, g, b] = components(text, "rgb", None)?;
        return Ok(rgb_to_hsv(Rgb {
            r: r.min(255) as u8,
            g: g.min(255) as u8,
            b: b.min(255) as u8,
        }));
    }

    if starts_with_token(text, "hsl") {
        let [h, s, l] = components(text, "hsl", Some(['º', '%', '%']))?;
        return Ok(hsl_to_hsv(Hsl {
            h: f64::from(h),
            s: f64::from(s),
            l: f64::from(l),
        }));
    }

    Err(ColorError::UnrecognizedFormat(text.to_string()))
}

/// Case-insensitive prefix check for the `rgb`/`hsl` function tokens.
fn starts_with_token(text: &str, token: &str) -> bool {
    // Byte-wise comparison: a &str slice could split a multibyte character.
    text.len() >= token.len()
        && text.as_bytes()[..token.len()].eq_ignore_ascii_case(token.as_bytes())
}

/// Extracts the three integer components of `token(a, b, c)`.
///
/// `suffixes` gives the optional trailing marker allowed on each component
/// (degree sign on hue, percent on saturation/lightness); `None` allows bare
/// integers only.
fn components(text: &str, token: &str, suffixes: Option<[char; 3]>) -> Result<[u32; 3], ColorError> {
    let malformed = || ColorError::InvalidColor(format!("malformed {token}() color: '{text}'"));

    let args = text[token.len()..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(&malformed)?;

    let mut parts = args.split(',');
    let mut out = [0u32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let part = parts.next().ok_or_else(&malformed)?.trim();
        let digits = match suffixes {
            Some(marks) => part.strip_suffix(marks[i]).unwrap_or(part),
            None => part,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *slot = digits.parse().map_err(|_| malformed())?;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(out)
}
