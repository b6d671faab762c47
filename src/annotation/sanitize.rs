//! Pre-parse repair of region attribute strings
//!
//! The annotation tool occasionally exported JavaScript literals such as a bare
//! `undefined` where JSON expects a value. Each known defect is one entry in
//! [`BARE_TOKEN_SUBSTITUTIONS`]; the scanner replaces a token only when it stands
//! alone outside of string literals, so `"undefined"` or `undefined_ratio` stay intact.

use std::borrow::Cow;

/// A bare token and the JSON text that replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BareTokenSubstitution {
    /// Unquoted token as it appears in exported attributes
    pub token: &'static str,
    /// Valid JSON written in its place
    pub replacement: &'static str,
}

/// Known export defects, applied in order
pub const BARE_TOKEN_SUBSTITUTIONS: &[BareTokenSubstitution] = &[BareTokenSubstitution {
    token: "undefined",
    replacement: "\"undefined\"",
}];

/// Repair `raw` with the default substitution table
pub fn sanitize_attributes(raw: &str) -> Cow<'_, str> {
    sanitize_with(raw, BARE_TOKEN_SUBSTITUTIONS)
}

/// Repair `raw` with a caller-provided substitution table
///
/// Returns the input unchanged (borrowed) when no substitution applies.
pub fn sanitize_with<'a>(raw: &'a str, substitutions: &[BareTokenSubstitution]) -> Cow<'a, str> {
    let mut out = String::with_capacity(raw.len());
    let mut changed = false;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = raw.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if !is_token_char(c) {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(next_start, next)) = chars.peek() {
            if !is_token_char(next) {
                break;
            }
            end = next_start + next.len_utf8();
            chars.next();
        }

        let word = raw.get(start..end).unwrap_or_default();
        if let Some(substitution) = substitutions.iter().find(|s| s.token == word) {
            out.push_str(substitution.replacement);
            changed = true;
        } else {
            out.push_str(word);
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}

const fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
