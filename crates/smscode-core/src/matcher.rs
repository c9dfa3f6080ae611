//! Keyword filter and digit extraction over a single message body.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ExtractError;

/// Verification code / check code / dynamic code / SMS code.
pub const KEYWORDS: [&str; 4] = ["验证码", "校验码", "动态码", "短信码"];

static KEYWORD_PATTERN: OnceLock<Regex> = OnceLock::new();
static CODE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn keyword_pattern() -> &'static Regex {
    KEYWORD_PATTERN.get_or_init(|| {
        Regex::new(&KEYWORDS.join("|")).expect("keyword alternation is a valid pattern")
    })
}

// `\d` is Unicode-aware in the regex crate; codes are ASCII only.
fn code_pattern() -> &'static Regex {
    CODE_PATTERN
        .get_or_init(|| Regex::new(r"[0-9]{4,6}").expect("digit-run pattern is valid"))
}

/// True when `text` contains any of [`KEYWORDS`].
pub fn has_keyword(text: &str) -> bool {
    keyword_pattern().is_match(text)
}

/// Pull the verification code out of a message body.
///
/// The keyword check runs first; the code is then the leftmost match of
/// `[0-9]{4,6}`, borrowed verbatim from `text`. A longer digit run yields its
/// first six digits.
pub fn find_code(text: &str) -> Result<&str, ExtractError> {
    if !has_keyword(text) {
        return Err(ExtractError::NoKeywordMatch);
    }
    code_pattern()
        .find(text)
        .map(|m| m.as_str())
        .ok_or(ExtractError::NoDigitsFound)
}
