//! Temp file naming: sanitized prefix + millisecond timestamp + extension.

use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix used when none is configured (or the configured one sanitizes to nothing).
pub const DEFAULT_PREFIX: &str = "shared_file_";

/// Makes a configured prefix safe to use as the start of a file name.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading dots so results are never hidden or relative
/// - Limits length to 64 bytes, leaving room for the stamp and extension
pub fn sanitize_prefix(prefix: &str) -> String {
    const PREFIX_MAX: usize = 64;

    let mut out = String::with_capacity(prefix.len());
    let mut prev_underscore = false;
    for c in prefix.chars() {
        let c = if c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_start_matches('.');
    if trimmed.len() > PREFIX_MAX {
        let mut take = PREFIX_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

/// File name for `attempt` (0 = plain stamp, n = `-n` suffix).
pub fn candidate_name(prefix: &str, stamp_millis: u128, attempt: u32, ext: &str) -> String {
    if attempt == 0 {
        format!("{prefix}{stamp_millis}{ext}")
    } else {
        format!("{prefix}{stamp_millis}-{attempt}{ext}")
    }
}

/// Milliseconds since the Unix epoch (0 if the clock is before it).
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_untouched() {
        assert_eq!(sanitize_prefix(DEFAULT_PREFIX), DEFAULT_PREFIX);
    }

    #[test]
    fn separators_and_spaces() {
        assert_eq!(sanitize_prefix("../my share/x"), "_my_share_x");
        assert_eq!(sanitize_prefix("a\\b\tc"), "a_b_c");
    }

    #[test]
    fn leading_dots_trimmed() {
        assert_eq!(sanitize_prefix("..hidden_"), "hidden_");
        assert_eq!(sanitize_prefix("..."), "");
    }

    #[test]
    fn long_prefix_truncated() {
        let long = "p".repeat(200);
        assert_eq!(sanitize_prefix(&long).len(), 64);
    }

    #[test]
    fn candidate_names() {
        assert_eq!(candidate_name("shared_file_", 42, 0, ".zip"), "shared_file_42.zip");
        assert_eq!(candidate_name("shared_file_", 42, 3, ""), "shared_file_42-3");
    }
}
