use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Decode the quoted value that follows the key's `:`.
///
/// The value starts after the first `"` and ends at the next unescaped `"`.
/// A backslash makes the next character literal, whatever it is.
pub(super) fn extract_value(after_colon: &str, diags: &mut Diagnostics) -> String {
    let Some(open) = after_colon.find('"') else {
        diags.report(DiagnosticKind::MissingValue);
        return String::new();
    };

    let mut out = String::new();
    let mut escape = false;
    for ch in after_colon[open + 1..].chars() {
        if escape {
            out.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' => return out,
            _ => out.push(ch),
        }
    }
    diags.report(DiagnosticKind::UnterminatedValue);
    out
}

/// Parse an integer field, reporting and substituting 0 when it is not a number.
pub(super) fn parse_int_field(raw: &str, field: &'static str, diags: &mut Diagnostics) -> i32 {
    if let Ok(v) = raw.trim().parse::<i32>() {
        return v;
    }
    diags.report(DiagnosticKind::InvalidInteger {
        field,
        raw: raw.to_string(),
    });
    0
}

/// Split on single spaces, dropping the empty pieces runs of spaces leave behind.
pub(super) fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(' ').filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_quotes_are_literal() {
        let mut diags = Diagnostics::new();
        let v = extract_value(r#""He said \"hi\"""#, &mut diags);
        assert_eq!(v, r#"He said "hi""#);
        assert!(diags.is_empty());
    }

    #[test]
    fn backslash_escapes_any_character_once() {
        let mut diags = Diagnostics::new();
        assert_eq!(extract_value(r#" "a\\b\nc" trailing"#, &mut diags), r"a\bnc");
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_quotes_are_reported() {
        let mut diags = Diagnostics::new();
        assert_eq!(extract_value(" bare", &mut diags), "");
        assert_eq!(extract_value(r#" "open ended"#, &mut diags), "open ended");
        let kinds: Vec<_> = diags.kinds().cloned().collect();
        assert_eq!(kinds, vec![DiagnosticKind::MissingValue, DiagnosticKind::UnterminatedValue]);
    }

    #[test]
    fn bad_integer_becomes_zero() {
        let mut diags = Diagnostics::new();
        assert_eq!(parse_int_field("-12", "viewport x", &mut diags), -12);
        assert_eq!(parse_int_field("twelve", "viewport x", &mut diags), 0);
        assert_eq!(diags.len(), 1);
    }
}
