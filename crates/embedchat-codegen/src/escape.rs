//! Interpolation escaping for the widget bundle template.
//!
//! Every value that lands inside the emitted script passes through
//! [`escape_js`]; values in markup positions go through
//! [`embedchat_core::format::escape_html`]. These are the only two
//! chokepoints — the template itself never sees a raw caller string.

/// Escapes a value for use inside a double-quoted JavaScript string literal.
///
/// `<` becomes `\u003C` so that agent-controlled text can never form a
/// `</script>` sequence and terminate the inline script early.
pub fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_backslashes() {
        assert_eq!(escape_js(r#"a"b\c'd"#), r#"a\"b\\c\'d"#);
    }

    #[test]
    fn test_newlines_collapse_to_escapes() {
        assert_eq!(escape_js("a\nb\r\tc"), r"a\nb\r\tc");
    }

    #[test]
    fn test_script_breakout_neutralized() {
        let escaped = escape_js("</script><script>alert(1)</script>");
        assert!(!escaped.contains("</script>"));
        assert!(escaped.contains("\\u003C/script>"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_js("Acme Support 24/7"), "Acme Support 24/7");
    }
}
