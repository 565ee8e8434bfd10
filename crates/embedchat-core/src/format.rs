//! Message markup rendering.
//!
//! Chat messages carry lightweight markup: `**bold**`, literal newlines, and
//! crude numbered/bulleted lines. `format_message` turns that into the HTML
//! fragment both widget implementations display. The generated standalone
//! script embeds a JavaScript twin of this function; the two must stay
//! behaviorally identical, which the tests here pin with shared fixtures.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"));

static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.\s|-\s)").expect("valid list pattern"));

/// Escapes text for interpolation into an HTML fragment.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders message markup to an HTML fragment.
///
/// Transform order (fixed — the JS twin applies the same steps):
/// 1. HTML-escape the raw text.
/// 2. `**x**` becomes `<strong>x</strong><br>` (emphasis acts as a heading,
///    breaking the line after it).
/// 3. Lines starting with `N. ` or `- ` get a `<br>` prefix.
/// 4. Remaining newlines become `<br>`.
///
/// Pure function of its input; calling it twice yields identical output.
pub fn format_message(content: &str) -> String {
    let escaped = escape_html(content);
    let bolded = BOLD.replace_all(&escaped, "<strong>$1</strong><br>");
    bolded
        .split('\n')
        .map(|line| {
            if LIST_LINE.is_match(line) {
                format!("<br>{line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_bold_and_newline() {
        let out = format_message("**Hi** there\nLine2");
        assert_eq!(out, "<strong>Hi</strong><br> there<br>Line2");
    }

    #[test]
    fn test_pure_function() {
        let input = "**Hi** there\nLine2";
        assert_eq!(format_message(input), format_message(input));
    }

    #[test]
    fn test_numbered_and_dashed_lines_get_breaks() {
        let out = format_message("Steps:\n1. first\n- second");
        assert_eq!(out, "Steps:<br><br>1. first<br><br>- second");
    }

    #[test]
    fn test_list_marker_mid_line_is_untouched() {
        // Only line-leading markers trigger the list break.
        assert_eq!(format_message("see 1. below"), "see 1. below");
        assert_eq!(format_message("a - b"), "a - b");
    }

    #[test]
    fn test_markup_in_user_text_is_escaped_before_formatting() {
        let out = format_message("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unclosed_bold_left_verbatim() {
        assert_eq!(format_message("**dangling"), "**dangling");
    }

    #[test]
    fn test_multiple_bold_runs() {
        assert_eq!(
            format_message("**a** x **b**"),
            "<strong>a</strong><br> x <strong>b</strong><br>"
        );
    }
}
