//! Markdown delimiter stripping for descriptive text fields.
//!
//! Attraction descriptions arrive with light markdown formatting that the
//! card views render as plain text. [`strip_markdown`] removes a fixed
//! set of control sequences via order-sensitive passes (heading, then
//! bold-italic before bold before italic, then strikethrough and inline
//! code), each pass stripping the delimiter characters only and
//! preserving the inner text.

use std::sync::LazyLock;

use regex::Regex;

/// `# Heading` markers at line start (the marker and its trailing space).
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").expect("valid regex"));

/// `***bold italic***` delimiters.
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*]+)\*\*\*").expect("valid regex"));

/// `**bold**` delimiters.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));

/// `*italic*` delimiters.
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));

/// `~~strikethrough~~` delimiters.
static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~]+)~~").expect("valid regex"));

/// `` `inline code` `` delimiters.
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

/// Strip markdown control sequences from `text`, preserving inner text.
///
/// Text containing no delimiters is returned unchanged (including the
/// empty string). The pass order matters: bold-italic must be stripped
/// before bold, and bold before italic, so nested asterisk runs collapse
/// correctly.
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let pass = HEADING_RE.replace_all(text, "");
    let pass = BOLD_ITALIC_RE.replace_all(&pass, "$1");
    let pass = BOLD_RE.replace_all(&pass, "$1");
    let pass = ITALIC_RE.replace_all(&pass, "$1");
    let pass = STRIKETHROUGH_RE.replace_all(&pass, "$1");
    let pass = INLINE_CODE_RE.replace_all(&pass, "$1");
    pass.into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_unchanged() {
        let text = "The Lingaraj temple dates to the 11th century.";
        assert_eq!(strip_markdown(text), text);
    }

    #[test]
    fn empty_input_unchanged() {
        assert_eq!(strip_markdown(""), "");
    }

    #[test]
    fn strips_heading_markers() {
        assert_eq!(strip_markdown("# History"), "History");
        assert_eq!(strip_markdown("### Visiting hours"), "Visiting hours");
    }

    #[test]
    fn heading_marker_only_at_line_start() {
        assert_eq!(strip_markdown("rated 5 # stars"), "rated 5 # stars");
    }

    #[test]
    fn strips_bold() {
        assert_eq!(strip_markdown("a **grand** temple"), "a grand temple");
    }

    #[test]
    fn strips_italic() {
        assert_eq!(strip_markdown("the *Ekamra* field"), "the Ekamra field");
    }

    #[test]
    fn strips_bold_italic_before_bold() {
        assert_eq!(strip_markdown("***very old***"), "very old");
    }

    #[test]
    fn strips_strikethrough() {
        assert_eq!(strip_markdown("~~closed~~ open daily"), "closed open daily");
    }

    #[test]
    fn strips_inline_code() {
        assert_eq!(strip_markdown("take bus `21A` from the station"), "take bus 21A from the station");
    }

    #[test]
    fn multiline_headings() {
        let text = "# Overview\nA temple.\n## Hours\n6am-8pm";
        assert_eq!(strip_markdown(text), "Overview\nA temple.\nHours\n6am-8pm");
    }

    #[test]
    fn mixed_sequences_in_one_string() {
        assert_eq!(
            strip_markdown("# Lingaraj\n**Built** in the *11th* century"),
            "Lingaraj\nBuilt in the 11th century"
        );
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_markdown("**bold** and *italic*");
        assert_eq!(strip_markdown(&once), once);
    }
}
