//! Cell escaping for the tab-separated table form.
//!
//! A table row must stay on a single physical line, so newlines and tabs inside
//! a cell are written as the two-character sequences `\n` and `\t`.

/// Escapes newlines and tabs so the text fits in one table cell.
///
/// # Examples
/// ```
/// use i18n_tsv::escape::escape_cell;
///
/// assert_eq!(escape_cell("Hi\tthere\n"), "Hi\\tthere\\n");
/// ```
#[must_use]
pub fn escape_cell(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}

/// Reverses [`escape_cell`].
///
/// Text that already contained a literal `\n` or `\t` before escaping is not
/// restored exactly; those sequences come back as control characters.
#[must_use]
pub fn unescape_cell(cell: &str) -> String {
    cell.replace("\\n", "\n").replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("Hello", "Hello")]
    #[case::newline("line1\nline2", "line1\\nline2")]
    #[case::tab("Hi\tthere", "Hi\\tthere")]
    #[case::both("a\tb\nc", "a\\tb\\nc")]
    #[case::non_ascii("こんにちは\n世界", "こんにちは\\n世界")]
    #[case::empty("", "")]
    fn escape_cell_replaces_control_characters(#[case] input: &str, #[case] expected: &str) {
        assert_that!(escape_cell(input), eq(expected));
    }

    #[rstest]
    #[case::newline("line1\\nline2", "line1\nline2")]
    #[case::tab("Hi\\tthere", "Hi\tthere")]
    #[case::trailing_backslash("path\\", "path\\")]
    #[case::non_ascii("Grüße\\tÄ", "Grüße\tÄ")]
    fn unescape_cell_restores_control_characters(#[case] input: &str, #[case] expected: &str) {
        assert_that!(unescape_cell(input), eq(expected));
    }

    #[rstest]
    fn newline_and_tab_survive_escape_then_unescape() {
        let text = "first line\n\tindented\tcolumns\n";

        assert_that!(unescape_cell(&escape_cell(text)), eq(text));
    }

    /// Literal backslash sequences are turned into control characters.
    #[rstest]
    fn literal_backslash_sequence_is_not_preserved() {
        let text = r"C:\new\table";

        assert_that!(unescape_cell(&escape_cell(text)), eq("C:\new\table"));
    }
}
