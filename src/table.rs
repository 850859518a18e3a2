//! Tab-separated table representation.
//!
//! ```text
//! <empty>\t<lang 1>\t<lang 2>...
//! <label>\t<text in lang 1>\t<text in lang 2>...
//! ```
//!
//! The table is dense: every row has a cell for every language, empty when the
//! language has no text for that label.

use crate::escape::{
    escape_cell,
    unescape_cell,
};

/// Column separator.
const SEPARATOR: char = '\t';

/// One label and its per-language texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Label shared by all languages
    pub label: String,

    /// Unescaped texts, positionally aligned with [`Table::languages`]
    pub cells: Vec<String>,
}

impl Row {
    /// Creates a row from a label and its cells.
    #[must_use]
    pub fn new(label: impl Into<String>, cells: Vec<String>) -> Self {
        Self { label: label.into(), cells }
    }

    /// Parses a single data line (without its `\n` terminator).
    ///
    /// Cell 0 is the label; the remaining cells are unescaped.
    fn parse(line: &str) -> Self {
        let mut cells = line.split(SEPARATOR);
        let label = cells.next().unwrap_or_default().to_string();
        Self { label, cells: cells.map(unescape_cell).collect() }
    }

    /// Appends the escaped row to `out`, without a line terminator.
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.label);
        for cell in &self.cells {
            out.push(SEPARATOR);
            out.push_str(&escape_cell(cell));
        }
    }
}

/// Flat table: a header of language codes and one row per label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Language codes of columns 1..N
    pub languages: Vec<String>,

    /// Data rows in output order
    pub rows: Vec<Row>,
}

impl Table {
    /// Parses tab-separated text.
    ///
    /// The header's corner cell is discarded. Data lines only lose their `\n`
    /// terminator; other whitespace (including `\r`) is kept as cell content.
    /// Column counts are not validated.
    ///
    /// # Examples
    /// ```
    /// use i18n_tsv::table::Table;
    ///
    /// let table = Table::parse("\tde\ten\ngreet\tHallo\tHi\n");
    /// assert_eq!(table.languages, ["de", "en"]);
    /// assert_eq!(table.rows[0].label, "greet");
    /// assert_eq!(table.rows[0].cells, ["Hallo", "Hi"]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut lines = text.split_terminator('\n');

        let Some(header) = lines.next() else {
            tracing::debug!("Empty table input");
            return Self::default();
        };

        let languages: Vec<String> =
            header.trim_end().split(SEPARATOR).skip(1).map(str::to_string).collect();
        let rows: Vec<Row> = lines.map(Row::parse).collect();

        tracing::debug!("Parsed table: {} languages, {} rows", languages.len(), rows.len());

        Self { languages, rows }
    }

    /// Renders the table as tab-separated text, one `\n`-terminated line per row.
    ///
    /// The header always starts with the corner separator. A table without rows
    /// is followed by one blank line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(SEPARATOR);
        out.push_str(&self.languages.join("\t"));
        out.push('\n');

        if self.rows.is_empty() {
            out.push('\n');
        }
        for row in &self.rows {
            row.render_into(&mut out);
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn greetings() -> Table {
        Table {
            languages: vec!["de".to_string(), "en".to_string()],
            rows: vec![
                Row::new("farewell", vec![String::new(), "Bye".to_string()]),
                Row::new("greet", vec!["Hallo".to_string(), "Hi".to_string()]),
            ],
        }
    }

    #[rstest]
    fn render_writes_header_and_rows(greetings: Table) {
        assert_eq!(greetings.render(), "\tde\ten\nfarewell\t\tBye\ngreet\tHallo\tHi\n");
    }

    #[rstest]
    fn render_escapes_cells() {
        let table = Table {
            languages: vec!["en".to_string()],
            rows: vec![Row::new("multi", vec!["one\ntwo\tthree".to_string()])],
        };

        assert_eq!(table.render(), "\ten\nmulti\tone\\ntwo\\tthree\n");
    }

    #[rstest]
    fn render_empty_table_is_corner_and_blank_line() {
        assert_that!(Table::default().render(), eq("\t\n\n"));
    }

    #[rstest]
    fn render_without_rows_adds_blank_line() {
        let table = Table { languages: vec!["en".to_string()], rows: vec![] };

        assert_eq!(table.render(), "\ten\n\n");
    }

    /// A rendered table without rows parses back to no entries.
    #[rstest]
    #[case::no_languages("\t\n\n")]
    #[case::one_language("\ten\n\n")]
    fn parse_rendered_table_without_rows(#[case] input: &str) {
        let table = Table::parse(input);

        assert_eq!(table.rows, [Row::default()]);
    }

    #[rstest]
    fn parse_reads_header_and_rows(greetings: Table) {
        let table = Table::parse("\tde\ten\nfarewell\t\tBye\ngreet\tHallo\tHi\n");

        assert_eq!(table, greetings);
    }

    #[rstest]
    fn parse_without_trailing_newline() {
        let table = Table::parse("\ten\nhello\tHi");

        assert_that!(table.rows, len(eq(1)));
        assert_that!(table.rows[0].cells, elements_are![eq("Hi")]);
    }

    #[rstest]
    fn parse_unescapes_cells_but_not_labels() {
        let table = Table::parse("\ten\nkey\\n\tHi\\tthere\\nfriend\n");

        assert_that!(table.rows[0].label, eq("key\\n"));
        assert_that!(table.rows[0].cells, elements_are![eq("Hi\tthere\nfriend")]);
    }

    #[rstest]
    fn parse_trims_header_trailing_whitespace() {
        let table = Table::parse("\tde\ten \r\n");

        assert_that!(table.languages, elements_are![eq("de"), eq("en")]);
    }

    /// Only `\n` is stripped from data lines.
    #[rstest]
    fn parse_keeps_carriage_return_in_cells() {
        let table = Table::parse("\ten\r\nhello\tHi\r\n");

        assert_that!(table.languages, elements_are![eq("en")]);
        assert_that!(table.rows[0].cells, elements_are![eq("Hi\r")]);
    }

    #[rstest]
    fn parse_keeps_ragged_rows() {
        let table = Table::parse("\tde\ten\nshort\tKurz\nlong\ta\tb\tc\n\n");

        assert_that!(table.rows[0].cells, elements_are![eq("Kurz")]);
        assert_that!(table.rows[1].cells, len(eq(3)));
        assert_eq!(table.rows[2], Row::default());
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank_header("\n")]
    fn parse_empty_input(#[case] input: &str) {
        let table = Table::parse(input);

        assert_that!(table.languages, is_empty());
        assert_that!(table.rows, is_empty());
    }

    #[rstest]
    fn parse_non_ascii() {
        let table = Table::parse("\tja\tzh\nhello\tこんにちは\t你好\n");

        assert_that!(table.rows[0].cells, elements_are![eq("こんにちは"), eq("你好")]);
    }
}
