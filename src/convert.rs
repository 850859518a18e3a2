//! Conversion between the nested catalog and the flat table.
//!
//! The catalog is sparse and the table is dense, so a round trip through the
//! table turns every missing (language, label) pair into an empty string.

use crate::catalog::LocaleCatalog;
use crate::error::ConvertError;
use crate::table::{
    Row,
    Table,
};

/// Builds a dense table from a catalog.
///
/// Columns are the sorted language codes, rows the sorted union of labels.
/// Labels a language does not define get an empty cell.
#[must_use]
pub fn to_table(catalog: &LocaleCatalog) -> Table {
    let languages: Vec<String> = catalog.languages().map(str::to_string).collect();

    let rows = catalog
        .labels()
        .into_iter()
        .map(|label| {
            let cells = languages
                .iter()
                .map(|language| catalog.get(language, label).unwrap_or_default().to_string())
                .collect();
            Row::new(label, cells)
        })
        .collect();

    Table { languages, rows }
}

/// Builds a catalog from a table.
///
/// Cells are paired with the header's languages by position; surplus cells on
/// either side are dropped. Empty cells are kept as empty-string entries, and a
/// repeated label or language overwrites the earlier one.
#[must_use]
pub fn to_catalog(table: &Table) -> LocaleCatalog {
    let mut catalog = LocaleCatalog::new();

    for row in &table.rows {
        for (language, text) in table.languages.iter().zip(&row.cells) {
            catalog.insert(language.as_str(), row.label.as_str(), text.as_str());
        }
    }

    catalog
}

/// Converts catalog JSON into tab-separated table text.
///
/// # Errors
/// - JSON パースエラー
///
/// # Examples
/// ```
/// use i18n_tsv::convert::nested_to_table;
///
/// let tsv = nested_to_table(r#"{"en": {"hello": "Hi\tthere"}, "fr": {"hello": "Salut"}}"#)?;
/// assert_eq!(tsv, "\ten\tfr\nhello\tHi\\tthere\tSalut\n");
/// # Ok::<(), i18n_tsv::ConvertError>(())
/// ```
pub fn nested_to_table(json: &str) -> Result<String, ConvertError> {
    let catalog = LocaleCatalog::from_json_str(json)?;
    Ok(to_table(&catalog).render())
}

/// Converts tab-separated table text into pretty-printed catalog JSON.
///
/// # Errors
/// - シリアライズエラー
pub fn table_to_nested(text: &str) -> Result<String, ConvertError> {
    let catalog = to_catalog(&Table::parse(text));
    tracing::debug!("Built catalog with {} entries", catalog.entry_count());
    catalog.to_pretty_json()
}
