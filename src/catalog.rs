//! ロケールカタログ（言語 → ラベル → 翻訳テキスト）

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::ser::PrettyFormatter;

use crate::error::ConvertError;

/// Indentation of the pretty-printed catalog JSON.
const JSON_INDENT: &[u8] = b"    ";

/// Nested, sparse locale catalog: language code → label → translated text.
///
/// Sorted maps keep language codes and labels in ascending order, which is the
/// order both the table and the JSON output use. A language does not have to
/// define every label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCatalog(BTreeMap<String, BTreeMap<String, String>>);

impl LocaleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON text.
    ///
    /// Duplicate keys keep the last value.
    ///
    /// # Errors
    /// - JSON パースエラー（オブジェクト以外、文字列以外の値を含む）
    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded catalog: {} languages, {} entries",
            catalog.0.len(),
            catalog.entry_count()
        );
        Ok(catalog)
    }

    /// Sets `catalog[language][label] = text`, overwriting any previous text.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.0.entry(language.into()).or_default().insert(label.into(), text.into());
    }

    /// Returns the text of `label` in `language`, if present.
    #[must_use]
    pub fn get(&self, language: &str, label: &str) -> Option<&str> {
        self.0.get(language)?.get(label).map(String::as_str)
    }

    /// Language codes in ascending order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Union of all labels across languages, in ascending order.
    #[must_use]
    pub fn labels(&self) -> BTreeSet<&str> {
        self.0.values().flat_map(|entries| entries.keys().map(String::as_str)).collect()
    }

    /// Number of (language, label, text) entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Serializes the catalog as human-diffable JSON.
    ///
    /// Keys are sorted, non-ASCII text is written as-is and nesting is indented
    /// by four spaces.
    ///
    /// # Errors
    /// - シリアライズエラー
    pub fn to_pretty_json(&self) -> Result<String, ConvertError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        // serde_json only ever writes valid UTF-8
        String::from_utf8(buf).map_err(|err| {
            ConvertError::Output(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })
    }
}

impl<L, K, V> FromIterator<(L, K, V)> for LocaleCatalog
where
    L: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, K, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (language, label, text) in iter {
            catalog.insert(language, label, text);
        }
        catalog
    }
}
