//! i18n-tsv
//!
//! ロケールカタログ（言語 → ラベル → テキストの JSON）とタブ区切りの表を相互変換する

pub mod catalog;
pub mod cli;
pub mod convert;
pub mod error;
pub mod escape;
pub mod table;

pub use catalog::LocaleCatalog;
pub use error::ConvertError;
pub use table::{
    Row,
    Table,
};
