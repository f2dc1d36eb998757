//! Export specification models and top-level error types.

use std::io;
use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::derive_default_xlsx_export_options;
use crate::table::Table;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// How multi-group collection treats absent or empty groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumEmptyGroupRule {
    /// Drop absent/empty groups silently; no sheet is produced for them (default).
    #[default]
    Skip,
    /// Keep every group as a sheet, empty ones included. Zero groups overall is an error.
    Keep,
}

/// How sheet names are synthesized for groups without an explicit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumSheetNamingRule {
    /// `Sheet` + zero-based group index + `1` (`Sheet01`, `Sheet11`, ...).
    ///
    /// Matches workbooks produced by earlier releases (default).
    #[default]
    IndexSuffixed,
    /// `Sheet` + one-based group index (`Sheet1`, `Sheet2`, ...).
    Ordinal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OptionsAndModels

/// Options for multi-group export and collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxExportOptions {
    /// Single-character field separator.
    pub delimiter: char,
    /// Explicit sheet names, matched to groups by input position.
    pub sheet_names: Option<Vec<String>>,
    /// Absent/empty group handling.
    pub rule_empty_group: EnumEmptyGroupRule,
    /// Fallback sheet naming scheme.
    pub rule_sheet_naming: EnumSheetNamingRule,
}

impl Default for SpecXlsxExportOptions {
    fn default() -> Self {
        derive_default_xlsx_export_options()
    }
}

impl SpecXlsxExportOptions {
    /// Default options with a custom delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }
}

/// One table paired with the sheet name it will be written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecNamedTable {
    /// Sheet contents.
    pub table: Table,
    /// Target sheet name.
    pub sheet_name: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised by table export and workbook assembly.
#[derive(Debug, Error)]
pub enum XlsxExportError {
    /// An export that creates a new workbook received no records.
    #[error("No data was detected: {0}")]
    EmptyInput(String),
    /// A required argument was absent or blank.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The workbook failed to provide a sheet that was just added.
    #[error("Workbook assembly failed: {0}")]
    Assembly(String),
    /// Sheet name breaks Excel naming rules.
    #[error("Invalid sheet name {name:?}: {reason}")]
    InvalidSheetName {
        /// Offending sheet name.
        name: String,
        /// Rule that was broken.
        reason: String,
    },
    /// Table does not fit into one worksheet.
    #[error("Excel limit exceeded: {0}")]
    LimitExceeded(String),
    /// Output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryInit {
        /// Directory that failed creation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Spreadsheet library failure.
    #[error("xlsx write error: {0}")]
    Write(#[from] XlsxError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
