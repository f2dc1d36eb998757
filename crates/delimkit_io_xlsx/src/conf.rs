//! XLSX export constants and default preset factories.

use crate::spec::{EnumEmptyGroupRule, EnumSheetNamingRule, SpecXlsxExportOptions};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Field delimiter used when the caller does not pick one.
pub const C_DELIMITER_DEFAULT: char = '\t';
/// Sheet name used by single-sheet exports when the caller does not pick one.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";
/// Leading literal of auto-generated sheet names.
pub const C_SHEET_NAME_PREFIX: &str = "Sheet";
/// Trailing literal of [`EnumSheetNamingRule::IndexSuffixed`] names.
pub const C_SHEET_NAME_INDEX_SUFFIX: &str = "1";

/// Build default export options.
pub fn derive_default_xlsx_export_options() -> SpecXlsxExportOptions {
    SpecXlsxExportOptions {
        delimiter: C_DELIMITER_DEFAULT,
        sheet_names: None,
        rule_empty_group: EnumEmptyGroupRule::Skip,
        rule_sheet_naming: EnumSheetNamingRule::IndexSuffixed,
    }
}
