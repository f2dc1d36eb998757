//! `delimkit_io_xlsx` v1:
//! Delimited text records to XLSX workbooks.
//!
//! Modules:
//! - `conf`   : constants and default presets
//! - `spec`   : options, enums and errors
//! - `table`  : jagged text table built from delimited records
//! - `util`   : pure helper functions (sheet naming, group collection, paths)
//! - `writer` : in-memory workbook assembler over `rust_xlsxwriter`
//! - `export` : file export entry points
pub mod conf;
pub mod export;
pub mod spec;
pub mod table;
pub mod util;
pub mod writer;

pub use conf::{
    C_DELIMITER_DEFAULT, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, derive_default_xlsx_export_options,
};
pub use export::{
    export_groups_to_file, export_to_file, export_to_file_with, export_to_file_with_delimiter,
    export_to_file_with_sheet_name,
};
pub use spec::{
    EnumEmptyGroupRule, EnumSheetNamingRule, SpecNamedTable, SpecXlsxExportOptions,
    XlsxExportError,
};
pub use table::Table;
pub use util::{
    collect_named_tables, derive_sheet_name, ensure_parent_dir, resolve_sheet_name,
    validate_sheet_name, validate_table_fits_sheet,
};
pub use writer::{XlsxWorkbook, insert_into};
