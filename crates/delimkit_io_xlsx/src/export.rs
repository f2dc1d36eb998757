//! File export entry points.

use std::path::Path;

use log::info;

use crate::conf::{C_DELIMITER_DEFAULT, C_SHEET_NAME_DEFAULT};
use crate::spec::{SpecXlsxExportOptions, XlsxExportError};
use crate::table::Table;
use crate::util::collect_named_tables;
use crate::writer::XlsxWorkbook;

/// Write tab-delimited `records` to a new one-sheet workbook named `Sheet1`.
pub fn export_to_file<R: AsRef<str>>(
    records: &[R],
    path_file_out: &Path,
) -> Result<(), XlsxExportError> {
    export_to_file_with(records, path_file_out, C_DELIMITER_DEFAULT, C_SHEET_NAME_DEFAULT)
}

/// Write `records` split on `delimiter` to a new one-sheet workbook named `Sheet1`.
pub fn export_to_file_with_delimiter<R: AsRef<str>>(
    records: &[R],
    path_file_out: &Path,
    delimiter: char,
) -> Result<(), XlsxExportError> {
    export_to_file_with(records, path_file_out, delimiter, C_SHEET_NAME_DEFAULT)
}

/// Write tab-delimited `records` to a new one-sheet workbook with a custom sheet name.
pub fn export_to_file_with_sheet_name<R: AsRef<str>>(
    records: &[R],
    path_file_out: &Path,
    sheet_name: &str,
) -> Result<(), XlsxExportError> {
    export_to_file_with(records, path_file_out, C_DELIMITER_DEFAULT, sheet_name)
}

/// Write `records` to a new one-sheet workbook at `path_file_out`.
///
/// Fails with [`XlsxExportError::EmptyInput`] before touching the filesystem when
/// `records` is empty. Missing parent directories are created; an existing file
/// is replaced.
pub fn export_to_file_with<R: AsRef<str>>(
    records: &[R],
    path_file_out: &Path,
    delimiter: char,
    sheet_name: &str,
) -> Result<(), XlsxExportError> {
    if records.is_empty() {
        return Err(XlsxExportError::EmptyInput("records is empty".to_string()));
    }

    let table = Table::build(records, delimiter);
    let mut xlsx_workbook = XlsxWorkbook::new();
    xlsx_workbook.add_sheet(&table, sheet_name)?;
    xlsx_workbook.save(path_file_out)?;

    info!(
        "exported {} records to {} [{sheet_name}]",
        table.height(),
        path_file_out.display()
    );
    Ok(())
}

/// Build one sheet per group and, when `path_file_out` is given and non-empty,
/// write the workbook there.
///
/// The assembled workbook is returned either way, so callers can keep it in
/// memory (e.g. for [`XlsxWorkbook::insert_data`]) without writing a file.
/// Group handling and sheet naming follow `options`; see
/// [`collect_named_tables`]. When a path is given but no group produced a
/// sheet, [`XlsxExportError::EmptyInput`] is returned and no file is written.
pub fn export_groups_to_file<R, G>(
    groups: &[Option<G>],
    path_file_out: Option<&Path>,
    options: &SpecXlsxExportOptions,
) -> Result<XlsxWorkbook, XlsxExportError>
where
    R: AsRef<str>,
    G: AsRef<[R]>,
{
    let l_named_tables = collect_named_tables(groups, options)?;
    let mut xlsx_workbook = XlsxWorkbook::from_named_tables(&l_named_tables)?;

    match path_file_out {
        Some(path) if !path.as_os_str().is_empty() => {
            xlsx_workbook.save(path)?;
            info!(
                "exported {} of {} groups to {}",
                l_named_tables.len(),
                groups.len(),
                path.display()
            );
        }
        _ => {
            info!(
                "assembled {} of {} groups in memory",
                l_named_tables.len(),
                groups.len()
            );
        }
    }

    Ok(xlsx_workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_to_file_rejects_empty_records_before_creating_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path_file = dir.path().join("out").join("empty.xlsx");
        let records: [&str; 0] = [];

        let err = export_to_file(&records, &path_file).unwrap_err();

        assert!(matches!(err, XlsxExportError::EmptyInput(_)));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_export_groups_without_path_stays_in_memory() {
        let groups = vec![Some(vec!["a|b"]), Some(vec![]), Some(vec!["c|d|e"])];
        let options = SpecXlsxExportOptions::with_delimiter('|');

        let xlsx_workbook = export_groups_to_file(&groups, None, &options).unwrap();
        assert_eq!(xlsx_workbook.sheet_names(), vec!["Sheet01", "Sheet21"]);

        let xlsx_workbook =
            export_groups_to_file(&groups, Some(Path::new("")), &options).unwrap();
        assert_eq!(xlsx_workbook.sheet_count(), 2);
    }

    #[test]
    fn test_export_groups_all_skipped_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path_file = dir.path().join("out").join("blank.xlsx");
        let groups: Vec<Option<Vec<&str>>> = vec![None, Some(vec![])];
        let options = SpecXlsxExportOptions::default();

        let err =
            export_groups_to_file(&groups, Some(path_file.as_path()), &options).unwrap_err();

        assert!(matches!(err, XlsxExportError::EmptyInput(_)));
        assert!(!path_file.exists());
        assert!(!dir.path().join("out").exists());

        let xlsx_workbook = export_groups_to_file(&groups, None, &options).unwrap();
        assert_eq!(xlsx_workbook.sheet_count(), 0);
    }
}
