//! Workbook assembler that places text tables into `rust_xlsxwriter` worksheets.

use std::fmt;
use std::path::Path;

use log::{debug, info};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::spec::{SpecNamedTable, XlsxExportError};
use crate::table::Table;
use crate::util::{
    cast_col_num, cast_row_num, ensure_parent_dir, validate_sheet_name, validate_table_fits_sheet,
};

/// In-memory workbook built from delimited text tables.
///
/// Nothing touches the filesystem until [`Self::save`] is called.
pub struct XlsxWorkbook {
    workbook: Workbook,
}

impl fmt::Debug for XlsxWorkbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XlsxWorkbook")
            .field("sheet_names", &self.sheet_names())
            .finish()
    }
}

impl Default for XlsxWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl XlsxWorkbook {
    /// Create an empty workbook with no sheets.
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
        }
    }

    /// Assemble a workbook with one sheet per named table, in order.
    ///
    /// Duplicate names are not checked here; `rust_xlsxwriter` rejects them on save.
    pub fn from_named_tables(l_named_tables: &[SpecNamedTable]) -> Result<Self, XlsxExportError> {
        let mut xlsx_workbook = Self::new();
        for named_table in l_named_tables {
            xlsx_workbook.add_sheet(&named_table.table, &named_table.sheet_name)?;
        }
        Ok(xlsx_workbook)
    }

    /// Append a new sheet named `sheet_name` holding `table`.
    pub fn add_sheet(&mut self, table: &Table, sheet_name: &str) -> Result<(), XlsxExportError> {
        validate_sheet_name(sheet_name)?;
        validate_table_fits_sheet(table)?;

        let mut worksheet = Worksheet::new();
        worksheet.set_name(sheet_name)?;
        write_table(&mut worksheet, table)?;
        self.workbook.push_worksheet(worksheet);

        debug!(
            "added sheet {sheet_name:?}: rows={} cols={}",
            table.height(),
            table.width()
        );
        Ok(())
    }

    /// Split `records` on `delimiter` and write them into `sheet_name` from cell A1.
    ///
    /// The sheet is created when missing. Cells inside the written rectangle
    /// (row count x column count) are overwritten, cleared where a row has no
    /// field or an empty one; cells outside it are left untouched.
    /// Returns `self` for chaining.
    pub fn insert_data<R: AsRef<str>>(
        &mut self,
        records: &[R],
        sheet_name: &str,
        delimiter: char,
    ) -> Result<&mut Self, XlsxExportError> {
        if sheet_name.trim().is_empty() {
            return Err(XlsxExportError::InvalidArgument(
                "sheet_name cannot be blank.".to_string(),
            ));
        }

        let table = Table::build(records, delimiter);
        validate_table_fits_sheet(&table)?;

        let sheet_name_stored = match self.derive_stored_sheet_name(sheet_name) {
            Some(name) => name,
            None => {
                validate_sheet_name(sheet_name)?;
                let mut worksheet = Worksheet::new();
                worksheet.set_name(sheet_name)?;
                self.workbook.push_worksheet(worksheet);
                debug!("created sheet {sheet_name:?} for insert");
                sheet_name.to_string()
            }
        };

        let worksheet = self
            .workbook
            .worksheet_from_name(&sheet_name_stored)
            .map_err(|err| {
                XlsxExportError::Assembly(format!(
                    "Specified worksheet {sheet_name:?} is not present and could not be added: {err}"
                ))
            })?;
        write_table(worksheet, &table)?;

        debug!(
            "inserted into sheet {sheet_name:?}: rows={} cols={}",
            table.height(),
            table.width()
        );
        Ok(self)
    }

    /// Whether a sheet with this name exists, compared case-insensitively as Excel does.
    pub fn has_sheet(&self, sheet_name: &str) -> bool {
        self.derive_stored_sheet_name(sheet_name).is_some()
    }

    fn derive_stored_sheet_name(&self, sheet_name: &str) -> Option<String> {
        let c_name_key = sheet_name.to_lowercase();
        self.workbook
            .worksheets()
            .iter()
            .map(Worksheet::name)
            .find(|name| name.to_lowercase() == c_name_key)
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook
            .worksheets()
            .iter()
            .map(Worksheet::name)
            .collect()
    }

    /// Number of sheets in the workbook.
    pub fn sheet_count(&self) -> usize {
        self.workbook.worksheets().len()
    }

    /// Serialize to `path_file_out`, creating missing parent directories and
    /// replacing any existing file.
    ///
    /// A workbook without sheets is rejected with [`XlsxExportError::EmptyInput`]
    /// before anything is created on disk.
    /// Not atomic: a failure mid-write may leave a partial file behind, and
    /// directories created before a failure are not removed.
    pub fn save(&mut self, path_file_out: &Path) -> Result<(), XlsxExportError> {
        if self.sheet_count() == 0 {
            return Err(XlsxExportError::EmptyInput(format!(
                "workbook has no sheets to save to {}",
                path_file_out.display()
            )));
        }
        ensure_parent_dir(path_file_out)?;
        self.workbook.save(path_file_out)?;
        info!(
            "saved workbook: path={} sheets={}",
            path_file_out.display(),
            self.sheet_count()
        );
        Ok(())
    }

    /// Hand over the underlying `rust_xlsxwriter` workbook.
    pub fn into_inner(self) -> Workbook {
        self.workbook
    }
}

/// Insert delimited `records` into `workbook` at `sheet_name`, starting at A1.
///
/// Entry point for callers holding optional inputs: an absent workbook, absent
/// records or an absent/blank sheet name fail with
/// [`XlsxExportError::InvalidArgument`] before anything is written.
pub fn insert_into<'a, R: AsRef<str>>(
    workbook: Option<&'a mut XlsxWorkbook>,
    records: Option<&[R]>,
    delimiter: char,
    sheet_name: Option<&str>,
) -> Result<&'a mut XlsxWorkbook, XlsxExportError> {
    let Some(workbook) = workbook else {
        return Err(XlsxExportError::InvalidArgument(
            "workbook cannot be absent.".to_string(),
        ));
    };
    let Some(records) = records else {
        return Err(XlsxExportError::InvalidArgument(
            "records cannot be absent.".to_string(),
        ));
    };
    let sheet_name = match sheet_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            return Err(XlsxExportError::InvalidArgument(
                "sheet_name cannot be blank.".to_string(),
            ));
        }
    };

    workbook.insert_data(records, sheet_name, delimiter)
}

fn write_table(worksheet: &mut Worksheet, table: &Table) -> Result<(), XlsxExportError> {
    let n_width = table.width();
    for (row_idx, row) in table.rows().iter().enumerate() {
        let n_row = cast_row_num(row_idx)?;
        for col_idx in 0..n_width {
            let n_col = cast_col_num(col_idx)?;
            match row.get(col_idx) {
                Some(value) if !value.is_empty() => {
                    worksheet.write_string(n_row, n_col, value.as_str())?;
                }
                _ => {
                    worksheet.clear_cell(n_row, n_col);
                }
            }
        }
    }
    Ok(())
}
