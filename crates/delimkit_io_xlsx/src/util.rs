//! Stateless helper utilities used by the workbook writer and export entry points.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::conf::{
    C_SHEET_NAME_INDEX_SUFFIX, C_SHEET_NAME_PREFIX, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{
    EnumEmptyGroupRule, EnumSheetNamingRule, SpecNamedTable, SpecXlsxExportOptions,
    XlsxExportError,
};
use crate::table::Table;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Synthesize the fallback sheet name for the group at `idx_group` (zero-based).
pub fn derive_sheet_name(idx_group: usize, rule: EnumSheetNamingRule) -> String {
    match rule {
        EnumSheetNamingRule::IndexSuffixed => {
            format!("{C_SHEET_NAME_PREFIX}{idx_group}{C_SHEET_NAME_INDEX_SUFFIX}")
        }
        EnumSheetNamingRule::Ordinal => format!("{C_SHEET_NAME_PREFIX}{}", idx_group + 1),
    }
}

/// Resolve the sheet name for one group: explicit name at the same position, else synthesized.
pub fn resolve_sheet_name(idx_group: usize, options: &SpecXlsxExportOptions) -> String {
    options
        .sheet_names
        .as_ref()
        .and_then(|l_names| l_names.get(idx_group))
        .cloned()
        .unwrap_or_else(|| derive_sheet_name(idx_group, options.rule_sheet_naming))
}

/// Check `name` against Excel sheet naming rules.
pub fn validate_sheet_name(name: &str) -> Result<(), XlsxExportError> {
    let fail = |reason: String| XlsxExportError::InvalidSheetName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(fail("name is blank".to_string()));
    }
    let n_len = name.chars().count();
    if n_len > N_LEN_EXCEL_SHEET_NAME_MAX {
        return Err(fail(format!(
            "length {n_len} exceeds {N_LEN_EXCEL_SHEET_NAME_MAX}"
        )));
    }
    if let Some(c_illegal) = TUP_EXCEL_ILLEGAL.iter().find(|c| name.contains(**c)) {
        return Err(fail(format!("contains {c_illegal:?}")));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(fail("starts or ends with an apostrophe".to_string()));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableCollection

/// Build one named table per input group.
///
/// With [`EnumEmptyGroupRule::Skip`], absent and empty groups produce nothing and the
/// remaining groups keep the name derived from their original position. With
/// [`EnumEmptyGroupRule::Keep`], every group becomes a (possibly empty) table and an
/// empty `groups` slice is an error.
pub fn collect_named_tables<R, G>(
    groups: &[Option<G>],
    options: &SpecXlsxExportOptions,
) -> Result<Vec<SpecNamedTable>, XlsxExportError>
where
    R: AsRef<str>,
    G: AsRef<[R]>,
{
    if groups.is_empty() && options.rule_empty_group == EnumEmptyGroupRule::Keep {
        return Err(XlsxExportError::EmptyInput("groups is empty".to_string()));
    }

    let mut l_named_tables = Vec::with_capacity(groups.len());
    for (idx_group, group) in groups.iter().enumerate() {
        let l_records: &[R] = match group {
            Some(records) => records.as_ref(),
            None => &[],
        };
        if l_records.is_empty() && options.rule_empty_group == EnumEmptyGroupRule::Skip {
            warn!(
                "skipping {} group at index {idx_group}",
                if group.is_none() { "absent" } else { "empty" }
            );
            continue;
        }

        let sheet_name = resolve_sheet_name(idx_group, options);
        debug!("collected group {idx_group} as sheet {sheet_name:?}");
        l_named_tables.push(SpecNamedTable {
            table: Table::build(l_records, options.delimiter),
            sheet_name,
        });
    }

    Ok(l_named_tables)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridLimits

/// Reject tables that do not fit into a single worksheet.
pub fn validate_table_fits_sheet(table: &Table) -> Result<(), XlsxExportError> {
    if table.height() > N_NROWS_EXCEL_MAX {
        return Err(XlsxExportError::LimitExceeded(format!(
            "{} rows > {N_NROWS_EXCEL_MAX}",
            table.height()
        )));
    }
    if table.width() > N_NCOLS_EXCEL_MAX {
        return Err(XlsxExportError::LimitExceeded(format!(
            "{} columns > {N_NCOLS_EXCEL_MAX}",
            table.width()
        )));
    }
    Ok(())
}

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxExportError> {
    u32::try_from(value)
        .map_err(|_| XlsxExportError::LimitExceeded(format!("row index overflow: {value}")))
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxExportError> {
    u16::try_from(value)
        .map_err(|_| XlsxExportError::LimitExceeded(format!("column index overflow: {value}")))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Create the parent directory of `path_file` (and its ancestors) when missing.
pub fn ensure_parent_dir(path_file: &Path) -> Result<(), XlsxExportError> {
    let Some(path_dir) = path_file.parent() else {
        return Ok(());
    };
    if path_dir.as_os_str().is_empty() || path_dir.is_dir() {
        return Ok(());
    }

    debug!("creating output directory {}", path_dir.display());
    fs::create_dir_all(path_dir).map_err(|source| XlsxExportError::DirectoryInit {
        path: path_dir.to_path_buf(),
        source,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_sheet_name_index_suffixed_quirk() {
        let rule = EnumSheetNamingRule::IndexSuffixed;
        assert_eq!(derive_sheet_name(0, rule), "Sheet01");
        assert_eq!(derive_sheet_name(1, rule), "Sheet11");
        assert_eq!(derive_sheet_name(12, rule), "Sheet121");
    }

    #[test]
    fn test_derive_sheet_name_ordinal() {
        assert_eq!(derive_sheet_name(0, EnumSheetNamingRule::Ordinal), "Sheet1");
        assert_eq!(derive_sheet_name(2, EnumSheetNamingRule::Ordinal), "Sheet3");
    }

    #[test]
    fn test_resolve_sheet_name_prefers_explicit_then_falls_back() {
        let options = SpecXlsxExportOptions {
            sheet_names: Some(vec!["Orders".to_string()]),
            ..Default::default()
        };
        assert_eq!(resolve_sheet_name(0, &options), "Orders");
        assert_eq!(resolve_sheet_name(1, &options), "Sheet11");
    }

    #[test]
    fn test_validate_sheet_name() {
        assert!(validate_sheet_name("Sheet1").is_ok());
        assert!(validate_sheet_name("   ").is_err());
        assert!(validate_sheet_name("a[1]").is_err());
        assert!(validate_sheet_name("'quoted").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
        assert!(validate_sheet_name(&"x".repeat(31)).is_ok());
    }

    #[test]
    fn test_collect_skips_absent_and_empty_groups_keeping_original_index() {
        let groups = vec![Some(vec!["a|b"]), Some(vec![]), None, Some(vec!["c|d|e"])];
        let options = SpecXlsxExportOptions::with_delimiter('|');

        let l_named = collect_named_tables(&groups, &options).unwrap();

        assert_eq!(l_named.len(), 2);
        assert_eq!(l_named[0].sheet_name, "Sheet01");
        assert_eq!(l_named[0].table.width(), 2);
        assert_eq!(l_named[1].sheet_name, "Sheet31");
        assert_eq!(l_named[1].table.width(), 3);
    }

    #[test]
    fn test_collect_keep_rule_preserves_empty_groups() {
        let groups = vec![Some(vec!["a,b"]), Some(vec![]), None];
        let options = SpecXlsxExportOptions {
            delimiter: ',',
            rule_empty_group: EnumEmptyGroupRule::Keep,
            ..Default::default()
        };

        let l_named = collect_named_tables(&groups, &options).unwrap();

        let l_names: Vec<&str> = l_named.iter().map(|t| t.sheet_name.as_str()).collect();
        assert_eq!(l_names, vec!["Sheet01", "Sheet11", "Sheet21"]);
        assert!(l_named[1].table.is_empty());
        assert!(l_named[2].table.is_empty());
    }

    #[test]
    fn test_collect_keep_rule_rejects_no_groups() {
        let groups: Vec<Option<Vec<&str>>> = vec![];
        let options = SpecXlsxExportOptions {
            rule_empty_group: EnumEmptyGroupRule::Keep,
            ..Default::default()
        };
        assert!(matches!(
            collect_named_tables(&groups, &options),
            Err(XlsxExportError::EmptyInput(_))
        ));

        let options = SpecXlsxExportOptions::default();
        assert!(collect_named_tables(&groups, &options).unwrap().is_empty());
    }

    #[test]
    fn test_collect_uses_explicit_names_by_position() {
        let groups = vec![Some(vec!["1"]), None, Some(vec!["2"])];
        let options = SpecXlsxExportOptions {
            sheet_names: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            ..Default::default()
        };

        let l_named = collect_named_tables(&groups, &options).unwrap();
        assert_eq!(l_named[0].sheet_name, "A");
        assert_eq!(l_named[1].sheet_name, "C");
    }

    #[test]
    fn test_cast_limits() {
        assert_eq!(cast_col_num(16_383).unwrap(), 16_383);
        assert!(cast_col_num(70_000).is_err());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path_file = dir.path().join("a").join("b").join("out.xlsx");

        ensure_parent_dir(&path_file).unwrap();

        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!path_file.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name_is_noop() {
        ensure_parent_dir(Path::new("report.xlsx")).unwrap();
    }
}
