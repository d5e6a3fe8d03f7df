use crate::document::{
    Alignment, Border, BorderSide, BorderStyle, FooterKind, ReportDocument, Table, TableWidth,
};
use crate::models::{ColumnInfo, TableSchema};
use crate::{Result, TriTabulaError};
use tracing::instrument;

pub const REPORT_TITLE: &str = "数据库三线表";
pub const REPORT_CREATOR: &str = "TriTabula";
pub const REPORT_DESCRIPTION: &str = "Three-line tables describing the columns of a database schema";

/// Font for Chinese text and labels.
pub const BODY_FONT: &str = "宋体";
/// Font for identifiers and type names.
pub const LATIN_FONT: &str = "Times New Roman";
/// 10.5pt, in half points.
pub const FONT_SIZE: u32 = 21;
pub const LINE_SPACING: f64 = 1.5;

/// Shown in the default column when the column has no default.
pub const NULL_DEFAULT_TEXT: &str = "NULL";

const RULE_COLOR: &str = "000000";
const HEAVY_RULE_SIZE: u32 = 10;
const MEDIUM_RULE_SIZE: u32 = 4;

/// The columns of every rendered grid, in display order.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ReportField {
    ColumnName,
    ColumnType,
    IsNullable,
    ColumnKey,
    ColumnDefault,
    ColumnComment,
}

impl ReportField {
    pub const ALL: [ReportField; 6] = [
        ReportField::ColumnName,
        ReportField::ColumnType,
        ReportField::IsNullable,
        ReportField::ColumnKey,
        ReportField::ColumnDefault,
        ReportField::ColumnComment,
    ];
}

/// Display text for the header row and for the nullable column.
#[derive(Debug, Clone)]
pub struct ReportLabels {
    pub fields: &'static [(ReportField, &'static str)],
    pub yes: &'static str,
    pub no: &'static str,
}

pub static DEFAULT_LABELS: ReportLabels = ReportLabels {
    fields: &[
        (ReportField::ColumnName, "字段名"),
        (ReportField::ColumnType, "类型"),
        (ReportField::IsNullable, "是否为空"),
        (ReportField::ColumnKey, "索引"),
        (ReportField::ColumnDefault, "默认值"),
        (ReportField::ColumnComment, "说明"),
    ],
    yes: "是",
    no: "否",
};

impl ReportLabels {
    pub fn label(&self, field: ReportField) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, label)| *label)
    }
}

/// Turns table structures into a document with one titled three-line table per table.
pub struct ReportRenderer<'l> {
    labels: &'l ReportLabels,
}

impl Default for ReportRenderer<'static> {
    fn default() -> Self {
        ReportRenderer {
            labels: &DEFAULT_LABELS,
        }
    }
}

impl<'l> ReportRenderer<'l> {
    pub fn new(labels: &'l ReportLabels) -> Self {
        ReportRenderer { labels }
    }

    #[instrument(skip_all)]
    pub fn render(&self, tables: &[TableSchema]) -> Result<ReportDocument> {
        let mut doc = ReportDocument::new();
        doc.set_title(REPORT_TITLE)
            .set_creator(REPORT_CREATOR)
            .set_description(REPORT_DESCRIPTION);

        for table in tables {
            self.render_table(&mut doc, table)?;
        }

        doc.add_footer(FooterKind::Default).add_page_number();

        tracing::debug!("Rendered {} tables", tables.len());

        Ok(doc)
    }

    fn render_table(&self, doc: &mut ReportDocument, table: &TableSchema) -> Result<()> {
        validate_table(table)?;

        let title = doc.add_paragraph();
        title
            .set_alignment(Alignment::Center)
            .set_spacing_before(0)
            .set_spacing_after(0)
            .set_line_spacing(LINE_SPACING);
        title
            .add_run()
            .add_text(&table.table_name)
            .set_bold(true)
            .set_font_size(FONT_SIZE)
            .set_font_family(BODY_FONT);

        let grid = doc.add_table(table.columns.len() + 1, ReportField::ALL.len());
        grid.set_width(TableWidth::Percent(100))
            .set_alignment(Alignment::Center);

        for (column_index, field) in ReportField::ALL.iter().enumerate() {
            let label = self.labels.label(*field).ok_or_else(|| TriTabulaError::Render {
                table: table.table_name.clone(),
                reason: format!("no label for field {:?}", field),
            })?;

            write_cell(grid, table, 0, column_index, label, BODY_FONT)?;
        }

        for (row_index, column) in table.columns.iter().enumerate() {
            for (column_index, field) in ReportField::ALL.iter().enumerate() {
                let (text, font) = self.cell_content(*field, column);
                write_cell(grid, table, row_index + 1, column_index, text, font)?;
            }
        }

        apply_three_line_borders(grid, table)?;

        if grid.row_count() != table.columns.len() + 1
            || grid.column_count() != ReportField::ALL.len()
        {
            return Err(TriTabulaError::Render {
                table: table.table_name.clone(),
                reason: format!(
                    "grid came out as {}x{} instead of {}x{}",
                    grid.row_count(),
                    grid.column_count(),
                    table.columns.len() + 1,
                    ReportField::ALL.len()
                ),
            });
        }

        doc.add_paragraph();

        Ok(())
    }

    fn cell_content<'c>(&self, field: ReportField, column: &'c ColumnInfo) -> (&'c str, &'static str) {
        match field {
            ReportField::ColumnName => (column.name.as_str(), LATIN_FONT),
            ReportField::ColumnType => (column.column_type.as_str(), LATIN_FONT),
            ReportField::IsNullable => {
                let text = if column.is_nullable {
                    self.labels.yes
                } else {
                    self.labels.no
                };
                (text, BODY_FONT)
            }
            ReportField::ColumnKey => (column.column_key.as_str(), BODY_FONT),
            ReportField::ColumnDefault => {
                if column.has_default() {
                    (column.default_value.as_str(), BODY_FONT)
                } else {
                    (NULL_DEFAULT_TEXT, BODY_FONT)
                }
            }
            ReportField::ColumnComment => (column.comment.as_str(), BODY_FONT),
        }
    }
}

fn validate_table(table: &TableSchema) -> Result<()> {
    let fail = |reason: String| TriTabulaError::Render {
        table: table.table_name.clone(),
        reason,
    };

    if table.table_name.is_empty() {
        return Err(fail("the table has no name".to_string()));
    }

    for (idx, column) in table.columns.iter().enumerate() {
        if column.name.is_empty() {
            return Err(fail(format!("column {} has no name", idx + 1)));
        }

        if column.column_type.is_empty() {
            return Err(fail(format!("column '{}' has no type", column.name)));
        }

        if column.column_key.is_empty() {
            return Err(fail(format!("column '{}' has no key indicator", column.name)));
        }
    }

    Ok(())
}

fn write_cell(
    grid: &mut Table,
    table: &TableSchema,
    row: usize,
    column: usize,
    text: &str,
    font: &str,
) -> Result<()> {
    let cell = grid.cell_mut(row, column).ok_or_else(|| TriTabulaError::Render {
        table: table.table_name.clone(),
        reason: format!("cell ({}, {}) is outside the grid", row, column),
    })?;

    cell.add_paragraph()
        .set_alignment(Alignment::Center)
        .set_line_spacing(LINE_SPACING)
        .add_run()
        .add_text(text)
        .set_bold(false)
        .set_font_size(FONT_SIZE)
        .set_font_family(font);

    Ok(())
}

fn apply_three_line_borders(grid: &mut Table, table: &TableSchema) -> Result<()> {
    let heavy_rule = Border::new(BorderStyle::Single, HEAVY_RULE_SIZE, RULE_COLOR);
    let medium_rule = Border::new(BorderStyle::Single, MEDIUM_RULE_SIZE, RULE_COLOR);
    let no_rule = Border::new(BorderStyle::None, 0, RULE_COLOR);

    grid.set_borders(BorderSide::All, Border::none())
        .set_borders(BorderSide::Top, heavy_rule.clone());

    let header = grid.row_mut(0).ok_or_else(|| TriTabulaError::Render {
        table: table.table_name.clone(),
        reason: "the grid has no header row".to_string(),
    })?;
    for cell in &mut header.cells {
        cell.set_borders(BorderSide::Bottom, medium_rule.clone());
    }

    grid.set_borders(BorderSide::Bottom, heavy_rule)
        .set_borders(BorderSide::InsideHorizontal, no_rule.clone())
        .set_borders(BorderSide::InsideVertical, no_rule);

    Ok(())
}

#[cfg(test)]
mod tests;
