use super::*;
use crate::default;
use crate::document::{Block, TableCell};

fn column(name: &str, column_type: &str) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        column_type: column_type.to_string(),
        is_nullable: false,
        column_key: "NONE".to_string(),
        default_value: "NONE".to_string(),
        ..default()
    }
}

fn users_table() -> TableSchema {
    let mut table = TableSchema::new("shop", "users");
    table.columns = vec![
        ColumnInfo {
            column_key: "PRI".to_string(),
            comment: "primary key".to_string(),
            ..column("id", "int")
        },
        ColumnInfo {
            is_nullable: true,
            default_value: "guest".to_string(),
            ..column("name", "varchar")
        },
    ];
    table
}

fn row_texts(table: &Table, row: usize) -> Vec<String> {
    table.rows()[row].cells.iter().map(TableCell::text).collect()
}

fn render(tables: &[TableSchema]) -> ReportDocument {
    ReportRenderer::default().render(tables).unwrap()
}

#[test]
fn renders_users_report() {
    let doc = render(&[users_table()]);

    let blocks = doc.blocks();
    assert_eq!(blocks.len(), 3);

    let Block::Paragraph(title) = &blocks[0] else {
        panic!("expected the table title first, got {:?}", blocks[0]);
    };
    assert_eq!(title.text(), "users");
    assert_eq!(title.alignment, Some(Alignment::Center));
    assert!(title.runs[0].bold);

    let Block::Table(grid) = &blocks[1] else {
        panic!("expected the grid second, got {:?}", blocks[1]);
    };
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 6);
    assert_eq!(
        row_texts(grid, 0),
        vec!["字段名", "类型", "是否为空", "索引", "默认值", "说明"]
    );
    assert_eq!(
        row_texts(grid, 1),
        vec!["id", "int", "否", "PRI", "NULL", "primary key"]
    );
    assert_eq!(
        row_texts(grid, 2),
        vec!["name", "varchar", "是", "NONE", "guest", ""]
    );

    let Block::Paragraph(spacer) = &blocks[2] else {
        panic!("expected a blank paragraph after the grid, got {:?}", blocks[2]);
    };
    assert!(spacer.is_empty());

    let footer = doc.footer().unwrap();
    assert!(footer.has_field(crate::document::FieldCode::Page));
}

#[test]
fn sets_document_properties() {
    let doc = render(&[]);

    assert_eq!(doc.properties.title, "数据库三线表");
    assert_eq!(doc.properties.creator, "TriTabula");
}

#[test]
fn no_tables_still_gives_a_document() {
    let doc = render(&[]);

    assert!(doc.blocks().is_empty());
    assert!(doc.footer().is_some());
}

#[test]
fn table_without_columns_has_only_a_header() {
    let doc = render(&[TableSchema::new("public", "empty")]);

    let grid = doc.tables().next().unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.column_count(), 6);
}

#[test]
fn tables_follow_input_order() {
    let mut orders = TableSchema::new("shop", "orders");
    orders.columns.push(column("id", "bigint"));

    let doc = render(&[orders, users_table()]);

    let titles: Vec<String> = doc
        .blocks()
        .iter()
        .filter_map(|b| match b {
            Block::Paragraph(p) if !p.is_empty() => Some(p.text()),
            _ => None,
        })
        .collect();

    assert_eq!(titles, vec!["orders", "users"]);
    assert_eq!(doc.tables().count(), 2);
}

#[test]
fn empty_default_is_kept_apart_from_missing_default() {
    let mut table = TableSchema::new("public", "settings");
    table.columns = vec![
        ColumnInfo {
            default_value: "".to_string(),
            ..column("note", "text")
        },
        column("value", "text"),
    ];

    let doc = render(&[table]);
    let grid = doc.tables().next().unwrap();

    assert_eq!(grid.cell(1, 4).unwrap().text(), "");
    assert_eq!(grid.cell(2, 4).unwrap().text(), "NULL");
}

#[test]
fn identifiers_use_latin_font() {
    let doc = render(&[users_table()]);
    let grid = doc.tables().next().unwrap();

    let font = |row: usize, col: usize| {
        grid.cell(row, col).unwrap().paragraphs[0].runs[0]
            .font_family
            .clone()
            .unwrap()
    };

    assert_eq!(font(1, 0), LATIN_FONT);
    assert_eq!(font(1, 1), LATIN_FONT);
    assert_eq!(font(1, 2), BODY_FONT);
    assert_eq!(font(0, 0), BODY_FONT);

    let run = &grid.cell(1, 5).unwrap().paragraphs[0].runs[0];
    assert_eq!(run.font_size, Some(FONT_SIZE));
    assert!(!run.bold);
}

#[test]
fn draws_three_lines() {
    let doc = render(&[users_table()]);
    let grid = doc.tables().next().unwrap();

    let heavy = Border::new(BorderStyle::Single, 10, "000000");
    let medium = Border::new(BorderStyle::Single, 4, "000000");

    assert_eq!(grid.borders.get(BorderSide::Top), Some(&heavy));
    assert_eq!(grid.borders.get(BorderSide::Bottom), Some(&heavy));
    assert!(!grid.borders.get(BorderSide::Left).unwrap().is_visible());
    assert!(!grid.borders.get(BorderSide::Right).unwrap().is_visible());
    assert!(!grid.borders.get(BorderSide::InsideHorizontal).unwrap().is_visible());
    assert!(!grid.borders.get(BorderSide::InsideVertical).unwrap().is_visible());

    for cell in &grid.rows()[0].cells {
        assert_eq!(cell.borders.get(BorderSide::Bottom), Some(&medium));
    }

    for row in &grid.rows()[1..] {
        for cell in &row.cells {
            assert!(cell.borders.is_empty());
        }
    }
}

#[test]
fn uses_custom_labels() {
    static ENGLISH: ReportLabels = ReportLabels {
        fields: &[
            (ReportField::ColumnName, "Field"),
            (ReportField::ColumnType, "Type"),
            (ReportField::IsNullable, "Null"),
            (ReportField::ColumnKey, "Key"),
            (ReportField::ColumnDefault, "Default"),
            (ReportField::ColumnComment, "Comment"),
        ],
        yes: "yes",
        no: "no",
    };

    let doc = ReportRenderer::new(&ENGLISH)
        .render(&[users_table()])
        .unwrap();
    let grid = doc.tables().next().unwrap();

    assert_eq!(
        row_texts(grid, 0),
        vec!["Field", "Type", "Null", "Key", "Default", "Comment"]
    );
    assert_eq!(grid.cell(2, 2).unwrap().text(), "yes");
}

#[test]
fn missing_label_is_an_error() {
    static PARTIAL: ReportLabels = ReportLabels {
        fields: &[(ReportField::ColumnName, "Field")],
        yes: "yes",
        no: "no",
    };

    let err = ReportRenderer::new(&PARTIAL)
        .render(&[users_table()])
        .unwrap_err();

    match err {
        TriTabulaError::Render { table, reason } => {
            assert_eq!(table, "users");
            assert_eq!(reason, "no label for field ColumnType");
        }
        e => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn unnamed_table_is_an_error() {
    let err = ReportRenderer::default()
        .render(&[TableSchema::new("public", "")])
        .unwrap_err();

    assert!(matches!(err, TriTabulaError::Render { .. }));
    assert_eq!(err.to_string(), "Cannot render table '': the table has no name");
}

#[test]
fn column_without_type_is_an_error() {
    let mut table = users_table();
    table.columns[1].column_type = String::new();

    let err = ReportRenderer::default().render(&[table]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot render table 'users': column 'name' has no type"
    );
}

#[test]
fn column_without_key_is_an_error() {
    let mut table = users_table();
    table.columns[0].column_key = String::new();

    let err = ReportRenderer::default().render(&[table]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot render table 'users': column 'id' has no key indicator"
    );
}

#[test]
fn column_without_name_is_an_error() {
    let mut table = users_table();
    table.columns[0].name = String::new();

    let err = ReportRenderer::default().render(&[table]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot render table 'users': column 1 has no name"
    );
}

#[test]
fn extracted_rows_render_as_report() {
    let raw = |column_name: &str, column_type: &str, key: &str, nullable: &str, comment: &str| {
        Ok(crate::RawColumnRow {
            schema_name: "shop".to_string(),
            table_name: "users".to_string(),
            column_name: column_name.to_string(),
            column_type: column_type.to_string(),
            column_key: key.to_string(),
            is_nullable: Some(nullable.to_string()),
            column_default: None,
            comment: Some(comment.to_string()),
        })
    };

    let tables = crate::group_columns(vec![
        raw("id", "int", "PRI", "NO", "primary key"),
        raw("name", "varchar", "", "YES", ""),
    ])
    .unwrap();

    let doc = render(&tables);
    let grid = doc.tables().next().unwrap();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 6);
    assert_eq!(
        row_texts(grid, 1),
        vec!["id", "int", "否", "PRI", "NULL", "primary key"]
    );
    assert_eq!(
        row_texts(grid, 2),
        vec!["name", "varchar", "是", "NONE", "NULL", ""]
    );
}

#[test]
fn reported_default_is_shown() {
    let mut table = TableSchema::new("public", "counters");
    table.columns.push(ColumnInfo {
        default_value: "0".to_string(),
        ..column("count", "integer")
    });

    let doc = render(&[table]);

    assert_eq!(doc.tables().next().unwrap().cell(1, 4).unwrap().text(), "0");
}
