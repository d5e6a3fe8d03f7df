//! Serialization of a [`ReportDocument`] into the parts of a WordprocessingML package.

use crate::document::border::Borders;
use crate::document::footer::Footer;
use crate::document::paragraph::{Paragraph, Run};
use crate::document::table::{Table, TableWidth};
use crate::document::xml_builder::XmlBuilder;
use crate::document::{Block, ReportDocument};

const WORDPROCESSING_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const RELATIONSHIP_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PACKAGE_RELATIONSHIP_NAMESPACE: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// A4 in twentieths of a point.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN_VERTICAL: u32 = 1440;
const PAGE_MARGIN_HORIZONTAL: u32 = 1800;
const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN_HORIZONTAL;

/// Height of a single line, line spacing is expressed in 240ths of a line.
const SINGLE_LINE: f64 = 240.0;

pub(crate) const FOOTER_RELATIONSHIP_ID: &str = "rId1";

pub(crate) fn document_xml(document: &ReportDocument) -> String {
    let mut xml = XmlBuilder::new();
    xml.open(
        "w:document",
        &[("xmlns:w", WORDPROCESSING_NAMESPACE), ("xmlns:r", RELATIONSHIP_NAMESPACE)],
    )
    .open("w:body", &[]);

    for block in document.blocks() {
        match block {
            Block::Paragraph(paragraph) => write_paragraph(&mut xml, paragraph),
            Block::Table(table) => write_table(&mut xml, table),
        }
    }

    xml.open("w:sectPr", &[]);
    if let Some(footer) = document.footer() {
        xml.empty(
            "w:footerReference",
            &[("w:type", footer.kind.ooxml_value()), ("r:id", FOOTER_RELATIONSHIP_ID)],
        );
    }
    let page_width = PAGE_WIDTH.to_string();
    let page_height = PAGE_HEIGHT.to_string();
    let vertical_margin = PAGE_MARGIN_VERTICAL.to_string();
    let horizontal_margin = PAGE_MARGIN_HORIZONTAL.to_string();
    xml.empty(
        "w:pgSz",
        &[("w:w", page_width.as_str()), ("w:h", page_height.as_str())],
    )
    .empty(
        "w:pgMar",
        &[
            ("w:top", vertical_margin.as_str()),
            ("w:right", horizontal_margin.as_str()),
            ("w:bottom", vertical_margin.as_str()),
            ("w:left", horizontal_margin.as_str()),
            ("w:header", "851"),
            ("w:footer", "992"),
            ("w:gutter", "0"),
        ],
    )
    .close("w:sectPr")
    .close("w:body")
    .close("w:document");

    xml.build()
}

pub(crate) fn footer_xml(footer: &Footer) -> String {
    let mut xml = XmlBuilder::new();
    xml.open(
        "w:ftr",
        &[("xmlns:w", WORDPROCESSING_NAMESPACE), ("xmlns:r", RELATIONSHIP_NAMESPACE)],
    );

    for paragraph in &footer.paragraphs {
        write_paragraph(&mut xml, paragraph);
    }

    // A footer part has to contain at least one paragraph
    if footer.paragraphs.is_empty() {
        xml.empty("w:p", &[]);
    }

    xml.close("w:ftr");
    xml.build()
}

pub(crate) fn content_types_xml(has_footer: bool) -> String {
    let mut xml = XmlBuilder::new();
    xml.open(
        "Types",
        &[("xmlns", "http://schemas.openxmlformats.org/package/2006/content-types")],
    )
    .empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )
    .empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])
    .empty(
        "Override",
        &[
            ("PartName", "/word/document.xml"),
            (
                "ContentType",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            ),
        ],
    );

    if has_footer {
        xml.empty(
            "Override",
            &[
                ("PartName", "/word/footer1.xml"),
                (
                    "ContentType",
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml",
                ),
            ],
        );
    }

    xml.empty(
        "Override",
        &[
            ("PartName", "/docProps/core.xml"),
            ("ContentType", "application/vnd.openxmlformats-package.core-properties+xml"),
        ],
    )
    .empty(
        "Override",
        &[
            ("PartName", "/docProps/app.xml"),
            (
                "ContentType",
                "application/vnd.openxmlformats-officedocument.extended-properties+xml",
            ),
        ],
    )
    .close("Types");

    xml.build()
}

pub(crate) fn package_relationships_xml() -> String {
    let mut xml = XmlBuilder::new();
    xml.open("Relationships", &[("xmlns", PACKAGE_RELATIONSHIP_NAMESPACE)])
        .empty(
            "Relationship",
            &[
                ("Id", "rId1"),
                (
                    "Type",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
                ),
                ("Target", "word/document.xml"),
            ],
        )
        .empty(
            "Relationship",
            &[
                ("Id", "rId2"),
                (
                    "Type",
                    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
                ),
                ("Target", "docProps/core.xml"),
            ],
        )
        .empty(
            "Relationship",
            &[
                ("Id", "rId3"),
                (
                    "Type",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties",
                ),
                ("Target", "docProps/app.xml"),
            ],
        )
        .close("Relationships");

    xml.build()
}

pub(crate) fn document_relationships_xml(has_footer: bool) -> String {
    let mut xml = XmlBuilder::new();
    xml.open("Relationships", &[("xmlns", PACKAGE_RELATIONSHIP_NAMESPACE)]);

    if has_footer {
        xml.empty(
            "Relationship",
            &[
                ("Id", FOOTER_RELATIONSHIP_ID),
                (
                    "Type",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer",
                ),
                ("Target", "footer1.xml"),
            ],
        );
    }

    xml.close("Relationships");
    xml.build()
}

pub(crate) fn core_properties_xml(document: &ReportDocument) -> String {
    let properties = &document.properties;

    let mut xml = XmlBuilder::new();
    xml.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )
    .element("dc:title", &[], &properties.title)
    .element("dc:creator", &[], &properties.creator)
    .element("dc:description", &[], &properties.description)
    .close("cp:coreProperties");

    xml.build()
}

pub(crate) fn app_properties_xml(document: &ReportDocument) -> String {
    let mut xml = XmlBuilder::new();
    xml.open(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )
    .element("Application", &[], &document.properties.creator)
    .close("Properties");

    xml.build()
}

fn write_paragraph(xml: &mut XmlBuilder, paragraph: &Paragraph) {
    xml.open("w:p", &[]);

    let has_spacing = paragraph.spacing_before.is_some()
        || paragraph.spacing_after.is_some()
        || paragraph.line_spacing.is_some();

    if has_spacing || paragraph.alignment.is_some() {
        xml.open("w:pPr", &[]);

        if has_spacing {
            let before = paragraph.spacing_before.map(|v| v.to_string());
            let after = paragraph.spacing_after.map(|v| v.to_string());
            let line = paragraph
                .line_spacing
                .map(|v| ((v * SINGLE_LINE).round() as u32).to_string());

            let mut attributes = Vec::new();
            if let Some(before) = &before {
                attributes.push(("w:before", before.as_str()));
            }
            if let Some(after) = &after {
                attributes.push(("w:after", after.as_str()));
            }
            if let Some(line) = &line {
                attributes.push(("w:line", line.as_str()));
                attributes.push(("w:lineRule", "auto"));
            }
            xml.empty("w:spacing", &attributes);
        }

        if let Some(alignment) = paragraph.alignment {
            xml.empty("w:jc", &[("w:val", alignment.ooxml_value())]);
        }

        xml.close("w:pPr");
    }

    for run in &paragraph.runs {
        write_run(xml, run);
    }

    xml.close("w:p");
}

fn write_run(xml: &mut XmlBuilder, run: &Run) {
    match run.field {
        None => {
            write_text_run(xml, run);
        }
        Some(field) => {
            write_field_char(xml, run, "begin");

            xml.open("w:r", &[]);
            write_run_properties(xml, run);
            xml.element("w:instrText", &[("xml:space", "preserve")], field.instruction())
                .close("w:r");

            write_field_char(xml, run, "separate");
            write_text_run(xml, run);
            write_field_char(xml, run, "end");
        }
    }
}

fn write_text_run(xml: &mut XmlBuilder, run: &Run) {
    xml.open("w:r", &[]);
    write_run_properties(xml, run);
    xml.element("w:t", &[("xml:space", "preserve")], &run.text)
        .close("w:r");
}

fn write_field_char(xml: &mut XmlBuilder, run: &Run, kind: &str) {
    xml.open("w:r", &[]);
    write_run_properties(xml, run);
    xml.empty("w:fldChar", &[("w:fldCharType", kind)]).close("w:r");
}

fn write_run_properties(xml: &mut XmlBuilder, run: &Run) {
    if run.font_family.is_none() && !run.bold && run.font_size.is_none() {
        return;
    }

    xml.open("w:rPr", &[]);

    if let Some(family) = &run.font_family {
        xml.empty(
            "w:rFonts",
            &[
                ("w:ascii", family.as_str()),
                ("w:eastAsia", family.as_str()),
                ("w:hAnsi", family.as_str()),
                ("w:cs", family.as_str()),
            ],
        );
    }

    if run.bold {
        xml.empty("w:b", &[]);
    }

    if let Some(size) = run.font_size {
        let size = size.to_string();
        xml.empty("w:sz", &[("w:val", size.as_str())])
            .empty("w:szCs", &[("w:val", size.as_str())]);
    }

    xml.close("w:rPr");
}

fn write_table(xml: &mut XmlBuilder, table: &Table) {
    xml.open("w:tbl", &[]).open("w:tblPr", &[]);

    match table.width {
        Some(TableWidth::Percent(percent)) => {
            // Percentages are stored in fiftieths of a percent
            let width = (percent * 50).to_string();
            xml.empty("w:tblW", &[("w:w", width.as_str()), ("w:type", "pct")]);
        }
        None => {
            xml.empty("w:tblW", &[("w:w", "0"), ("w:type", "auto")]);
        }
    }

    if let Some(alignment) = table.alignment {
        xml.empty("w:jc", &[("w:val", alignment.ooxml_value())]);
    }

    write_borders(xml, "w:tblBorders", &table.borders);

    xml.empty("w:tblLayout", &[("w:type", "fixed")])
        .close("w:tblPr");

    let column_width = column_width(table).to_string();

    xml.open("w:tblGrid", &[]);
    for _ in 0..table.column_count() {
        xml.empty("w:gridCol", &[("w:w", column_width.as_str())]);
    }
    xml.close("w:tblGrid");

    for row in table.rows() {
        xml.open("w:tr", &[]);

        for cell in &row.cells {
            xml.open("w:tc", &[])
                .open("w:tcPr", &[])
                .empty("w:tcW", &[("w:w", column_width.as_str()), ("w:type", "dxa")]);
            write_borders(xml, "w:tcBorders", &cell.borders);
            xml.close("w:tcPr");

            for paragraph in &cell.paragraphs {
                write_paragraph(xml, paragraph);
            }

            // A cell has to end with a paragraph
            if cell.paragraphs.is_empty() {
                xml.empty("w:p", &[]);
            }

            xml.close("w:tc");
        }

        xml.close("w:tr");
    }

    xml.close("w:tbl");
}

fn column_width(table: &Table) -> u32 {
    let total = match table.width {
        Some(TableWidth::Percent(percent)) => TEXT_WIDTH * percent / 100,
        None => TEXT_WIDTH,
    };

    total / (table.column_count().max(1) as u32)
}

fn write_borders(xml: &mut XmlBuilder, tag: &str, borders: &Borders) {
    if borders.is_empty() {
        return;
    }

    xml.open(tag, &[]);

    for (side_tag, border) in borders.sides() {
        let Some(border) = border else {
            continue;
        };

        let size = border.size.to_string();
        let color = if border.color.is_empty() {
            "auto"
        } else {
            border.color.as_str()
        };

        xml.empty(
            side_tag,
            &[
                ("w:val", border.style.ooxml_value()),
                ("w:sz", size.as_str()),
                ("w:space", "0"),
                ("w:color", color),
            ],
        );
    }

    xml.close(tag);
}
