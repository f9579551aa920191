use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::layout::{Block, PagedDocument};
use crate::styles::DocumentStyles;

const CALLOUT_COLOR: &str = "C00000";

/// Generate a DOCX document from a paged layout.
///
/// Page breaks follow the layout's pages so both export formats break in
/// the same places. Consecutive table rows become one Word table.
pub fn generate_docx(paged: &PagedDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.section_size))
        .add_style(heading_style("Heading2", "heading 2", styles.block_size));

    for (index, page) in paged.pages.iter().enumerate() {
        if index > 0 {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        }

        let mut rows: Vec<TableRow> = Vec::new();
        for placed in &page.blocks {
            match &placed.block {
                Block::TableHeader { cells, .. } => {
                    docx = flush_table(docx, &mut rows);
                    rows.push(table_row(cells, true, styles));
                }
                Block::TableRow { cells, .. } => rows.push(table_row(cells, false, styles)),
                other => {
                    docx = flush_table(docx, &mut rows);
                    docx = add_block(docx, other, styles);
                }
            }
        }
        docx = flush_table(docx, &mut rows);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn add_block(docx: Docx, block: &Block, styles: &DocumentStyles) -> Docx {
    match block {
        Block::Title(text) => docx.add_paragraph(heading_paragraph(text, "Title", styles)),
        Block::SectionHeading(text) => docx.add_paragraph(heading_paragraph(text, "Heading1", styles)),
        Block::BlockHeading(text) => docx.add_paragraph(heading_paragraph(text, "Heading2", styles)),
        Block::HeaderLine { label, value } => docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(body_run(&format!("{label}: "), styles).bold())
                .add_run(body_run(value, styles)),
        ),
        Block::Paragraph(text) => docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(body_run(text, styles)),
        ),
        Block::Callout { title, lines } => {
            let mut docx = docx.add_paragraph(
                Paragraph::new().add_run(body_run(title, styles).bold().color(CALLOUT_COLOR)),
            );
            for line in lines {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(body_run(&format!("\u{2022} {line}"), styles).color(CALLOUT_COLOR)),
                );
            }
            docx
        }
        Block::Spacer => docx.add_paragraph(Paragraph::new()),
        // Rows are gathered into tables by the caller.
        Block::TableHeader { .. } | Block::TableRow { .. } => docx,
    }
}

fn flush_table(docx: Docx, rows: &mut Vec<TableRow>) -> Docx {
    if rows.is_empty() {
        docx
    } else {
        docx.add_table(Table::new(std::mem::take(rows)))
    }
}

fn table_row(cells: &[String], header: bool, styles: &DocumentStyles) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .map(|text| {
                let run = Run::new()
                    .add_text(text)
                    .size(half_points(styles.table_size))
                    .fonts(RunFonts::new().ascii(&styles.body_font));
                let run = if header { run.bold() } else { run };
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect(),
    )
}

fn heading_style(style_id: &str, name: &str, size_pt: f32) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(half_points(size_pt))
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(styles.body_size))
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

// OOXML uses half-points
fn half_points(size_pt: f32) -> usize {
    (size_pt * 2.0).round().max(1.0) as usize
}
