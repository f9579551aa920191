//! Page layout for exported reports.
//!
//! A report is flattened into a sequence of [`Block`]s and poured onto pages
//! while tracking the running vertical offset. Text wraps, and a block's
//! height counts its wrapped lines. A block that would overflow the page
//! starts a new one, so table rows are never split. Headings are kept with
//! the block after them, and a table that continues onto a new page repeats
//! its header row.

use progress_report::document::{
    GROWTH_CHECKS_TITLE, LEARNING_TASKS_TITLE, MAX_TRIALS_PER_ROW, NO_GROWTH_CHECKS,
    NO_LEARNING_TASKS, ReportDocument,
};

use crate::styles::DocumentStyles;
use crate::text::{text_width_mm, wrap_text};

pub const REPORT_TITLE: &str = "Progress Report";
pub const RED_FLAGS_TITLE: &str = "Red flags observed";
pub const PROMPT_KEY_TITLE: &str = "Prompt Key";

const SECTION_GAP_MM: f32 = 3.0;
const BLOCK_GAP_MM: f32 = 2.0;
const CELL_PADDING_MM: f32 = 1.5;
const SPACER_MM: f32 = 4.0;
const LABEL_GAP_MM: f32 = 2.0;

/// Space kept clear at the right edge of every table cell.
pub const CELL_GAP_MM: f32 = 1.0;
/// Indent of callout lines under their title.
pub const CALLOUT_INDENT_MM: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Step, ten trial columns, result.
    Trials,
    /// Skill, achieved.
    Skills,
    /// Symbol, meaning.
    Legend,
}

impl TableKind {
    /// Column widths as fractions of the usable page width.
    pub fn column_fractions(self) -> Vec<f32> {
        match self {
            TableKind::Trials => {
                let mut cols = vec![0.34];
                cols.extend(std::iter::repeat_n(0.052, MAX_TRIALS_PER_ROW));
                cols.push(0.14);
                cols
            }
            TableKind::Skills => vec![0.8, 0.2],
            TableKind::Legend => vec![0.15, 0.85],
        }
    }

    pub fn column_widths_mm(self, styles: &DocumentStyles) -> Vec<f32> {
        let width = styles.usable_width_mm();
        self.column_fractions().into_iter().map(|f| width * f).collect()
    }

    /// Each cell's text wrapped to its column.
    pub fn wrap_cells(self, cells: &[String], styles: &DocumentStyles) -> Vec<Vec<String>> {
        cells
            .iter()
            .zip(self.column_widths_mm(styles))
            .map(|(cell, column)| wrap_text(cell, column - CELL_GAP_MM, styles.table_size))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    HeaderLine { label: String, value: String },
    SectionHeading(String),
    BlockHeading(String),
    Paragraph(String),
    TableHeader { kind: TableKind, cells: Vec<String> },
    TableRow { kind: TableKind, cells: Vec<String> },
    Callout { title: String, lines: Vec<String> },
    Spacer,
}

impl Block {
    pub fn height_mm(&self, styles: &DocumentStyles) -> f32 {
        let width = styles.usable_width_mm();
        let lines = |text: &str, width: f32, size: f32| wrap_text(text, width, size).len() as f32;

        match self {
            Block::Title(text) => {
                lines(text, width, styles.title_size) * styles.line_height_mm(styles.title_size)
                    + BLOCK_GAP_MM
            }
            Block::HeaderLine { label, value } => {
                let offset = header_value_offset_mm(label, styles);
                lines(value, width - offset, styles.body_size)
                    * styles.line_height_mm(styles.body_size)
            }
            Block::Paragraph(text) => {
                lines(text, width, styles.body_size) * styles.line_height_mm(styles.body_size)
            }
            Block::SectionHeading(text) => {
                lines(text, width, styles.section_size)
                    * styles.line_height_mm(styles.section_size)
                    + SECTION_GAP_MM
            }
            Block::BlockHeading(text) => {
                lines(text, width, styles.block_size) * styles.line_height_mm(styles.block_size)
                    + BLOCK_GAP_MM
            }
            Block::TableHeader { kind, cells } | Block::TableRow { kind, cells } => {
                let tallest = kind
                    .wrap_cells(cells, styles)
                    .iter()
                    .map(Vec::len)
                    .max()
                    .unwrap_or(1);
                tallest as f32 * styles.line_height_mm(styles.table_size) + CELL_PADDING_MM
            }
            Block::Callout { title, lines: items } => {
                let mut count = lines(title, width, styles.body_size);
                for item in items {
                    count += lines(&callout_line(item), width - CALLOUT_INDENT_MM, styles.body_size);
                }
                count * styles.line_height_mm(styles.body_size) + BLOCK_GAP_MM
            }
            Block::Spacer => SPACER_MM,
        }
    }

    /// Blocks that must not be the last thing on a page.
    fn keeps_with_next(&self) -> bool {
        matches!(
            self,
            Block::Title(_)
                | Block::SectionHeading(_)
                | Block::BlockHeading(_)
                | Block::TableHeader { .. }
        )
    }
}

/// A block positioned on a page. `y_mm` is measured down from the top of
/// the content area.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub y_mm: f32,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub blocks: Vec<PlacedBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedDocument {
    pub title: String,
    pub pages: Vec<Page>,
}

impl PagedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Flatten a report into blocks, in document order.
pub fn document_blocks(doc: &ReportDocument) -> Vec<Block> {
    let header = &doc.header;
    let student = match &header.student_class {
        Some(class) => format!("{} ({class})", header.student_name),
        None => header.student_name.clone(),
    };

    let mut blocks = vec![
        Block::Title(REPORT_TITLE.to_string()),
        header_line("Organization", &header.organization),
        header_line("Student", &student),
        header_line("Period", &header.period_label),
        header_line(
            "Generated",
            &header.generated_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
        ),
        Block::Spacer,
        Block::SectionHeading(LEARNING_TASKS_TITLE.to_string()),
    ];

    if doc.learning_tasks.is_empty() {
        blocks.push(Block::Paragraph(NO_LEARNING_TASKS.to_string()));
    }
    for task in &doc.learning_tasks {
        blocks.push(Block::BlockHeading(task.target_behavior.clone()));
        blocks.push(Block::Paragraph(format!(
            "Date: {}   Method: {}   Independence: {}%",
            task.date, task.method, task.independence_score
        )));

        let mut header_cells = vec!["Step".to_string()];
        header_cells.extend((1..=MAX_TRIALS_PER_ROW).map(|n| n.to_string()));
        header_cells.push("Result".to_string());
        blocks.push(Block::TableHeader {
            kind: TableKind::Trials,
            cells: header_cells,
        });

        for row in &task.rows {
            let mut cells = vec![row.step.clone()];
            cells.extend((0..MAX_TRIALS_PER_ROW).map(|i| {
                row.trials
                    .get(i)
                    .map(|t| t.symbol().to_string())
                    .unwrap_or_default()
            }));
            cells.push(if row.pass { "Pass" } else { "Fail" }.to_string());
            blocks.push(Block::TableRow {
                kind: TableKind::Trials,
                cells,
            });
        }
        blocks.push(Block::Spacer);
    }

    if !doc.legend.is_empty() {
        blocks.push(Block::BlockHeading(PROMPT_KEY_TITLE.to_string()));
        blocks.push(Block::TableHeader {
            kind: TableKind::Legend,
            cells: vec!["Symbol".to_string(), "Meaning".to_string()],
        });
        for entry in &doc.legend {
            blocks.push(Block::TableRow {
                kind: TableKind::Legend,
                cells: vec![entry.symbol.clone(), entry.description.clone()],
            });
        }
        blocks.push(Block::Spacer);
    }

    blocks.push(Block::SectionHeading(GROWTH_CHECKS_TITLE.to_string()));
    if doc.growth_checks.is_empty() {
        blocks.push(Block::Paragraph(NO_GROWTH_CHECKS.to_string()));
    }
    for check in &doc.growth_checks {
        blocks.push(Block::BlockHeading(format!(
            "{}: {}%",
            check.template_label, check.overall_percentage
        )));
        blocks.push(Block::Paragraph(format!("Date: {}", check.date)));
        for section in &check.sections {
            blocks.push(Block::TableHeader {
                kind: TableKind::Skills,
                cells: vec![section.title.clone(), "Achieved".to_string()],
            });
            for row in &section.rows {
                blocks.push(Block::TableRow {
                    kind: TableKind::Skills,
                    cells: vec![
                        row.skill.clone(),
                        if row.achieved { "Yes" } else { "No" }.to_string(),
                    ],
                });
            }
        }
        if check.has_red_flags() {
            blocks.push(Block::Callout {
                title: RED_FLAGS_TITLE.to_string(),
                lines: check.red_flags.clone(),
            });
        }
        blocks.push(Block::Spacer);
    }

    blocks
}

/// Pour blocks onto pages.
pub fn paginate(blocks: &[Block], styles: &DocumentStyles) -> PagedDocument {
    let usable = styles.usable_height_mm();
    let mut pages = vec![Page {
        number: 1,
        blocks: Vec::new(),
    }];
    let mut cursor = 0.0_f32;
    let mut open_table: Option<&Block> = None;

    for (i, block) in blocks.iter().enumerate() {
        let height = block.height_mm(styles);
        let mut needed = height;
        if block.keeps_with_next()
            && let Some(next) = blocks.get(i + 1)
        {
            needed += next.height_mm(styles);
        }

        if cursor > 0.0 && cursor + needed > usable {
            pages.push(Page {
                number: pages.len() + 1,
                blocks: Vec::new(),
            });
            cursor = 0.0;

            if let (Block::TableRow { .. }, Some(table_header)) = (block, open_table) {
                place(&mut pages, cursor, table_header);
                cursor += table_header.height_mm(styles);
            }
        }

        match block {
            Block::TableHeader { .. } => open_table = Some(block),
            Block::TableRow { .. } => {}
            _ => open_table = None,
        }

        place(&mut pages, cursor, block);
        cursor += height;
    }

    PagedDocument {
        title: REPORT_TITLE.to_string(),
        pages,
    }
}

/// Lay out a report document for export.
pub fn layout(doc: &ReportDocument, styles: &DocumentStyles) -> PagedDocument {
    let mut paged = paginate(&document_blocks(doc), styles);
    paged.title = format!("{REPORT_TITLE}: {}", doc.header.student_name);
    paged
}

fn place(pages: &mut [Page], y_mm: f32, block: &Block) {
    if let Some(page) = pages.last_mut() {
        page.blocks.push(PlacedBlock {
            y_mm,
            block: block.clone(),
        });
    }
}

/// Where a header line's value starts, measured from the left margin.
pub fn header_value_offset_mm(label: &str, styles: &DocumentStyles) -> f32 {
    text_width_mm(&format!("{label}:"), styles.body_size) + LABEL_GAP_MM
}

pub fn callout_line(item: &str) -> String {
    format!("- {item}")
}

fn header_line(label: &str, value: &str) -> Block {
    Block::HeaderLine {
        label: label.to_string(),
        value: value.to_string(),
    }
}
