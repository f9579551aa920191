mod common;

use progress_export::layout::{
    Block, PagedDocument, REPORT_TITLE, TableKind, document_blocks, layout, paginate,
};
use progress_export::styles::DocumentStyles;
use progress_export::text::{text_width_mm, wrap_text};
use progress_report::document::{NO_GROWTH_CHECKS, NO_LEARNING_TASKS};

use common::{check, document, task};

fn assert_fits(paged: &PagedDocument, styles: &DocumentStyles) {
    let usable = styles.usable_height_mm();
    for page in &paged.pages {
        for placed in &page.blocks {
            let bottom = placed.y_mm + placed.block.height_mm(styles);
            assert!(
                bottom <= usable + 0.001,
                "block {:?} on page {} ends at {bottom} > {usable}",
                placed.block,
                page.number
            );
        }
    }
}

#[test]
fn empty_document_has_no_data_lines_on_one_page() {
    let styles = DocumentStyles::default();
    let paged = layout(&document(vec![], vec![]), &styles);

    assert_eq!(paged.page_count(), 1);
    let blocks: Vec<&Block> = paged.pages[0].blocks.iter().map(|p| &p.block).collect();
    assert_eq!(blocks[0], &Block::Title(REPORT_TITLE.to_string()));
    assert!(blocks.contains(&&Block::Paragraph(NO_LEARNING_TASKS.to_string())));
    assert!(blocks.contains(&&Block::Paragraph(NO_GROWTH_CHECKS.to_string())));
}

#[test]
fn header_block_lists_student_and_period() {
    let blocks = document_blocks(&document(vec![], vec![]));
    assert!(blocks.contains(&Block::HeaderLine {
        label: "Student".to_string(),
        value: "Ada Lovelace (Room 3)".to_string(),
    }));
    assert!(blocks.contains(&Block::HeaderLine {
        label: "Period".to_string(),
        value: "October".to_string(),
    }));
    assert!(blocks.contains(&Block::HeaderLine {
        label: "Generated".to_string(),
        value: "2026-10-16 14:30 UTC".to_string(),
    }));
}

#[test]
fn trial_rows_are_padded_to_ten_columns() {
    let blocks = document_blocks(&document(vec![task(1)], vec![]));
    let row = blocks
        .iter()
        .find_map(|b| match b {
            Block::TableRow {
                kind: TableKind::Trials,
                cells,
            } => Some(cells.clone()),
            _ => None,
        })
        .unwrap();

    assert_eq!(row.len(), 12);
    assert_eq!(row[0], "Step 1");
    assert_eq!(row[1], "FP");
    assert_eq!(row[2], "+");
    assert_eq!(row[3], "");
    assert_eq!(row[11], "Pass");
    assert_eq!(TableKind::Trials.column_fractions().len(), 12);
}

#[test]
fn red_flags_become_a_callout() {
    let blocks = document_blocks(&document(vec![], vec![check(2, &["No babbling"])]));
    assert!(blocks.iter().any(|b| matches!(
        b,
        Block::Callout { lines, .. } if lines == &vec!["No babbling".to_string()]
    )));

    let quiet = document_blocks(&document(vec![], vec![check(2, &[])]));
    assert!(!quiet.iter().any(|b| matches!(b, Block::Callout { .. })));
}

#[test]
fn long_tables_break_across_pages_without_overflow() {
    let styles = DocumentStyles::default();
    let paged = layout(&document(vec![task(120)], vec![check(80, &["x"])]), &styles);

    assert!(paged.page_count() > 2);
    assert_fits(&paged, &styles);
    for (i, page) in paged.pages.iter().enumerate() {
        assert_eq!(page.number, i + 1);
        assert!(!page.blocks.is_empty());
    }
}

#[test]
fn continued_tables_repeat_their_header() {
    let styles = DocumentStyles::default();
    let paged = layout(&document(vec![task(120)], vec![]), &styles);

    for page in &paged.pages[1..] {
        let first = &page.blocks[0].block;
        if let Some(second) = page.blocks.get(1)
            && matches!(second.block, Block::TableRow { kind: TableKind::Trials, .. })
        {
            assert!(matches!(
                first,
                Block::TableHeader {
                    kind: TableKind::Trials,
                    ..
                }
            ));
        }
        assert!(!matches!(first, Block::TableRow { .. }));
    }
}

#[test]
fn headings_never_end_a_page() {
    let styles = DocumentStyles::default();
    let paged = layout(
        &document(vec![task(30), task(30), task(30)], vec![check(25, &[]), check(25, &[])]),
        &styles,
    );

    for page in &paged.pages[..paged.pages.len() - 1] {
        let last = &page.blocks[page.blocks.len() - 1].block;
        assert!(
            !matches!(
                last,
                Block::Title(_)
                    | Block::SectionHeading(_)
                    | Block::BlockHeading(_)
                    | Block::TableHeader { .. }
            ),
            "page {} ends with {last:?}",
            page.number
        );
    }
}

#[test]
fn pagination_is_deterministic() {
    let styles = DocumentStyles::default();
    let doc = document(vec![task(60)], vec![check(40, &["flag"])]);
    let blocks = document_blocks(&doc);
    assert_eq!(paginate(&blocks, &styles), paginate(&blocks, &styles));
}

#[test]
fn smaller_pages_need_more_of_them() {
    let doc = document(vec![task(60)], vec![]);
    let a4 = layout(&doc, &DocumentStyles::default());
    let small = DocumentStyles {
        page_height_mm: 148.0,
        ..DocumentStyles::default()
    };
    let a5 = layout(&doc, &small);
    assert!(a5.page_count() > a4.page_count());
    assert_fits(&a5, &small);
}

#[test]
fn wrap_text_breaks_at_spaces_and_splits_long_words() {
    assert_eq!(wrap_text("short", 100.0, 10.0), vec!["short".to_string()]);
    assert_eq!(wrap_text("", 100.0, 10.0), vec![String::new()]);

    let lines = wrap_text("the quick brown fox jumps over the lazy dog", 20.0, 10.0);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| text_width_mm(l, 10.0) <= 20.0));
    assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");

    let long = "x".repeat(200);
    let pieces = wrap_text(&long, 20.0, 10.0);
    assert!(pieces.iter().all(|l| text_width_mm(l, 10.0) <= 20.0));
    assert_eq!(pieces.concat(), long);
}

#[test]
fn long_step_text_wraps_instead_of_being_cut() {
    let styles = DocumentStyles::default();
    let step = "Touch the picture card when it is named aloud";
    let mut cells = vec![step.to_string()];
    cells.extend(std::iter::repeat_n(String::new(), 10));
    cells.push("Pass".to_string());

    let wrapped = TableKind::Trials.wrap_cells(&cells, &styles);
    assert!(wrapped[0].len() > 1);
    assert_eq!(wrapped[0].join(" "), step);

    let short = Block::TableRow {
        kind: TableKind::Trials,
        cells: {
            let mut c = cells.clone();
            c[0] = "Step 1".to_string();
            c
        },
    };
    let tall = Block::TableRow {
        kind: TableKind::Trials,
        cells,
    };
    assert!(tall.height_mm(&styles) > short.height_mm(&styles));
}

#[test]
fn tall_rows_still_paginate_without_overflow() {
    let styles = DocumentStyles::default();
    let mut long = task(80);
    for row in &mut long.rows {
        row.step = "Touch the picture card when it is named aloud by the teacher".to_string();
    }
    let paged = layout(&document(vec![long], vec![]), &styles);

    assert!(paged.page_count() > 2);
    assert_fits(&paged, &styles);
}
