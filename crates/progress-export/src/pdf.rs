use printpdf::image_crate::GenericImageView;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfLayerReference, Rgb,
};
use tracing::warn;

use crate::error::ExportError;
use crate::layout::{
    Block, CALLOUT_INDENT_MM, PagedDocument, PlacedBlock, TableKind, callout_line,
    header_value_offset_mm,
};
use crate::styles::DocumentStyles;
use crate::text::wrap_text;

const LAYER: &str = "content";

const CALLOUT_RED: (f32, f32, f32) = (0.75, 0.0, 0.0);

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Generate a PDF from a paged layout.
///
/// Each layout page becomes one PDF page, with a "Page i of n" footer. The
/// logo, when given, sits in the top right corner of the first page; a logo
/// that cannot be decoded is skipped.
pub fn generate_pdf(
    paged: &PagedDocument,
    styles: &DocumentStyles,
    logo: Option<&[u8]>,
) -> Result<Vec<u8>, ExportError> {
    let width = Mm(styles.page_width_mm);
    let height = Mm(styles.page_height_mm);
    let (doc, first_page, first_layer) = PdfDocument::new(&paged.title, width, height, LAYER);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    let total = paged.page_count();
    let mut first = Some((first_page, first_layer));

    for page in &paged.pages {
        let (page_index, layer_index) = match first.take() {
            Some(indices) => indices,
            None => doc.add_page(width, height, LAYER),
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        if page.number == 1
            && let Some(bytes) = logo
        {
            draw_logo(&layer, bytes, styles);
        }

        for placed in &page.blocks {
            draw_block(&layer, &fonts, styles, placed);
        }

        layer.use_text(
            format!("Page {} of {total}", page.number),
            styles.table_size,
            Mm(styles.margin_mm),
            Mm(styles.margin_mm),
            &fonts.regular,
        );
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_block(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    styles: &DocumentStyles,
    placed: &PlacedBlock,
) {
    let left = styles.margin_mm;
    let top = styles.page_height_mm - styles.margin_mm - placed.y_mm;
    let width = styles.usable_width_mm();

    match &placed.block {
        Block::Title(text) => {
            let lines = wrap_text(text, width, styles.title_size);
            draw_lines(layer, &fonts.bold, styles.title_size, styles, &lines, left, top);
        }
        Block::HeaderLine { label, value } => {
            let line = styles.line_height_mm(styles.body_size);
            layer.use_text(
                format!("{label}:"),
                styles.body_size,
                Mm(left),
                Mm(top - line * 0.8),
                &fonts.bold,
            );
            let offset = header_value_offset_mm(label, styles);
            let lines = wrap_text(value, width - offset, styles.body_size);
            draw_lines(layer, &fonts.regular, styles.body_size, styles, &lines, left + offset, top);
        }
        Block::SectionHeading(text) => {
            let lines = wrap_text(text, width, styles.section_size);
            draw_lines(layer, &fonts.bold, styles.section_size, styles, &lines, left, top);
        }
        Block::BlockHeading(text) => {
            let lines = wrap_text(text, width, styles.block_size);
            draw_lines(layer, &fonts.bold, styles.block_size, styles, &lines, left, top);
        }
        Block::Paragraph(text) => {
            let lines = wrap_text(text, width, styles.body_size);
            draw_lines(layer, &fonts.regular, styles.body_size, styles, &lines, left, top);
        }
        Block::TableHeader { kind, cells } => {
            draw_row(layer, &fonts.bold, styles, *kind, cells, top);
        }
        Block::TableRow { kind, cells } => {
            draw_row(layer, &fonts.regular, styles, *kind, cells, top);
        }
        Block::Callout { title, lines: items } => {
            let (r, g, b) = CALLOUT_RED;
            layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));

            let title_lines = wrap_text(title, width, styles.body_size);
            let mut y = draw_lines(layer, &fonts.bold, styles.body_size, styles, &title_lines, left, top);
            for item in items {
                let wrapped = wrap_text(&callout_line(item), width - CALLOUT_INDENT_MM, styles.body_size);
                y = draw_lines(
                    layer,
                    &fonts.regular,
                    styles.body_size,
                    styles,
                    &wrapped,
                    left + CALLOUT_INDENT_MM,
                    y,
                );
            }

            layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        }
        Block::Spacer => {}
    }
}

/// Draw wrapped lines downward from `top`. Returns the y just below the
/// last line.
fn draw_lines(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size_pt: f32,
    styles: &DocumentStyles,
    lines: &[String],
    x: f32,
    top: f32,
) -> f32 {
    let line = styles.line_height_mm(size_pt);
    let mut y = top;
    for text in lines {
        if !text.is_empty() {
            layer.use_text(text, size_pt, Mm(x), Mm(y - line * 0.8), font);
        }
        y -= line;
    }
    y
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    styles: &DocumentStyles,
    kind: TableKind,
    cells: &[String],
    top: f32,
) {
    let mut x = styles.margin_mm;
    for (lines, column) in kind
        .wrap_cells(cells, styles)
        .iter()
        .zip(kind.column_widths_mm(styles))
    {
        draw_lines(layer, font, styles.table_size, styles, lines, x, top);
        x += column;
    }
}

fn draw_logo(layer: &PdfLayerReference, bytes: &[u8], styles: &DocumentStyles) {
    let decoded = match printpdf::image_crate::load_from_memory(bytes) {
        Ok(image) => image,
        Err(e) => {
            warn!(error = %e, "logo could not be decoded, exporting without it");
            return;
        }
    };
    if decoded.width() == 0 || styles.logo_width_mm <= 0.0 {
        return;
    }

    // Scale through the DPI so the logo spans exactly `logo_width_mm`.
    let dpi = decoded.width() as f32 * 25.4 / styles.logo_width_mm;
    let height_mm = decoded.height() as f32 * 25.4 / dpi;

    Image::from_dynamic_image(&decoded).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(
                styles.page_width_mm - styles.margin_mm - styles.logo_width_mm
            )),
            translate_y: Some(Mm(styles.page_height_mm - styles.margin_mm - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

fn pdf_error(e: impl std::fmt::Debug) -> ExportError {
    ExportError::Pdf(format!("{e:?}"))
}
