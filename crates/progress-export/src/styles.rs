use serde::{Deserialize, Serialize};

/// Document styling and page geometry for exports.
///
/// All lengths are millimetres; font sizes are points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri"). DOCX only;
    /// PDF output uses the built-in Helvetica family.
    pub body_font: String,

    /// Font for headings. DOCX only.
    pub heading_font: String,

    pub body_size: f32,
    pub title_size: f32,
    pub section_size: f32,
    pub block_size: f32,
    pub table_size: f32,

    pub page_width_mm: f32,
    pub page_height_mm: f32,

    /// Page margin in millimetres (applied uniformly).
    pub margin_mm: f32,

    /// Vertical space reserved at the bottom of every page for the page number.
    pub footer_mm: f32,

    /// Logo box on the first page, top right.
    pub logo_width_mm: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 10.0,
            title_size: 18.0,
            section_size: 14.0,
            block_size: 12.0,
            table_size: 9.0,
            // A4 portrait
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 18.0,
            footer_mm: 10.0,
            logo_width_mm: 30.0,
        }
    }
}

impl DocumentStyles {
    /// Height available for content on one page.
    pub fn usable_height_mm(&self) -> f32 {
        self.page_height_mm - 2.0 * self.margin_mm - self.footer_mm
    }

    pub fn usable_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Line height for text set at `size_pt`, with 40% leading.
    pub fn line_height_mm(&self, size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * 1.4
    }
}

/// One typographic point in millimetres.
pub const PT_TO_MM: f32 = 25.4 / 72.0;
