use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use progress_report::document::ReportDocument;

use crate::assets::AssetSource;
use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::layout::layout;
use crate::pdf::generate_pdf;
use crate::sink::ExportSink;
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" | "word" => Ok(ExportFormat::Docx),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Result of a finished export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub filename: String,
    pub format: ExportFormat,
    pub pages: usize,
    pub location: String,
}

/// `progress-{student}-{bucket}.{ext}`, with the student name slugged.
pub fn export_filename(student_name: &str, bucket_id: &str, format: ExportFormat) -> String {
    format!(
        "progress-{}-{}.{}",
        slug(student_name),
        slug(bucket_id),
        format.extension()
    )
}

fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("report");
    }
    out
}

/// Render the bytes of `doc` in `format`, returning them with the page count.
pub fn render_bytes(
    doc: &ReportDocument,
    format: ExportFormat,
    styles: &DocumentStyles,
    logo: Option<&[u8]>,
) -> Result<(Vec<u8>, usize), ExportError> {
    let paged = layout(doc, styles);
    let bytes = match format {
        ExportFormat::Pdf => generate_pdf(&paged, styles, logo)?,
        ExportFormat::Docx => generate_docx(&paged, styles)?,
    };
    Ok((bytes, paged.page_count()))
}

/// Export a report document and hand the file to `sink`.
///
/// A logo that cannot be loaded never fails the export; the document is
/// produced without it. Rendering and saving failures are returned.
pub async fn export_report<A, S>(
    doc: &ReportDocument,
    format: ExportFormat,
    filename: &str,
    styles: &DocumentStyles,
    assets: &A,
    sink: &S,
) -> Result<ExportOutcome, ExportError>
where
    A: AssetSource + Sync,
    S: ExportSink + Sync,
{
    let logo = match assets.logo().await {
        Ok(logo) => logo,
        Err(e) => {
            warn!(error = %e, "logo unavailable, exporting without it");
            None
        }
    };

    let (bytes, pages) = render_bytes(doc, format, styles, logo.as_deref())?;
    let saved = sink.save(filename, format.content_type(), bytes).await?;

    info!(filename, %format, pages, "report exported");

    Ok(ExportOutcome {
        filename: filename.to_string(),
        format,
        pages,
        location: saved.location,
    })
}
