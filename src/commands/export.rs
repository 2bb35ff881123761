//! Report Export
//!
//! Exports are plain GETs against the reports page itself. PDFs open in a
//! new tab, CSVs download in place.

use crate::error::{js_error, UiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Report keys offered by the export modal; the first is the default
pub const EXPORT_REPORTS: [(&str, &str); 4] = [
    ("all", "All Reports"),
    ("revenue", "Revenue"),
    ("orders", "Orders"),
    ("products", "Products"),
];

/// `<base>[&]export=<format>&export_report=<report>`
///
/// The base is the page's export base URL; it defaults to `?`.
pub fn export_url(base: Option<&str>, format: ExportFormat, report: &str) -> String {
    let base = base.filter(|b| !b.is_empty()).unwrap_or("?");
    let separator = if base.contains('?') && base.len() > 1 { "&" } else { "" };
    format!("{}{}export={}&export_report={}", base, separator, format.as_str(), report)
}

/// Kick off the download
pub fn start_export(base: Option<&str>, format: ExportFormat, report: &str) -> Result<(), UiError> {
    let url = export_url(base, format, report);
    let window = web_sys::window().ok_or_else(|| UiError::Config("no browser window".into()))?;
    log::info!("[reports] export {} -> {}", format.as_str(), url);
    match format {
        ExportFormat::Pdf => {
            window
                .open_with_url_and_target(&url, "_blank")
                .map_err(|e| UiError::Transport(js_error(&e)))?;
        }
        ExportFormat::Csv => {
            window
                .location()
                .set_href(&url)
                .map_err(|e| UiError::Transport(js_error(&e)))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_question_mark_base() {
        assert_eq!(export_url(Some("?"), ExportFormat::Csv, "all"), "?export=csv&export_report=all");
    }

    #[test]
    fn test_missing_base_defaults() {
        assert_eq!(export_url(None, ExportFormat::Pdf, "revenue"), "?export=pdf&export_report=revenue");
        assert_eq!(export_url(Some(""), ExportFormat::Pdf, "revenue"), "?export=pdf&export_report=revenue");
    }

    #[test]
    fn test_base_with_filters() {
        assert_eq!(
            export_url(Some("?period=7d"), ExportFormat::Csv, "orders"),
            "?period=7d&export=csv&export_report=orders"
        );
    }
}
