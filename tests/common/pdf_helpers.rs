//! PDF inspection helpers.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Extracts text from a PDF, returning an error instead of panicking.
pub fn extract_text(pdf_path: &Path) -> Result<String> {
    let bytes = std::fs::read(pdf_path)
        .with_context(|| format!("Failed to read {}", pdf_path.display()))?;
    pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow::anyhow!("Failed to extract text: {}", e))
}

/// Extracted text with whitespace runs collapsed to single spaces.
pub fn normalized_text(pdf_path: &Path) -> Result<String> {
    Ok(extract_text(pdf_path)?
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" "))
}

/// Number of pages according to lopdf.
pub fn page_count(pdf_path: &Path) -> Result<usize> {
    Ok(lopdf::Document::load(pdf_path)?.get_pages().len())
}

/// Gets the file size of a PDF in bytes.
pub fn pdf_size(pdf_path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(pdf_path)?.len())
}

/// The facts printed by the CLI after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLines {
    pub file_name: String,
    pub bytes: u64,
    pub location: PathBuf,
}

static CREATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^✅ Created sample PDF will: (.+)$").unwrap());
static SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^📄 File size: (\d+) bytes$").unwrap());
static LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^📍 Location: (.+)$").unwrap());

/// Parses the three status lines out of the CLI's stdout.
pub fn parse_status(stdout: &str) -> Result<StatusLines> {
    let capture = |re: &Regex, what: &str| -> Result<String> {
        re.captures(stdout)
            .map(|c| c[1].trim_end().to_string())
            .with_context(|| format!("No {} line in output:\n{}", what, stdout))
    };

    Ok(StatusLines {
        file_name: capture(&CREATED, "created")?,
        bytes: capture(&SIZE, "size")?.parse()?,
        location: PathBuf::from(capture(&LOCATION, "location")?),
    })
}
