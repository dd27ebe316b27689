//! Custom assertions for the generated fixture.

use std::path::Path;

use super::pdf_helpers::{normalized_text, page_count};

/// Lines that must survive extraction verbatim.
pub const EXPECTED_LINES: &[&str] = &[
    "LAST WILL AND TESTAMENT",
    "Beneficiary Information:",
    "Beneficiary 1 Alice Smith",
    "Address: 0x1234567890123456789012345678901234567890",
    "ETH Amount: 1.5",
    "USDC Amount: 1000",
    "NFT Count: 2",
    "Description: My daughter who shall inherit my digital assets.",
    "Beneficiary 2 Bob Johnson",
    "Address: 0x2345678901234567890123456789012345678901",
    "ETH Amount: 0.5",
    "USDC Amount: 500",
    "NFT Count: 1",
    "Description: My son who shall inherit the remaining assets.",
    "Total Assets Declaration:",
    "Total ETH: 2.0",
    "Total USDC: 1500",
    "Total NFTs: 3",
    "Signed: John Doe",
    "Date: September 28, 2024",
    "Witness: Jane Smith",
];

/// Asserts that a file exists, is non-empty, and loads as a PDF.
///
/// # Panics
/// Panics if any of those checks fail.
pub fn assert_valid_pdf(pdf_path: &Path) {
    assert!(
        pdf_path.exists(),
        "PDF should exist at '{}'",
        pdf_path.display()
    );

    let metadata = std::fs::metadata(pdf_path).expect("Failed to get PDF metadata");
    assert!(
        metadata.len() > 0,
        "PDF should not be empty at '{}'",
        pdf_path.display()
    );

    let pages = page_count(pdf_path)
        .unwrap_or_else(|e| panic!("PDF at '{}' did not load: {}", pdf_path.display(), e));
    assert!(pages > 0, "PDF should have at least one page");
}

/// Asserts that the PDF carries every line of the sample will.
///
/// # Panics
/// Panics listing every expected line missing from the extracted text.
pub fn assert_sample_will_content(pdf_path: &Path) {
    let text = normalized_text(pdf_path)
        .unwrap_or_else(|e| panic!("Failed to extract text from '{}': {}", pdf_path.display(), e));

    let missing: Vec<&str> = EXPECTED_LINES
        .iter()
        .copied()
        .filter(|line| !text.contains(line))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing from '{}': {:?}\nExtracted: {}",
        pdf_path.display(),
        missing,
        text
    );
}
