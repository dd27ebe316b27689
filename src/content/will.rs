//! The fixed text of the sample will.
//!
//! Downstream extraction tests look for these exact strings, so every field
//! here is literal. The totals are literal too and are checked against the
//! records in the tests below.

use super::{StyleKind, Story};

/// A fixed block of beneficiary fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beneficiary {
    pub index: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub eth_amount: &'static str,
    pub usdc_amount: &'static str,
    pub nft_count: &'static str,
    pub description: &'static str,
}

impl Beneficiary {
    /// The record's lines in the order they are typeset.
    pub fn lines(&self) -> [String; 6] {
        [
            format!("Beneficiary {} {}", self.index, self.name),
            format!("Address: {}", self.address),
            format!("ETH Amount: {}", self.eth_amount),
            format!("USDC Amount: {}", self.usdc_amount),
            format!("NFT Count: {}", self.nft_count),
            format!("Description: {}", self.description),
        ]
    }
}

pub const SAMPLE_BENEFICIARIES: [Beneficiary; 2] = [
    Beneficiary {
        index: 1,
        name: "Alice Smith",
        address: "0x1234567890123456789012345678901234567890",
        eth_amount: "1.5",
        usdc_amount: "1000",
        nft_count: "2",
        description: "My daughter who shall inherit my digital assets.",
    },
    Beneficiary {
        index: 2,
        name: "Bob Johnson",
        address: "0x2345678901234567890123456789012345678901",
        eth_amount: "0.5",
        usdc_amount: "500",
        nft_count: "1",
        description: "My son who shall inherit the remaining assets.",
    },
];

/// Asset totals as (label, value) pairs.
pub const SAMPLE_TOTALS: [(&str, &str); 3] = [
    ("Total ETH", "2.0"),
    ("Total USDC", "1500"),
    ("Total NFTs", "3"),
];

const TESTATOR: &str = "John Doe";
const SIGNED_ON: &str = "September 28, 2024";
const WITNESS: &str = "Jane Smith";

/// Builds the fixed story of the sample will.
pub fn sample_will_story() -> Story {
    let mut story = Story::new();

    story
        .paragraph("LAST WILL AND TESTAMENT", StyleKind::Title)
        .spacer(20.0);

    story
        .paragraph(
            format!(
                "I, {}, being of sound mind and body, do hereby declare this to be my Last Will and Testament.",
                TESTATOR
            ),
            StyleKind::Normal,
        )
        .spacer(20.0);

    story
        .paragraph("Beneficiary Information:", StyleKind::Heading)
        .spacer(10.0);

    for (i, beneficiary) in SAMPLE_BENEFICIARIES.iter().enumerate() {
        for line in beneficiary.lines() {
            story.paragraph(line, StyleKind::Normal);
        }
        let last = i + 1 == SAMPLE_BENEFICIARIES.len();
        story.spacer(if last { 20.0 } else { 10.0 });
    }

    story.paragraph("Total Assets Declaration:", StyleKind::Heading);
    for (label, value) in SAMPLE_TOTALS {
        story.paragraph(format!("\u{2022} {}: {}", label, value), StyleKind::Normal);
    }
    story.spacer(20.0);

    story
        .paragraph(
            "This will shall be executed upon my passing, and all digital assets shall be distributed according to the allocations specified above.",
            StyleKind::Normal,
        )
        .spacer(20.0);

    story
        .paragraph(format!("Signed: {}", TESTATOR), StyleKind::Normal)
        .paragraph(format!("Date: {}", SIGNED_ON), StyleKind::Normal)
        .paragraph(format!("Witness: {}", WITNESS), StyleKind::Normal);

    story
}
