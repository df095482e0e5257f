//! Display block types

use serde::{Deserialize, Serialize};

/// Advisory pagination hint attached to every block.
///
/// Hints do not split content by themselves; the paginator's geometric slicing
/// decides actual page breaks. The hint marks where a break is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageHint {
    /// Prefer starting a new page before this block
    BreakBefore,
    /// Keep this block on the current page if possible
    KeepTogether,
}

/// The visual content of a display block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Branded header bar
    Header {
        /// Agent name and role line
        name: String,
        /// Contact line (email, phone)
        contact: String,
        /// Partner badge texts
        badges: Vec<String>,
    },
    /// Large form-category title
    CategoryTitle(String),
    /// Submission date line
    DateLine(String),
    /// Linked listing summary (omitted entirely when no listing)
    ListingInfo {
        location: String,
        price_text: String,
    },
    /// Section heading above the answers
    SectionTitle(String),
    /// One question/answer pair
    Answer {
        label: String,
        text: String,
    },
    /// Footer line with branding and generation time
    Footer {
        left: String,
        right: String,
    },
}

/// A display block with its pagination hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub hint: PageHint,
}

impl Block {
    /// Create a block that should stay with its neighbors
    pub fn keep_together(kind: BlockKind) -> Self {
        Self {
            kind,
            hint: PageHint::KeepTogether,
        }
    }

    /// Create a block that prefers a page break before it
    pub fn break_before(kind: BlockKind) -> Self {
        Self {
            kind,
            hint: PageHint::BreakBefore,
        }
    }

    /// Whether this is an answer block
    pub fn is_answer(&self) -> bool {
        matches!(self.kind, BlockKind::Answer { .. })
    }
}

/// The assembled display document, ready for rasterization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub blocks: Vec<Block>,
}

impl RenderedDocument {
    /// Iterate over answer blocks only
    pub fn answer_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_answer())
    }

    /// Whether the document contains a listing-info block
    pub fn has_listing_info(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b.kind, BlockKind::ListingInfo { .. }))
    }
}
