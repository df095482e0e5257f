//! Template builder
//!
//! Assembles the display document for one response: branding header, category
//! title, submission date, optional listing summary, then the response's
//! answers in canonical order with labels and normalized values.

use crate::{format_price, format_submitted_at, Block, BlockKind, PageHint, RenderedDocument};
use chrono::Utc;
use form_model::{label_for, normalize_answer, ordered_entries, Listing, Response};

/// Branding text shown in the header bar
pub const BRAND_NAME: &str = "Dzimba Rita – Ingatlanközvetítő";
/// Contact line under the brand name
pub const BRAND_CONTACT: &str = "dzimbarita@dh.hu • +36 XX XXX XXXX";
/// Partner badges on the right of the header
pub const BRAND_BADGES: [&str; 2] = ["DUNAHOUSE", "CREDIPASS"];
/// Footer branding line
pub const FOOTER_TEXT: &str = "Dzimba Rita – Ingatlanközvetítő • DunaHouse • Bizalmas dokumentum";

/// Section heading above the answer list
const ANSWERS_TITLE: &str = "Válaszok";

/// Answer blocks per page before a break is hinted.
///
/// Every answer whose zero-based index is a positive multiple of this gets a
/// break-before hint.
pub const ANSWERS_PER_PAGE_HINT: usize = 6;

/// Build the display document for a response.
///
/// Block order: header, category title, date line, listing info (only when a
/// listing is supplied, no placeholder otherwise), section title, one block
/// per ordered answer, footer.
pub fn build_document(response: &Response, listing: Option<&Listing>) -> RenderedDocument {
    let mut blocks = Vec::new();

    blocks.push(Block::keep_together(BlockKind::Header {
        name: BRAND_NAME.to_string(),
        contact: BRAND_CONTACT.to_string(),
        badges: BRAND_BADGES.iter().map(|b| b.to_string()).collect(),
    }));

    blocks.push(Block::keep_together(BlockKind::CategoryTitle(
        response.category.display_label().to_string(),
    )));

    blocks.push(Block::keep_together(BlockKind::DateLine(format!(
        "Beküldve: {}",
        format_submitted_at(response.submitted_at)
    ))));

    if let Some(listing) = listing {
        blocks.push(Block::keep_together(BlockKind::ListingInfo {
            location: listing.location.clone(),
            price_text: format_price(listing.price),
        }));
    }

    blocks.push(Block::keep_together(BlockKind::SectionTitle(
        ANSWERS_TITLE.to_string(),
    )));

    for (index, (key, value)) in ordered_entries(response).into_iter().enumerate() {
        let kind = BlockKind::Answer {
            label: label_for(key),
            text: normalize_answer(value),
        };
        blocks.push(Block {
            kind,
            hint: answer_hint(index),
        });
    }

    blocks.push(Block::keep_together(BlockKind::Footer {
        left: FOOTER_TEXT.to_string(),
        right: format!("Generálva: {}", format_submitted_at(Utc::now())),
    }));

    RenderedDocument { blocks }
}

/// Pagination hint for the answer block at a zero-based answer index
fn answer_hint(index: usize) -> PageHint {
    if index > 0 && index % ANSWERS_PER_PAGE_HINT == 0 {
        PageHint::BreakBefore
    } else {
        PageHint::KeepTogether
    }
}
