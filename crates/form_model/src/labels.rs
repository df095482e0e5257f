//! Field-key display labels
//!
//! Curated Hungarian question labels for every known field key across the
//! three forms. Lookup never fails: unknown keys get a derived fallback label
//! so newly added form fields render usably without a code change.

/// Curated labels for the known field vocabulary
const LABELS: &[(&str, &str)] = &[
    // Property evaluation / viewing feedback fields
    ("property-rating", "Ingatlan értékelés (1-5 skála)"),
    ("property-feeling", "Érzés az ingatlanban járva"),
    ("most-liked", "Mi tetszett a legjobban"),
    ("disliked-option", "Volt-e valami, ami kevésbé tetszett"),
    ("disliked-details", "Mi nem tetszett (részletek)"),
    ("changes-option", "Változtatna valamit az ingatlanon"),
    ("changes-details", "Mit változtatna (részletek)"),
    ("advertisement-accuracy", "Benyomás a hirdetés tükrében"),
    ("price-realism", "Ár realitása"),
    ("realistic-price", "Reálisnak tartott ár"),
    ("questions-option", "Van-e kérdése"),
    ("questions-details", "Kérdések (részletek)"),
    ("revisit", "Szeretné újra megtekinteni"),
    ("purchase-offer", "Szeretne vételi ajánlatot tenni"),
    // Needs-assessment fields
    ("previous-experience", "Adott el vagy vett már ingatlant"),
    ("agent-involved", "Vett részt ingatlanközvetítő az adásvételben"),
    ("current-agent-help", "Segíti már a keresésüket ingatlanközvetítő"),
    ("viewed-properties", "Hány ingatlant néztek meg eddig"),
    ("search-time", "Mióta keresnek ingatlant"),
    ("liked-property", "Volt olyan ingatlan, ami nagyon tetszett"),
    ("liked-property-details", "Mi az, ami megfogta benne"),
    ("not-purchased-reason", "Miért nem vették meg"),
    ("family-size-needs", "Hány fős családnak keresnek otthont"),
    ("preferred-location", "Milyen településen/kerületben keresnek"),
    ("transportation-needs", "Milyen közlekedési igényeik vannak"),
    ("urgency", "Mennyire sürgős a költözés"),
    ("family-additional-comments", "Van-e egyéb családi szempontjuk"),
    ("budget", "Mi a tervezett költségkeret"),
    ("cash-savings-time", "Mennyi idő alatt tudják összegyűjteni a teljes összeget"),
    ("down-payment", "Mekkora önerő áll rendelkezésükre"),
    ("down-savings-time", "Mennyi idő alatt gyűjtik össze az önerőt"),
    ("loan-type", "Milyen hitelt terveznek igénybe venni"),
    ("payment-other", "Van-e egyéb pénzügyi megjegyzése"),
    // Contact fields
    ("name", "Név"),
    ("email", "Email cím"),
    ("phone", "Telefonszám"),
    ("call-time", "Mikor hívjam fel"),
    ("contact-preference", "Kapcsolatfelvétel módja"),
    ("additional-comments", "Egyéb megjegyzések"),
];

/// Display label for a field key.
///
/// Returns the curated label for known keys. Unknown keys fall back to the
/// key itself with separators replaced by spaces and the first letter
/// capitalized, so the result is always a usable non-empty string.
pub fn label_for(key: &str) -> String {
    if let Some((_, label)) = LABELS.iter().find(|(k, _)| *k == key) {
        return (*label).to_string();
    }
    fallback_label(key)
}

/// Derive a readable label from a raw field key
fn fallback_label(key: &str) -> String {
    let spaced: String = key
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
