//! Licence record renderer.

use crate::exam::domain::{EmbedField, LicenseRecord, RenderError, timestamp_token};

/// How one licence field is produced.
#[derive(Debug, Clone, Copy)]
enum LicenseField {
    /// A record field shown as-is.
    Text(&'static str, &'static str),
    /// A record timestamp shown as a chat timestamp token.
    Date(&'static str, &'static str),
    /// Name assembled from its parts.
    Name,
    /// Address assembled from street or PO box plus locality.
    Address,
}

const LICENSE_LAYOUT: [LicenseField; 15] = [
    LicenseField::Text("Callsign", "callsign"),
    LicenseField::Text("FRN", "frn"),
    LicenseField::Text("Licensee ID", "licensee_id"),
    LicenseField::Name,
    LicenseField::Address,
    LicenseField::Text("Applicant Type", "applicant_type"),
    LicenseField::Text("License Class", "license_class"),
    LicenseField::Text("Prev License Class", "prev_license_class"),
    LicenseField::Text("License Status", "license_status"),
    LicenseField::Date("Grant Date", "grant_date"),
    LicenseField::Date("Expiry Date", "expired_date"),
    LicenseField::Date("Effective Date", "effective_date"),
    LicenseField::Date("Cancellation Date", "cancellation_date"),
    LicenseField::Text("Basic Qualification", "bqqResponse"),
    LicenseField::Text("Is Revoked?", "is_revoked"),
];

/// Renders every present licence field, in a fixed order, as inline fields.
///
/// # Errors
///
/// Returns [`RenderError::MalformedTimestamp`] when a present date field
/// does not match the HamStudy timestamp format.
pub fn render_license(record: &LicenseRecord) -> Result<Vec<EmbedField>, RenderError> {
    let mut fields = Vec::new();
    for layout in LICENSE_LAYOUT {
        let (label, value) = match layout {
            LicenseField::Text(label, key) => (label, record.text(key)),
            LicenseField::Date(label, key) => (
                label,
                record
                    .text(key)
                    .map(|date| timestamp_token(&date))
                    .transpose()?,
            ),
            LicenseField::Name => ("Name", compose_name(record)),
            LicenseField::Address => ("Address", compose_address(record)),
        };
        if let Some(text) = value {
            fields.push(EmbedField::inline(label, text));
        }
    }
    Ok(fields)
}

/// Builds `Last, First M` followed directly by the suffix.
///
/// Returns `None` when every part is absent.
#[must_use]
pub fn compose_name(record: &LicenseRecord) -> Option<String> {
    let mut name = String::new();
    if let Some(last) = record.text("last_name") {
        name.push_str(&last);
    }
    if let Some(first) = record.text("first_name") {
        name.push_str(", ");
        name.push_str(&first);
    }
    if let Some(middle) = record.text("middle_initial") {
        name.push(' ');
        name.push_str(&middle);
    }
    if let Some(suffix) = record.text("suffix") {
        name.push_str(&suffix);
    }
    Some(name).filter(|composed| !composed.is_empty())
}

/// Builds a two-line address: street (or `PO Box`), then `City, ST ZIP`.
///
/// Lines without any present part are dropped; `None` when both are.
#[must_use]
pub fn compose_address(record: &LicenseRecord) -> Option<String> {
    let first_line = record
        .text("address")
        .or_else(|| record.text("pobox").map(|pobox| format!("PO Box {pobox}")));
    match (first_line, compose_locality(record)) {
        (Some(street), Some(locality)) => Some(format!("{street}\n{locality}")),
        (only_street, None) => only_street,
        (None, only_locality) => only_locality,
    }
}

fn compose_locality(record: &LicenseRecord) -> Option<String> {
    let region = [record.text("state"), record.text("zip")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    match (record.text("city"), region.is_empty()) {
        (Some(city), false) => Some(format!("{city}, {region}")),
        (Some(city), true) => Some(city),
        (None, false) => Some(region),
        (None, true) => None,
    }
}
