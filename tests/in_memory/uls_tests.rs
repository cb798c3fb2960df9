//! Licence lookup through the command dispatcher.

use std::sync::Arc;

use crate::in_memory::helpers::{directory, dispatcher};
use hamstudy_bot::command::domain::{InvocationContext, Visibility};
use hamstudy_bot::exam::{adapters::InMemoryExamDirectory, domain::LicenseRecord};
use rstest::rstest;
use serde_json::json;

fn full_record() -> LicenseRecord {
    serde_json::from_value(json!({
        "callsign": "KD9XYZ",
        "frn": "0023456789",
        "licensee_id": "L01234567",
        "last_name": "Rivera",
        "first_name": "Ana",
        "middle_initial": "M",
        "suffix": null,
        "address": "77 Antenna Way",
        "pobox": "",
        "city": "Madison",
        "state": "WI",
        "zip": "53703",
        "applicant_type": "I",
        "license_class": "G",
        "prev_license_class": "T",
        "license_status": "A",
        "grant_date": "2023-02-14T00:00:00.000Z",
        "expired_date": "2033-02-14T00:00:00.000Z",
        "effective_date": "2023-02-14T00:00:00.000Z",
        "cancellation_date": null,
        "is_revoked": false
    }))
    .expect("record deserializes")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_known_field_is_rendered_in_order(directory: Arc<InMemoryExamDirectory>) {
    directory
        .insert_license("kd9xyz", full_record())
        .expect("licence stored");

    let reply = dispatcher(&directory)
        .dispatch("/uls lookup_id=KD9XYZ", &InvocationContext::new("<@7>"))
        .await;

    assert_eq!(reply.visibility, Visibility::Ephemeral);
    let embed = reply.embed.expect("embed reply");
    let names: Vec<_> = embed.fields().iter().map(|field| field.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Callsign",
            "FRN",
            "Licensee ID",
            "Name",
            "Address",
            "Applicant Type",
            "License Class",
            "Prev License Class",
            "License Status",
            "Grant Date",
            "Expiry Date",
            "Effective Date",
            "Is Revoked?",
        ]
    );
    assert_eq!(
        embed.field("Name").map(|field| field.value.as_str()),
        Some("Rivera, Ana M")
    );
    assert_eq!(
        embed.field("Address").map(|field| field.value.as_str()),
        Some("77 Antenna Way\nMadison, WI 53703")
    );
    assert_eq!(
        embed.field("Grant Date").map(|field| field.value.as_str()),
        Some("<t:1676332800:f>")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_lookup_id_is_a_command_error(directory: Arc<InMemoryExamDirectory>) {
    let reply = dispatcher(&directory)
        .dispatch("/uls post=true", &InvocationContext::new("<@7>"))
        .await;

    assert_eq!(reply.visibility, Visibility::Ephemeral);
    assert_eq!(
        reply.content.as_deref(),
        Some("/uls lookup_id: required but not supplied")
    );
}
