//! Tests for timestamp conversion and the session listing renderer.

use rstest::rstest;

use serde_json::json;

use super::fixtures::{record, records, session};
use crate::exam::domain::{
    ExamSession, RenderError, SessionRecord, TeamId, timestamp_token, to_epoch_seconds,
};
use crate::exam::render::{DEFAULT_SESSION_LIMIT, SessionRenderer, render_sessions};

#[rstest]
fn epoch_conversion_treats_input_as_utc() {
    assert_eq!(to_epoch_seconds("2024-06-01T12:00:00.000Z"), Ok(1_717_243_200));
    assert_eq!(to_epoch_seconds("1970-01-01T00:00:00.000Z"), Ok(0));
}

#[rstest]
#[case("2024-06-01T12:00:00Z")]
#[case("2024-06-01T12:00:00.123Z")]
#[case("2024-06-01 12:00:00.000Z")]
#[case("2024-06-01")]
#[case("not a date")]
fn unexpected_timestamp_shapes_are_malformed(#[case] value: &str) {
    assert_eq!(
        to_epoch_seconds(value),
        Err(RenderError::MalformedTimestamp(value.to_owned()))
    );
}

#[rstest]
fn timestamp_token_uses_full_date_style() {
    assert_eq!(
        timestamp_token("2024-06-01T12:00:00.000Z"),
        Ok("<t:1717243200:f>".to_owned())
    );
}

#[rstest]
fn listing_is_truncated_in_input_order() {
    let sessions: Vec<_> = (1..=8)
        .map(|index| session(&format!("T{index}"), "arrl"))
        .collect();

    let fields =
        render_sessions(&records(&sessions), DEFAULT_SESSION_LIMIT).expect("sessions render");

    let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, ["Team T1", "Team T2", "Team T3", "Team T4", "Team T5"]);
}

#[rstest]
fn sessions_past_the_limit_are_never_inspected() {
    let mut listing: Vec<_> = (1..=5)
        .map(|index| record(&session(&format!("T{index}"), "w5yi")))
        .collect();
    listing.push(record(&session("broken", "not-a-vec")));
    listing.push(SessionRecord::from(json!({
        "date": null,
        "vec": null,
        "test_fee": null
    })));

    let fields = render_sessions(&listing, 5).expect("broken entries are past the limit");

    assert_eq!(fields.len(), 5);
}

#[rstest]
fn malformed_record_within_the_limit_fails_the_listing() {
    let listing = vec![
        record(&session("T1", "arrl")),
        SessionRecord::from(json!({ "teamId": "T2", "vec": "arrl" })),
    ];

    let error = render_sessions(&listing, 5).expect_err("T2 lacks infoLink and date");

    assert!(matches!(error, RenderError::MalformedSession(_)), "{error:?}");
}

#[rstest]
fn session_body_lists_every_detail() {
    let field = SessionRenderer::new("https://hamstudy.org/")
        .render_session(&session("abc123", "arrl"))
        .expect("session renders");

    assert_eq!(field.name, "Team abc123");
    assert!(!field.inline);
    assert_eq!(
        field.value,
        concat!(
            "**When**: <t:1717243200:f>\n",
            "**Where**: 123 Main St, Springfield, IL 62704\n",
            "**Pre-Registration Required**: Yes\n",
            "**Remote**: No\n",
            "**VEC**: ARRL-VEC\n",
            "**Fee**: $15.00\n",
            "[**Session Link**](https://hamstudy.org/sessions/abc123)",
        )
    );
}

#[rstest]
fn online_sessions_report_online_location() {
    let mut online = session("remote-team", "laurel");
    online.online_session = true;
    online.formatted_addr = None;
    online.team_id = TeamId::Number(42);

    let field = SessionRenderer::default()
        .render_session(&online)
        .expect("session renders");

    assert_eq!(field.name, "Team 42");
    assert!(field.value.contains("**Where**: Online\n"));
    assert!(field.value.contains("**Remote**: Yes\n"));
}

#[rstest]
fn unknown_vec_fails_the_listing() {
    let sessions = vec![session("T1", "arrl"), session("T2", "bogus")];

    let error =
        render_sessions(&records(&sessions), 5).expect_err("unknown VEC must not be dropped");

    assert_eq!(error, RenderError::UnknownVecCode("bogus".to_owned()));
}

#[rstest]
fn malformed_session_date_fails_the_listing() {
    let mut broken = session("T1", "arrl");
    broken.date = "2024-06-01".to_owned();

    let error = render_sessions(&[record(&broken)], 5).expect_err("malformed date");

    assert_eq!(
        error,
        RenderError::MalformedTimestamp("2024-06-01".to_owned())
    );
}

#[rstest]
fn sessions_deserialize_from_hamstudy_json() {
    let payload = json!([{
        "infoLink": "/session/42",
        "teamId": "abc",
        "date": "2024-06-01T12:00:00.000Z",
        "online_session": true,
        "prereg_required": false,
        "vec": "sandarc",
        "test_fee": 14.5
    }]);

    let sessions: Vec<ExamSession> = serde_json::from_value(payload).expect("payload matches");

    let first = sessions.first().expect("one session");
    assert_eq!(first.team_id, TeamId::Text("abc".to_owned()));
    assert_eq!(first.formatted_addr, None);
    assert_eq!(first.location(), "Online");
}
