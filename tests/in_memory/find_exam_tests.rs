//! Session search through the lookup service.

use std::sync::Arc;

use crate::in_memory::helpers::{directory, in_person_session, service_with_limit};
use hamstudy_bot::exam::{
    adapters::InMemoryExamDirectory,
    domain::{ExamType, RenderError, SearchFilter, SessionRecord, VecCode, query},
    services::ExamServiceError,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_limit_caps_the_listing(directory: Arc<InMemoryExamDirectory>) {
    directory
        .set_sessions(
            (1..=4)
                .map(|index| in_person_session(&format!("T{index}"), "w5yi", 10.0))
                .collect(),
        )
        .expect("sessions stored");

    let embed = service_with_limit(&directory, 2)
        .find_exams(SearchFilter::new())
        .await
        .expect("search succeeds");

    let names: Vec<_> = embed.fields().iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, ["Team T1", "Team T2"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_link_uses_site_base(directory: Arc<InMemoryExamDirectory>) {
    directory
        .set_sessions(vec![in_person_session("ct-team", "arrl", 15.0)])
        .expect("sessions stored");

    let embed = service_with_limit(&directory, 5)
        .find_exams(SearchFilter::new())
        .await
        .expect("search succeeds");

    let field = embed.field("Team ct-team").expect("session field");
    assert!(
        field
            .value
            .ends_with("[**Session Link**](https://hamstudy.org/sessions/ct-team)"),
        "{}",
        field.value
    );
    assert!(field.value.contains("**VEC**: ARRL-VEC\n"));
    assert!(field.value.contains("**Fee**: $15.00\n"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filter_is_sent_in_wire_order(directory: Arc<InMemoryExamDirectory>) {
    let filter = SearchFilter::new()
        .with_coordinates("-72.7", "41.7")
        .with_vec(VecCode::Laurel)
        .with_exam_type(ExamType::InPerson)
        .with_end_date("2030-12-31")
        .with_include_full(true);

    service_with_limit(&directory, 5)
        .find_exams(filter)
        .await
        .expect("search succeeds");

    let queries = directory.received_queries().expect("queries readable");
    let names: Vec<_> = queries
        .first()
        .expect("one query")
        .names()
        .collect();
    assert_eq!(
        names,
        [
            query::GEO_LONG,
            query::GEO_LAT,
            query::VEC,
            query::END_DATE,
            query::EXAM_TYPE,
            query::INCLUDE_FULL,
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_vec_in_directory_data_is_a_render_error(directory: Arc<InMemoryExamDirectory>) {
    directory
        .set_sessions(vec![in_person_session("T1", "atlantis", 0.0)])
        .expect("sessions stored");

    let error = service_with_limit(&directory, 5)
        .find_exams(SearchFilter::new())
        .await
        .expect_err("unknown VEC");

    assert!(matches!(error, ExamServiceError::Render(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_entry_within_the_limit_is_a_render_error(
    directory: Arc<InMemoryExamDirectory>,
) {
    directory
        .set_session_records(vec![SessionRecord::from(json!({ "teamId": 9, "date": null }))])
        .expect("records stored");

    let error = service_with_limit(&directory, 5)
        .find_exams(SearchFilter::new())
        .await
        .expect_err("entry lacks required fields");

    assert!(matches!(
        error,
        ExamServiceError::Render(RenderError::MalformedSession(_))
    ));
    assert_eq!(
        error.user_message(),
        "HamStudy returned data that could not be displayed, try again later."
    );
}
