//! Given steps for exam lookup BDD scenarios.

use eyre::WrapErr;
use hamstudy_bot::exam::domain::{ExamSession, LicenseRecord, TeamId};
use rstest_bdd_macros::given;

use super::world::ExamLookupWorld;

fn upcoming_session(index: usize) -> ExamSession {
    ExamSession {
        info_link: format!("/sessions/team-{index}"),
        team_id: TeamId::Text(format!("team-{index}")),
        date: "2030-01-05T15:00:00.000Z".to_owned(),
        online_session: false,
        formatted_addr: Some("100 Main St, Springfield, IL 62704".to_owned()),
        prereg_required: false,
        vec: "arrl".to_owned(),
        test_fee: 15.0,
    }
}

#[given("an empty exam directory")]
fn empty_directory(world: &mut ExamLookupWorld) {
    world.reply = None;
}

#[given("an exam directory with seven upcoming sessions")]
fn seven_sessions(world: &mut ExamLookupWorld) -> eyre::Result<()> {
    world
        .directory
        .set_sessions((1..=7).map(upcoming_session).collect())
        .wrap_err("store sessions")
}

#[given("the exam directory knows the licence for W1AW")]
fn known_licence(world: &mut ExamLookupWorld) -> eyre::Result<()> {
    let record = LicenseRecord::new()
        .with_field("callsign", "W1AW")
        .with_field("last_name", "ARRL INC")
        .with_field("license_class", "C")
        .with_field("grant_date", "2020-11-03T00:00:00.000Z");
    world
        .directory
        .insert_license("W1AW", record)
        .wrap_err("store licence")
}

#[given("the exam directory is unreachable")]
fn unreachable_directory(world: &mut ExamLookupWorld) -> eyre::Result<()> {
    world
        .directory
        .simulate_outage("connection refused")
        .wrap_err("simulate outage")
}
