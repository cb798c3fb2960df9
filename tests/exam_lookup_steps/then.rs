//! Then steps for exam lookup BDD scenarios.

use eyre::{WrapErr, ensure, eyre};
use hamstudy_bot::command::domain::Visibility;
use hamstudy_bot::exam::domain::query;
use rstest_bdd_macros::then;

use super::world::ExamLookupWorld;

fn assert_message(world: &ExamLookupWorld, expected: &str) -> eyre::Result<()> {
    let reply = world.reply()?;
    ensure!(
        reply.content.as_deref() == Some(expected),
        "unexpected reply: {reply:?}"
    );
    ensure!(reply.embed.is_none(), "error replies carry no embed");
    Ok(())
}

#[then("the reply lists five sessions")]
fn five_sessions(world: &ExamLookupWorld) -> eyre::Result<()> {
    let embed = world
        .reply()?
        .embed
        .as_ref()
        .ok_or_else(|| eyre!("expected an embed reply"))?;
    assert_eq!(embed.title(), "Exams Found:");
    assert_eq!(embed.fields().len(), 5);
    assert_eq!(
        embed.fields().first().map(|field| field.name.as_str()),
        Some("Team team-1")
    );
    Ok(())
}

#[then("the reply is visible only to the user")]
fn ephemeral_reply(world: &ExamLookupWorld) -> eyre::Result<()> {
    assert_eq!(world.reply()?.visibility, Visibility::Ephemeral);
    Ok(())
}

#[then("the reply is posted to the channel")]
fn public_reply(world: &ExamLookupWorld) -> eyre::Result<()> {
    assert_eq!(world.reply()?.visibility, Visibility::Public);
    Ok(())
}

#[then("the directory was asked for ZIP code 62704")]
fn asked_for_zip(world: &ExamLookupWorld) -> eyre::Result<()> {
    let queries = world
        .directory
        .received_queries()
        .wrap_err("read received queries")?;
    let last = queries
        .last()
        .ok_or_else(|| eyre!("the directory received no query"))?;
    assert_eq!(
        last.get(query::ZIP).map(ToString::to_string),
        Some("62704".to_owned())
    );
    ensure!(
        last.contains(query::START_DATE),
        "start date should default to now"
    );
    Ok(())
}

#[then("the directory received no search")]
fn no_search(world: &ExamLookupWorld) -> eyre::Result<()> {
    let queries = world
        .directory
        .received_queries()
        .wrap_err("read received queries")?;
    ensure!(queries.is_empty(), "unexpected queries: {queries:?}");
    Ok(())
}

#[then("the reply title is \"Data for W1AW:\"")]
fn licence_title(world: &ExamLookupWorld) -> eyre::Result<()> {
    let embed = world
        .reply()?
        .embed
        .as_ref()
        .ok_or_else(|| eyre!("expected an embed reply"))?;
    assert_eq!(embed.title(), "Data for W1AW:");
    assert_eq!(
        embed.field("Callsign").map(|field| field.value.as_str()),
        Some("W1AW")
    );
    Ok(())
}

#[then("the user is told the start date is not ISO 8601")]
fn bad_start_date(world: &ExamLookupWorld) -> eyre::Result<()> {
    assert_message(
        world,
        "Start date was not in an ISO 8601 compliant format. \
         Please re-enter it in a compliant format (i.e., YYYY-MM-DD).",
    )
}

#[then("the user is told nothing was found for N0CALL")]
fn nothing_found(world: &ExamLookupWorld) -> eyre::Result<()> {
    assert_message(world, "Unable to find anything for id: N0CALL")
}

#[then("the user is told to try again later")]
fn try_again(world: &ExamLookupWorld) -> eyre::Result<()> {
    assert_message(world, "Got a connection error, try again later.")
}
