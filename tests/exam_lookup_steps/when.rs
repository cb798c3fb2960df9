//! When steps for exam lookup BDD scenarios.

use hamstudy_bot::command::domain::InvocationContext;
use rstest_bdd_macros::when;

use super::world::{ExamLookupWorld, run_async};

fn run_command(world: &mut ExamLookupWorld, input: &str) {
    let context = InvocationContext::new("<@1001>");
    world.reply = Some(run_async(world.dispatcher.dispatch(input, &context)));
}

#[when("the user runs \"/findexam zipcode=62704\"")]
fn find_by_zip(world: &mut ExamLookupWorld) {
    run_command(world, "/findexam zipcode=62704");
}

#[when("the user runs \"/findexam start_date=yesterday\"")]
fn find_with_bad_date(world: &mut ExamLookupWorld) {
    run_command(world, "/findexam start_date=yesterday");
}

#[when("the user runs \"/uls lookup_id=W1AW post=true\"")]
fn posted_lookup(world: &mut ExamLookupWorld) {
    run_command(world, "/uls lookup_id=W1AW post=true");
}

#[when("the user runs \"/uls lookup_id=N0CALL\"")]
fn missing_lookup(world: &mut ExamLookupWorld) {
    run_command(world, "/uls lookup_id=N0CALL");
}
