//! Given steps for task retrieval BDD scenarios.

use super::world::TaskWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_service::task::domain::Task;

#[given(r#"a stored task "{id}""#)]
fn stored_task(world: &mut TaskWorld, id: String) -> Result<(), eyre::Report> {
    world
        .repository
        .insert(Task::new(id))
        .wrap_err("seed task into repository")?;
    Ok(())
}

#[given("an empty task repository")]
fn empty_repository(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let is_empty = world
        .repository
        .is_empty()
        .wrap_err("read repository size")?;
    if !is_empty {
        return Err(eyre::eyre!("expected a fresh repository in scenario world"));
    }
    Ok(())
}

#[given("the request context has been cancelled")]
fn cancelled_context(world: &mut TaskWorld) {
    world.ctx.cancel();
}
