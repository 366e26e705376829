//! Then steps for friendship lifecycle BDD scenarios.

use super::world::{FriendshipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskring::social::{
    domain::{User, UserId},
    ports::UserStore,
    services::FriendshipError,
};

fn fetch_user(world: &FriendshipWorld, id: &str) -> eyre::Result<User> {
    let user_id = UserId::new(id).wrap_err("construct user id")?;
    run_async(world.store.get_user(&user_id))
        .wrap_err("store lookup")?
        .ok_or_else(|| eyre::eyre!("user {id} should exist in the scenario store"))
}

#[then(r#""{a}" and "{b}" are friends"#)]
fn users_are_friends(world: &FriendshipWorld, a: String, b: String) -> eyre::Result<()> {
    let first = fetch_user(world, &a)?;
    let second = fetch_user(world, &b)?;
    let a_id = UserId::new(a.as_str()).wrap_err("construct user id")?;
    let b_id = UserId::new(b.as_str()).wrap_err("construct user id")?;

    if !first.friends().contains(&b_id) {
        return Err(eyre::eyre!("{a} is missing {b} from their friend set"));
    }
    if !second.friends().contains(&a_id) {
        return Err(eyre::eyre!("{b} is missing {a} from their friend set"));
    }
    Ok(())
}

#[then(r#""{a}" and "{b}" are not friends"#)]
fn users_are_not_friends(world: &FriendshipWorld, a: String, b: String) -> eyre::Result<()> {
    let first = fetch_user(world, &a)?;
    let second = fetch_user(world, &b)?;

    if !first.friends().is_empty() || !second.friends().is_empty() {
        return Err(eyre::eyre!("expected both friend sets to be empty"));
    }
    Ok(())
}

#[then(r#"no pending requests remain between "{a}" and "{b}""#)]
fn no_pending_requests_remain(world: &FriendshipWorld, a: String, b: String) -> eyre::Result<()> {
    for id in [&a, &b] {
        let user = fetch_user(world, id)?;
        if !user.friend_requests_sent().is_empty() {
            return Err(eyre::eyre!("{id} still has pending sent requests"));
        }
        if !user.friend_requests_received().is_empty() {
            return Err(eyre::eyre!("{id} still has pending received requests"));
        }
    }
    Ok(())
}

#[then("the request fails because the receiver does not exist")]
fn request_fails_not_found(world: &FriendshipWorld) -> eyre::Result<()> {
    let result = world
        .last_send_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result in scenario world"))?;

    if !matches!(result, Err(FriendshipError::NotFound(_))) {
        return Err(eyre::eyre!("expected a not-found failure, got {result:?}"));
    }
    Ok(())
}
