//! When steps for friendship lifecycle BDD scenarios.

use super::world::{FriendshipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskring::social::{
    domain::{EmailAddress, UserId},
    services::ReceiverRef,
};

#[when(r#""{sender}" sends a friend request to email "{email}""#)]
fn send_request_by_email(
    world: &mut FriendshipWorld,
    sender: String,
    email: String,
) -> eyre::Result<()> {
    let sender_id = UserId::new(sender).wrap_err("construct sender id")?;
    let receiver = ReceiverRef::Email(EmailAddress::new(email).wrap_err("construct email")?);
    world.last_send_result = Some(run_async(world.service.send_request(&sender_id, &receiver)));
    Ok(())
}

#[when(r#""{user}" accepts the friend request from "{friend}""#)]
fn accept_request(world: &mut FriendshipWorld, user: String, friend: String) -> eyre::Result<()> {
    let user_id = UserId::new(user).wrap_err("construct user id")?;
    let friend_id = UserId::new(friend).wrap_err("construct friend id")?;
    world.last_update_result = Some(run_async(
        world.service.accept_request(&user_id, &friend_id),
    ));
    Ok(())
}

#[when(r#""{user}" declines the friend request from "{friend}""#)]
fn decline_request(world: &mut FriendshipWorld, user: String, friend: String) -> eyre::Result<()> {
    let user_id = UserId::new(user).wrap_err("construct user id")?;
    let friend_id = UserId::new(friend).wrap_err("construct friend id")?;
    world.last_update_result = Some(run_async(
        world.service.decline_request(&user_id, &friend_id),
    ));
    Ok(())
}
