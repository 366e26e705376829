//! Given steps for friendship lifecycle BDD scenarios.

use super::world::FriendshipWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskring::social::domain::{EmailAddress, User, UserId};

#[given(r#"a registered user "{id}" with email "{email}""#)]
fn registered_user(world: &mut FriendshipWorld, id: String, email: String) -> eyre::Result<()> {
    let user = User::new(
        UserId::new(id.as_str()).wrap_err("construct user id")?,
        EmailAddress::new(email).wrap_err("construct email")?,
        id,
    );
    world
        .store
        .insert_user(user)
        .wrap_err("seed user record")?;
    Ok(())
}
