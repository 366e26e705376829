//! Domain tests for user records, identifiers, and relation mutations.

use crate::social::domain::{
    EmailAddress, RelationField, RelationMutation, Relationship, SocialDomainError, User, UserId,
};
use rstest::rstest;

fn user_id(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

fn sample_user(id: &str) -> User {
    User::new(
        user_id(id),
        EmailAddress::new(format!("{id}@example.com")).expect("valid email"),
        "Sample User",
    )
}

#[rstest]
#[case("u1")]
#[case("  padded  ")]
fn user_id_accepts_trimmed_non_empty_values(#[case] raw: &str) {
    let id = UserId::new(raw).expect("valid user id");
    assert_eq!(id.as_str(), raw.trim());
}

#[rstest]
#[case("")]
#[case("   ")]
fn user_id_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(SocialDomainError::EmptyUserId));
}

#[test]
fn user_id_rejects_interior_whitespace() {
    assert!(matches!(
        UserId::new("u 1"),
        Err(SocialDomainError::InvalidUserId(_))
    ));
}

#[test]
fn email_normalizes_to_lowercase() {
    let email = EmailAddress::new("  B@X.Com ").expect("valid email");
    assert_eq!(email.as_str(), "b@x.com");
}

#[rstest]
#[case("no-at-sign")]
#[case("@domain")]
#[case("local@")]
#[case("a@b@c")]
#[case("a b@x.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert!(matches!(
        EmailAddress::new(raw),
        Err(SocialDomainError::InvalidEmail(_))
    ));
}

#[test]
fn apply_add_and_remove_are_idempotent() {
    let mut user = sample_user("u1");
    let add = RelationMutation::add(RelationField::Friends, user_id("u2"));

    user.apply(add.clone());
    user.apply(add);
    assert_eq!(user.friends().len(), 1);

    let remove = RelationMutation::remove(RelationField::Friends, user_id("u2"));
    user.apply(remove.clone());
    user.apply(remove);
    assert!(user.friends().is_empty());
}

#[test]
fn apply_targets_the_requested_field_only() {
    let mut user = sample_user("u1");
    user.apply(RelationMutation::add(
        RelationField::RequestsSent,
        user_id("u2"),
    ));

    assert!(user.friend_requests_sent().contains(&user_id("u2")));
    assert!(user.friends().is_empty());
    assert!(user.friend_requests_received().is_empty());
}

#[test]
fn relationship_reflects_each_relation_field() {
    let mut user = sample_user("u1");
    assert_eq!(
        user.relationship_with(&user_id("u2")),
        Relationship::Unrelated
    );

    user.apply(RelationMutation::add(
        RelationField::RequestsSent,
        user_id("u2"),
    ));
    assert_eq!(
        user.relationship_with(&user_id("u2")),
        Relationship::OutgoingRequest
    );

    user.apply(RelationMutation::add(
        RelationField::RequestsReceived,
        user_id("u3"),
    ));
    assert_eq!(
        user.relationship_with(&user_id("u3")),
        Relationship::IncomingRequest
    );

    user.apply(RelationMutation::add(RelationField::Friends, user_id("u4")));
    assert_eq!(user.relationship_with(&user_id("u4")), Relationship::Friends);
}

#[test]
fn user_deserializes_with_absent_relation_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@x.com"
    }))
    .expect("user should deserialize");

    assert!(user.friends().is_empty());
    assert!(user.friend_requests_sent().is_empty());
    assert!(user.friend_requests_received().is_empty());
    assert_eq!(user.display_name(), "");
}

#[test]
fn relation_field_names_match_store_documents() {
    assert_eq!(RelationField::Friends.as_str(), "friends");
    assert_eq!(RelationField::RequestsSent.as_str(), "friend_requests_sent");
    assert_eq!(
        RelationField::RequestsReceived.as_str(),
        "friend_requests_received"
    );
}
