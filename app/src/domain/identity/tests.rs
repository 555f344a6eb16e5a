//! Tests for the identity data model.

use super::*;
use rstest::rstest;
use serde_json::Value;

const VALID_ID: &str = "9b2f41c8-33a5-4b0f-8c5e-6a1d27e4f9a1";

#[rstest]
#[case("", IdentityIdError::Empty)]
#[case("not-a-uuid", IdentityIdError::Invalid)]
#[case(" 9b2f41c8-33a5-4b0f-8c5e-6a1d27e4f9a1", IdentityIdError::Invalid)]
fn invalid_ids_are_rejected(#[case] raw: &str, #[case] expected: IdentityIdError) {
    let err = IdentityId::new(raw).expect_err("invalid id must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn valid_id_round_trips() {
    let id = IdentityId::new(VALID_ID).expect("valid id parses");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
fn random_ids_are_unique_per_call() {
    assert_ne!(IdentityId::random(), IdentityId::random());
}

#[rstest]
fn builder_defaults_match_registration_defaults() {
    let identity = Identity::builder(IdentityId::random(), Role::Donor).build();
    assert_eq!(identity.name(), "");
    assert_eq!(identity.email(), "");
    assert_eq!(identity.organization(), "");
    assert_eq!(identity.phone(), "");
    assert_eq!(identity.location().address(), "");
    assert_eq!(identity.location().lat(), 0.0);
    assert_eq!(identity.location().lng(), 0.0);
    assert!(!identity.verified());
    assert_eq!(identity.rating(), 0.0);
    assert_eq!(identity.total_donations(), 0);
    assert_eq!(identity.total_received(), 0);
    assert_eq!(identity.role(), Role::Donor);
}

#[rstest]
fn builder_sets_every_field() {
    let id = IdentityId::new(VALID_ID).expect("valid id parses");
    let identity = Identity::builder(id, Role::Recipient)
        .name("Sunshine Orphanage")
        .email("admin@sunshineorphanage.org")
        .organization("Sunshine Orphanage")
        .phone("+1 (555) 987-6543")
        .location(Location::new("456 Hope Street, Eastside", 40.7589, -73.9851))
        .verified(true)
        .rating(4.9)
        .total_received(89)
        .build();
    assert_eq!(identity.id(), &id);
    assert_eq!(identity.role(), Role::Recipient);
    assert_eq!(identity.name(), "Sunshine Orphanage");
    assert!(identity.verified());
    assert_eq!(identity.total_received(), 89);
    assert_eq!(identity.total_donations(), 0);
}

#[rstest]
fn identity_serializes_in_camel_case() {
    let identity = Identity::builder(IdentityId::random(), Role::Donor)
        .name("Bella Vista Restaurant")
        .email("contact@bellavista.com")
        .total_donations(156)
        .build();
    let value = serde_json::to_value(&identity).expect("identity serializes");
    assert_eq!(
        value.get("totalDonations").and_then(Value::as_u64),
        Some(156)
    );
    assert_eq!(value.get("role").and_then(Value::as_str), Some("donor"));
    assert!(value.get("total_donations").is_none());
    assert!(
        value.get("password").is_none(),
        "identities never carry a password"
    );
}

#[rstest]
fn unknown_fields_are_rejected_on_deserialize() {
    let json = serde_json::json!({
        "id": VALID_ID,
        "name": "x",
        "email": "x@y.z",
        "role": "donor",
        "organization": "x",
        "phone": "",
        "location": {"address": "", "lat": 0.0, "lng": 0.0},
        "verified": false,
        "rating": 0.0,
        "totalDonations": 0,
        "totalReceived": 0,
        "password": "should not be here"
    });
    let parsed: Result<Identity, _> = serde_json::from_value(json);
    assert!(parsed.is_err());
}
