//! Behavioural coverage for the built-in demo seed set.

use demo_data::{DemoOrganization, DemoRole, demo_organizations, from_json};
use rstest::rstest;
use rstest_bdd_macros::{given, then, when};

#[given("the built-in demo seed set")]
fn builtin_seed_set() -> Vec<DemoOrganization> {
    demo_organizations()
}

#[when("the seed set is serialized and reloaded")]
fn serialized_and_reloaded(records: Vec<DemoOrganization>) -> Vec<DemoOrganization> {
    let json = serde_json::to_string(&records).expect("seed records serialize");
    from_json(&json).expect("serialized seed records parse back")
}

#[then("both demo accounts survive intact")]
fn both_accounts_survive(records: &[DemoOrganization]) {
    assert_eq!(records.len(), 2);
    let donor = &records[0];
    assert_eq!(donor.email, "contact@bellavista.com");
    assert_eq!(donor.password, "demo123");
    assert_eq!(donor.role, DemoRole::Donor);
    assert_eq!(donor.total_donations, 156);
    let recipient = &records[1];
    assert_eq!(recipient.email, "admin@sunshineorphanage.org");
    assert_eq!(recipient.role, DemoRole::Recipient);
    assert_eq!(recipient.total_received, 89);
}

#[rstest]
fn seed_set_round_trips() {
    let records = builtin_seed_set();
    let reloaded = serialized_and_reloaded(records);
    both_accounts_survive(&reloaded);
}

#[rstest]
#[case("not json at all")]
#[case(r#"{"id": "lone object, not an array"}"#)]
fn malformed_payloads_are_rejected(#[case] payload: &str) {
    assert!(from_json(payload).is_err());
}
