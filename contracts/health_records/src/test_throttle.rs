#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};

struct ThrottleSetup {
    env: Env,
    client: HealthRecordsContractClient<'static>,
    admin: Address,
    alice: Address,
    record_id: u64,
}

fn setup() -> ThrottleSetup {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(HealthRecordsContract, ());
    let client = HealthRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let alice = Address::generate(&env);
    client.register_patient(
        &alice,
        &String::from_str(&env, "Alice"),
        &String::from_str(&env, "O+"),
        &30,
    );
    let record_id = client.add_health_record(
        &admin,
        &alice,
        &String::from_str(&env, "Flu"),
        &String::from_str(&env, "Rest"),
    );

    ThrottleSetup {
        env,
        client,
        admin,
        alice,
        record_id,
    }
}

#[test]
fn test_rapid_reads_are_rate_limited() {
    let s = setup();
    s.env.ledger().set_timestamp(1_000);

    // First read succeeds, the second inside the interval is refused.
    s.client.get_health_record(&s.alice, &s.record_id);
    let res = s.client.try_get_health_record(&s.alice, &s.record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));

    // After the interval elapses a third read goes through.
    s.env
        .ledger()
        .set_timestamp(1_000 + throttle::DEFAULT_READ_COOLDOWN_SECS);
    s.client.get_health_record(&s.alice, &s.record_id);
}

#[test]
fn test_throttle_is_per_caller() {
    let s = setup();
    let bob = Address::generate(&s.env);
    s.client.grant_access(&s.alice, &bob);

    s.env.ledger().set_timestamp(1_000);
    s.client.get_health_record(&s.alice, &s.record_id);

    // Alice's read does not consume Bob's budget.
    s.client.get_health_record(&bob, &s.record_id);

    let res = s.client.try_get_health_record(&bob, &s.record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));
}

#[test]
fn test_throttle_covers_all_gated_reads() {
    let s = setup();
    s.env.ledger().set_timestamp(1_000);

    // Any gated read opens the window; any other gated read inside the
    // interval is refused, regardless of which operation it is.
    s.client.get_patient_record_ids(&s.alice, &s.alice);

    let res = s.client.try_get_record_count(&s.alice, &s.alice);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));
    let res = s.client.try_get_patient_info(&s.alice, &s.alice);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));
    let res = s.client.try_get_health_record(&s.alice, &s.record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));
}

#[test]
fn test_cooldown_is_configurable() {
    let s = setup();

    s.client.set_read_cooldown(&s.admin, &60);
    assert_eq!(s.client.get_read_cooldown(), 60);

    s.env.ledger().set_timestamp(1_000);
    s.client.get_health_record(&s.alice, &s.record_id);

    // Half the window: still refused.
    s.env.ledger().set_timestamp(1_030);
    let res = s.client.try_get_health_record(&s.alice, &s.record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));

    // Full window: allowed again.
    s.env.ledger().set_timestamp(1_060);
    s.client.get_health_record(&s.alice, &s.record_id);
}

#[test]
fn test_zero_cooldown_disables_throttle() {
    let s = setup();
    s.client.set_read_cooldown(&s.admin, &0);

    s.env.ledger().set_timestamp(1_000);
    s.client.get_health_record(&s.alice, &s.record_id);
    s.client.get_health_record(&s.alice, &s.record_id);
    s.client.get_health_record(&s.alice, &s.record_id);
}

#[test]
fn test_set_cooldown_is_admin_only() {
    let s = setup();
    let stranger = Address::generate(&s.env);

    let res = s.client.try_set_read_cooldown(&stranger, &60);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));
    assert_eq!(
        s.client.get_read_cooldown(),
        throttle::DEFAULT_READ_COOLDOWN_SECS
    );
}

#[test]
fn test_emergency_access_is_not_throttled() {
    let s = setup();
    s.env.ledger().set_timestamp(1_000);

    // Break-glass reads must never queue behind the throttle.
    s.client.emergency_access(&s.admin, &s.record_id);
    s.client.emergency_access(&s.admin, &s.record_id);

    // The admin's gated reads still are.
    s.client.get_health_record(&s.admin, &s.record_id);
    let res = s.client.try_get_health_record(&s.admin, &s.record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RateLimited)));
}

#[test]
fn test_open_lookups_are_not_throttled() {
    let s = setup();
    s.env.ledger().set_timestamp(1_000);

    // Boolean lookups are non-sensitive and never consume the window.
    assert!(s.client.is_registered(&s.alice));
    assert!(s.client.is_provider(&s.admin));
    assert!(s.client.check_access(&s.alice, &s.alice));
    assert!(s.client.is_registered(&s.alice));

    // The window is still fresh for a gated read.
    s.client.get_health_record(&s.alice, &s.record_id);
}
