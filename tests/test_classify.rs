mod fixtures;
use fixtures::*;

use evtclass::{
    Classification, EventCatalog, EventDetail, NamedEvent, classify, classify_all,
};
use pretty_assertions::assert_eq;

#[test]
fn computer_account_creation_is_classified() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let outcome = classify(&catalog, &computer_account_created());
    let event = outcome.classified().expect("4741 should classify");

    assert_eq!(event.named_event, NamedEvent::ComputerAccountCreated);
    assert_eq!(event.computer, "DC01.corp.local");
    let EventDetail::Account(change) = &event.detail else {
        panic!("expected account detail, got {:?}", event.detail);
    };
    assert_eq!(change.subject, "CORP\\admin");
    assert_eq!(change.target, "CORP\\WS042$");
    assert_eq!(
        change.user_account_control,
        "PASSWORD_NOT_REQUIRED, WORKSTATION_TRUST_ACCOUNT"
    );
}

#[test]
fn kerberos_preauth_failure_is_classified() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let outcome = classify(&catalog, &kerberos_preauth_failed());
    let event = outcome.classified().expect("4771 should classify");

    assert_eq!(event.named_event, NamedEvent::KerberosPreAuthFailed);
    let EventDetail::Ticket(activity) = &event.detail else {
        panic!("expected ticket detail, got {:?}", event.detail);
    };
    assert_eq!(activity.status, "0x18");
    assert_eq!(activity.service_name, "krbtgt/CORP");
}

#[test]
fn unknown_channel_or_id_is_unclassified() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let mut unknown_id = computer_account_created();
    unknown_id.event_id = 9999;
    assert_eq!(classify(&catalog, &unknown_id), Classification::Unclassified);

    let mut unknown_channel = computer_account_created();
    unknown_channel.channel = "Application".to_string();
    assert_eq!(
        classify(&catalog, &unknown_channel),
        Classification::Unclassified
    );
}

#[test]
fn wrong_provider_is_rejected_by_predicate() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let mut spoofed = computer_account_created();
    spoofed.provider = "Contoso-Custom-Provider".to_string();
    assert_eq!(classify(&catalog, &spoofed), Classification::Unclassified);
}

#[test]
fn classification_is_idempotent() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let record = kerberos_preauth_failed();
    assert_eq!(classify(&catalog, &record), classify(&catalog, &record));
}

#[test]
fn batch_with_malformed_record_still_classifies_the_rest() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    // An empty-payload 4741 resolves every field to sentinels; it still
    // classifies rather than poisoning the batch.
    let degenerate = security_record(4741, "", []);
    let batch = vec![
        computer_account_created(),
        degenerate,
        kerberos_preauth_failed(),
    ];

    let outcomes = classify_all(&catalog, &batch);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(Classification::is_classified));

    let EventDetail::Account(change) = &outcomes[1].classified().unwrap().detail else {
        panic!("expected account detail");
    };
    assert_eq!(change.subject, "");
    assert_eq!(change.target, "");
}

#[test]
fn legacy_time_change_recombines_split_date_and_time_fields() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    // Pre-Vista 520 records: positional payload, each instant split across
    // a time field and a date field.
    let mut record = security_record(
        520,
        "The system time was changed.",
        [
            ("data_0", "08:51:44"),
            ("data_1", "2025-02-12"),
            ("data_2", "09:00:00"),
            ("data_3", "2025-02-12"),
        ],
    );
    record.provider = "Security".to_string();

    let event = classify(&catalog, &record)
        .into_classified()
        .expect("520 should classify");
    assert_eq!(event.named_event, NamedEvent::SystemTimeChanged);
    let EventDetail::SystemTime(change) = &event.detail else {
        panic!("expected system time detail, got {:?}", event.detail);
    };
    assert!(change.previous_time.is_some());
    assert!(change.new_time.is_some());
}

#[test]
fn classified_event_serializes_for_export() {
    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let event = classify(&catalog, &computer_account_created())
        .into_classified()
        .unwrap();
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["named_event"], "ComputerAccountCreated");
    assert_eq!(json["kind"], "Account");
    assert_eq!(json["target"], "CORP\\WS042$");
}

#[cfg(feature = "multithreading")]
#[test]
fn parallel_classification_matches_sequential() {
    use evtclass::par_classify;

    ensure_env_logger_initialized();
    let catalog = EventCatalog::with_builtin_rules().unwrap();

    let batch: Vec<_> = (0..128)
        .map(|i| {
            if i % 3 == 0 {
                computer_account_created()
            } else if i % 3 == 1 {
                kerberos_preauth_failed()
            } else {
                security_record(9999, "", [])
            }
        })
        .collect();

    assert_eq!(par_classify(&catalog, &batch), classify_all(&catalog, &batch));
}
