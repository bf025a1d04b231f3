#![allow(dead_code)]
use std::sync::Once;

use evtclass::{Payload, RawEvent};
use jiff::Timestamp;

static LOGGER_INIT: Once = Once::new();

// Rust runs the tests concurrently, so unless we synchronize logging access
// it will crash when attempting to run `cargo test` with some logging facilities.
pub fn ensure_env_logger_initialized() {
    use std::io::Write;

    LOGGER_INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
            .init();
    });
}

pub const SECURITY_AUDITING: &str = "Microsoft-Windows-Security-Auditing";

pub fn security_record<'a>(
    event_id: u32,
    message: &str,
    payload: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> RawEvent {
    RawEvent {
        channel: "Security".to_string(),
        provider: SECURITY_AUDITING.to_string(),
        event_id,
        record_id: 1000 + u64::from(event_id),
        time_created: Timestamp::UNIX_EPOCH,
        computer: "DC01.corp.local".to_string(),
        message: message.to_string(),
        payload: Payload::from_pairs(payload),
    }
}

pub fn computer_account_created() -> RawEvent {
    security_record(
        4741,
        "A computer account was created.",
        [
            ("SubjectUserName", "admin"),
            ("SubjectDomainName", "CORP"),
            ("TargetUserName", "WS042$"),
            ("TargetDomainName", "CORP"),
            ("TargetSid", "S-1-5-21-1-2-3-1105"),
            ("SamAccountName", "WS042$"),
            ("NewUacValue", "0x1020"),
        ],
    )
}

pub fn kerberos_preauth_failed() -> RawEvent {
    security_record(
        4771,
        "Kerberos pre-authentication failed.",
        [
            ("TargetUserName", "alice"),
            ("ServiceName", "krbtgt/CORP"),
            ("ClientAddress", "::ffff:10.0.0.42"),
            ("TicketOptions", "0x40810010"),
            ("FailureCode", "0x18"),
        ],
    )
}

pub fn directory_object_event(event_id: u32, message: &str, object_class: &str) -> RawEvent {
    security_record(
        event_id,
        message,
        [
            ("SubjectUserName", "admin"),
            ("SubjectDomainName", "CORP"),
            ("ObjectDN", "CN=Thing,DC=corp,DC=local"),
            ("ObjectGUID", "{11111111-2222-3333-4444-555555555555}"),
            ("ObjectClass", object_class),
            ("OperationType", "%%14674"),
        ],
    )
}
