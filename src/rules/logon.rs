//! Logon-session events.

use crate::classification::{EventDetail, LogonActivity};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{compose_pair, resolve, resolve_first};
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::{SECURITY_CHANNEL, from_security_auditing};

/// Human label for a numeric `LogonType`, or the raw value when the code is
/// not a known one.
fn logon_type_label(raw: &str) -> String {
    match raw.trim() {
        "2" => "Interactive".to_string(),
        "3" => "Network".to_string(),
        "4" => "Batch".to_string(),
        "5" => "Service".to_string(),
        "7" => "Unlock".to_string(),
        "8" => "NetworkCleartext".to_string(),
        "9" => "NewCredentials".to_string(),
        "10" => "RemoteInteractive".to_string(),
        "11" => "CachedInteractive".to_string(),
        other => other.to_string(),
    }
}

fn logon_activity(raw: &RawEvent) -> RuleResult<EventDetail> {
    let payload = &raw.payload;
    Ok(EventDetail::Logon(LogonActivity {
        subject: compose_pair(payload, "SubjectUserName", "SubjectDomainName", "\\", true, ""),
        target: compose_pair(payload, "TargetUserName", "TargetDomainName", "\\", true, ""),
        logon_type: logon_type_label(&resolve(payload, "LogonType")),
        // Older schema renders use the spaced display name.
        ip_address: resolve_first(payload, &["IpAddress", "Source Network Address"]),
        logon_process: resolve(payload, "LogonProcessName"),
        authentication_package: resolve(payload, "AuthenticationPackageName"),
        status: resolve(payload, "Status"),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    const RULES: &[(NamedEvent, &[u32])] = &[
        (NamedEvent::AccountLoggedOn, &[4624]),
        (NamedEvent::LogonFailed, &[4625]),
        (NamedEvent::AccountLoggedOff, &[4634]),
        (NamedEvent::UserInitiatedLogoff, &[4647]),
    ];

    RULES
        .iter()
        .map(|&(named_event, event_ids)| {
            RuleDescriptor::new(named_event, SECURITY_CHANNEL, event_ids, logon_activity)
                .with_predicate(from_security_auditing)
        })
        .collect()
}
