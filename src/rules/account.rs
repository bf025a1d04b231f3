//! Account-management events: user and computer account lifecycle.

use crate::classification::{AccountChange, EventDetail};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{compose_pair, resolve, resolve_first};
use crate::flags::{UserAccountControl, decode_flags};
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::{SECURITY_CHANNEL, from_security_auditing};

fn account_change(raw: &RawEvent) -> RuleResult<EventDetail> {
    let payload = &raw.payload;
    Ok(EventDetail::Account(AccountChange {
        subject: compose_pair(payload, "SubjectUserName", "SubjectDomainName", "\\", true, ""),
        target: compose_pair(payload, "TargetUserName", "TargetDomainName", "\\", true, ""),
        target_sid: resolve(payload, "TargetSid"),
        sam_account_name: resolve(payload, "SamAccountName"),
        // 4738/4742 report the new value; creation events carry the plain
        // field name.
        user_account_control: decode_flags::<UserAccountControl>(&resolve_first(
            payload,
            &["NewUacValue", "UserAccountControl"],
        )),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    const RULES: &[(NamedEvent, &[u32])] = &[
        (NamedEvent::UserAccountCreated, &[4720]),
        (NamedEvent::UserAccountEnabled, &[4722]),
        (NamedEvent::UserAccountDisabled, &[4725]),
        (NamedEvent::UserAccountDeleted, &[4726]),
        (NamedEvent::UserAccountChanged, &[4738]),
        (NamedEvent::UserAccountLockedOut, &[4740]),
        (NamedEvent::ComputerAccountCreated, &[4741]),
        (NamedEvent::ComputerAccountChanged, &[4742]),
        (NamedEvent::ComputerAccountDeleted, &[4743]),
    ];

    RULES
        .iter()
        .map(|&(named_event, event_ids)| {
            RuleDescriptor::new(named_event, SECURITY_CHANNEL, event_ids, account_change)
                .with_predicate(from_security_auditing)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_event::Payload;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;

    #[test]
    fn computer_account_creation_extracts_identities() {
        let raw = RawEvent {
            channel: SECURITY_CHANNEL.to_string(),
            provider: super::super::SECURITY_AUDITING_PROVIDER.to_string(),
            event_id: 4741,
            record_id: 1,
            time_created: Timestamp::UNIX_EPOCH,
            computer: "DC01".to_string(),
            message: "A computer account was created.".to_string(),
            payload: Payload::from_pairs([
                ("SubjectUserName", "admin"),
                ("SubjectDomainName", "CORP"),
                ("TargetUserName", "WS042$"),
                ("TargetDomainName", "CORP"),
                ("TargetSid", "S-1-5-21-1-2-3-1105"),
                ("SamAccountName", "WS042$"),
                ("NewUacValue", "0x1020"),
            ]),
        };

        let detail = account_change(&raw).unwrap();
        let EventDetail::Account(change) = detail else {
            panic!("expected account detail");
        };
        assert_eq!(change.subject, "CORP\\admin");
        assert_eq!(change.target, "CORP\\WS042$");
        assert_eq!(
            change.user_account_control,
            "PASSWORD_NOT_REQUIRED, WORKSTATION_TRUST_ACCOUNT"
        );
    }

    #[test]
    fn missing_uac_field_degrades_to_empty() {
        let raw = RawEvent {
            channel: SECURITY_CHANNEL.to_string(),
            provider: String::new(),
            event_id: 4726,
            record_id: 1,
            time_created: Timestamp::UNIX_EPOCH,
            computer: String::new(),
            message: String::new(),
            payload: Payload::from_pairs([("TargetUserName", "gone")]),
        };

        let EventDetail::Account(change) = account_change(&raw).unwrap() else {
            panic!("expected account detail");
        };
        assert_eq!(change.target, "gone");
        assert_eq!(change.user_account_control, "");
        assert_eq!(change.subject, "");
    }
}
