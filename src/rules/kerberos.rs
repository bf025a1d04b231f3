//! Kerberos ticket events: TGT grants, service ticket requests, and
//! pre-authentication failures.

use crate::classification::{EventDetail, TicketActivity};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{compose_pair, resolve, resolve_first};
use crate::flags::{TicketOptions, decode_flags};
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::{SECURITY_CHANNEL, from_security_auditing};

fn ticket_activity(raw: &RawEvent) -> RuleResult<EventDetail> {
    let payload = &raw.payload;
    Ok(EventDetail::Ticket(TicketActivity {
        target: compose_pair(payload, "TargetUserName", "TargetDomainName", "@", false, ""),
        service_name: resolve(payload, "ServiceName"),
        // 4768/4769 spell the client address `IpAddress`; 4771 uses
        // `ClientAddress`.
        client_address: resolve_first(payload, &["IpAddress", "ClientAddress"]),
        ticket_options: decode_flags::<TicketOptions>(&resolve(payload, "TicketOptions")),
        // Failed pre-auth reports `FailureCode` instead of `Status`.
        status: resolve_first(payload, &["Status", "FailureCode"]),
        encryption_type: resolve(payload, "TicketEncryptionType"),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    const RULES: &[(NamedEvent, &[u32])] = &[
        (NamedEvent::AuthenticationTicketGranted, &[4768]),
        (NamedEvent::ServiceTicketRequested, &[4769]),
        (NamedEvent::KerberosPreAuthFailed, &[4771]),
    ];

    RULES
        .iter()
        .map(|&(named_event, event_ids)| {
            RuleDescriptor::new(named_event, SECURITY_CHANNEL, event_ids, ticket_activity)
                .with_predicate(from_security_auditing)
        })
        .collect()
}
