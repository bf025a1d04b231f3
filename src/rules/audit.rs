//! Audit-trail events.

use crate::classification::{AuditTrailChange, EventDetail};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::compose_pair;
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::SECURITY_CHANNEL;

/// 1102 is emitted by the event log service itself, not the auditing
/// provider.
const EVENTLOG_PROVIDER: &str = "Microsoft-Windows-Eventlog";

fn from_eventlog_service(raw: &RawEvent) -> bool {
    raw.provider == EVENTLOG_PROVIDER
}

fn audit_log_cleared(raw: &RawEvent) -> RuleResult<EventDetail> {
    Ok(EventDetail::AuditTrail(AuditTrailChange {
        subject: compose_pair(
            &raw.payload,
            "SubjectUserName",
            "SubjectDomainName",
            "\\",
            true,
            "",
        ),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    vec![
        RuleDescriptor::new(
            NamedEvent::AuditLogCleared,
            SECURITY_CHANNEL,
            &[1102u32][..],
            audit_log_cleared,
        )
        .with_predicate(from_eventlog_service),
    ]
}
