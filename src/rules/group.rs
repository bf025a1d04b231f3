//! Group-membership events: member added/removed per group flavor.

use crate::classification::{EventDetail, GroupMembershipChange};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{compose_pair, resolve};
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::{SECURITY_CHANNEL, from_security_auditing};

fn membership_change(raw: &RawEvent) -> RuleResult<EventDetail> {
    let payload = &raw.payload;
    Ok(EventDetail::GroupMembership(GroupMembershipChange {
        subject: compose_pair(payload, "SubjectUserName", "SubjectDomainName", "\\", true, ""),
        member: resolve(payload, "MemberName"),
        member_sid: resolve(payload, "MemberSid"),
        // The group itself rides in the Target* fields for this family.
        group: compose_pair(payload, "TargetUserName", "TargetDomainName", "\\", true, ""),
        group_sid: resolve(payload, "TargetSid"),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    const RULES: &[(NamedEvent, &[u32])] = &[
        (NamedEvent::GlobalGroupMemberAdded, &[4728]),
        (NamedEvent::GlobalGroupMemberRemoved, &[4729]),
        (NamedEvent::LocalGroupMemberAdded, &[4732]),
        (NamedEvent::LocalGroupMemberRemoved, &[4733]),
        (NamedEvent::UniversalGroupMemberAdded, &[4756]),
        (NamedEvent::UniversalGroupMemberRemoved, &[4757]),
    ];

    RULES
        .iter()
        .map(|&(named_event, event_ids)| {
            RuleDescriptor::new(named_event, SECURITY_CHANNEL, event_ids, membership_change)
                .with_predicate(from_security_auditing)
        })
        .collect()
}
