//! System-state events.

use jiff::Timestamp;

use crate::classification::{EventDetail, SystemTimeChange};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{
    compose_pair, parse_loose_timestamp, parse_split_timestamp, resolve,
};
use crate::named_event::NamedEvent;
use crate::raw_event::{Payload, RawEvent};

use super::{SECURITY_AUDITING_PROVIDER, SECURITY_CHANNEL};

/// Pre-Vista records carry the legacy "Security" source name instead of the
/// auditing provider.
const LEGACY_SECURITY_PROVIDER: &str = "Security";

fn from_security_sources(raw: &RawEvent) -> bool {
    raw.provider == SECURITY_AUDITING_PROVIDER || raw.provider == LEGACY_SECURITY_PROVIDER
}

/// A clock reading from the labeled field, falling back to the legacy
/// positional layout where the instant arrives split into a time field and a
/// date field.
fn clock_reading(
    payload: &Payload,
    labeled: &str,
    time_slot: &str,
    date_slot: &str,
) -> Option<Timestamp> {
    parse_loose_timestamp(&resolve(payload, labeled)).or_else(|| {
        parse_split_timestamp(&resolve(payload, date_slot), &resolve(payload, time_slot))
    })
}

fn system_time_changed(raw: &RawEvent) -> RuleResult<EventDetail> {
    let payload = &raw.payload;
    Ok(EventDetail::SystemTime(SystemTimeChange {
        subject: compose_pair(
            payload,
            "SubjectUserName",
            "SubjectDomainName",
            "\\",
            true,
            "",
        ),
        previous_time: clock_reading(payload, "PreviousTime", "data_0", "data_1"),
        new_time: clock_reading(payload, "NewTime", "data_2", "data_3"),
        process_name: resolve(payload, "ProcessName"),
    }))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    vec![
        // 520 is the pre-Vista shape of 4616; its payload is positional,
        // old time/old date/new time/new date in the first four slots.
        RuleDescriptor::new(
            NamedEvent::SystemTimeChanged,
            SECURITY_CHANNEL,
            &[520u32, 4616][..],
            system_time_changed,
        )
        .with_predicate(from_security_sources),
    ]
}
