//! The guarded first-match-wins dispatch chain.
//!
//! For one raw event: look up the `(channel, id)` candidates, run each
//! candidate's cheap predicate, then its payload-inspecting disambiguator or
//! unconditional constructor, and stop at the first constructed result. At
//! most one result per event. Construction has no observable side effects,
//! so classification is repeatable and safe to run concurrently over an
//! immutable catalog.

use log::{trace, warn};

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

use crate::catalog::EventCatalog;
use crate::classification::{Classification, ClassifiedEvent};
use crate::raw_event::RawEvent;

/// Classifies one raw event against the catalog.
///
/// A candidate whose extraction faults is logged and treated as
/// not-applicable for this event only -- one malformed record never aborts a
/// batch. An event no candidate claims is [`Classification::Unclassified`].
pub fn classify(catalog: &EventCatalog, raw: &RawEvent) -> Classification {
    let mut saw_candidate = false;

    for descriptor in catalog.candidates(&raw.channel, raw.event_id) {
        saw_candidate = true;

        if let Some(predicate) = descriptor.predicate()
            && !predicate(raw)
        {
            continue;
        }

        if let Some(disambiguator) = descriptor.disambiguator() {
            match disambiguator(raw) {
                Ok(Some(detail)) => {
                    return Classification::Classified(ClassifiedEvent::from_raw(
                        descriptor.named_event(),
                        raw,
                        detail,
                    ));
                }
                Ok(None) => continue,
                Err(error) => {
                    warn!(
                        "rule `{}` faulted on record {} (channel `{}` id {}): {}",
                        descriptor.named_event(),
                        raw.record_id,
                        raw.channel,
                        raw.event_id,
                        error
                    );
                    continue;
                }
            }
        }

        match (descriptor.constructor())(raw) {
            Ok(detail) => {
                return Classification::Classified(ClassifiedEvent::from_raw(
                    descriptor.named_event(),
                    raw,
                    detail,
                ));
            }
            Err(error) => {
                warn!(
                    "rule `{}` faulted on record {} (channel `{}` id {}): {}",
                    descriptor.named_event(),
                    raw.record_id,
                    raw.channel,
                    raw.event_id,
                    error
                );
                continue;
            }
        }
    }

    if !saw_candidate {
        trace!(
            "no candidates for channel `{}` id {} (record {})",
            raw.channel, raw.event_id, raw.record_id
        );
    }

    Classification::Unclassified
}

/// Classifies a batch sequentially, preserving input order.
pub fn classify_all(catalog: &EventCatalog, events: &[RawEvent]) -> Vec<Classification> {
    events.iter().map(|raw| classify(catalog, raw)).collect()
}

/// Classifies a batch in parallel, preserving input order. The catalog is
/// read-only, so workers need no coordination.
#[cfg(feature = "multithreading")]
pub fn par_classify(catalog: &EventCatalog, events: &[RawEvent]) -> Vec<Classification> {
    events.par_iter().map(|raw| classify(catalog, raw)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, DiscoveryMode};
    use crate::classification::{AuditTrailChange, EventDetail};
    use crate::descriptor::RuleDescriptor;
    use crate::err::{RuleError, RuleResult};
    use crate::named_event::NamedEvent;
    use crate::raw_event::Payload;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;

    fn raw(channel: &str, event_id: u32) -> RawEvent {
        RawEvent {
            channel: channel.to_string(),
            provider: "Test-Provider".to_string(),
            event_id,
            record_id: 7,
            time_created: Timestamp::UNIX_EPOCH,
            computer: "HOST".to_string(),
            message: String::new(),
            payload: Payload::new(),
        }
    }

    fn detail(subject: &str) -> EventDetail {
        EventDetail::AuditTrail(AuditTrailChange {
            subject: subject.to_string(),
        })
    }

    fn ok_constructor(_raw: &RawEvent) -> RuleResult<EventDetail> {
        Ok(detail("constructed"))
    }

    fn faulting_constructor(_raw: &RawEvent) -> RuleResult<EventDetail> {
        Err(RuleError::MissingField { field: "Subject" })
    }

    #[test]
    fn unknown_key_is_unclassified() {
        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(RuleDescriptor::new(
                NamedEvent::AuditLogCleared,
                "Test",
                &[100u32][..],
                ok_constructor,
            ))
            .build()
            .unwrap();

        assert_eq!(
            classify(&catalog, &raw("Test", 999)),
            Classification::Unclassified
        );
        assert_eq!(
            classify(&catalog, &raw("Other", 100)),
            Classification::Unclassified
        );
    }

    #[test]
    fn false_predicate_skips_candidate() {
        fn never(_raw: &RawEvent) -> bool {
            false
        }

        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(
                RuleDescriptor::new(
                    NamedEvent::AuditLogCleared,
                    "Test",
                    &[100u32][..],
                    ok_constructor,
                )
                .with_predicate(never),
            )
            .build()
            .unwrap();

        assert_eq!(
            classify(&catalog, &raw("Test", 100)),
            Classification::Unclassified
        );
    }

    #[test]
    fn constructor_fault_falls_through_to_next_candidate() {
        fn claims_everything(_raw: &RawEvent) -> RuleResult<Option<EventDetail>> {
            Err(RuleError::MissingField { field: "Whatever" })
        }

        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(
                RuleDescriptor::new(
                    NamedEvent::AccountLoggedOn,
                    "Test",
                    &[100u32][..],
                    faulting_constructor,
                )
                .with_disambiguator(claims_everything),
            )
            .register(RuleDescriptor::new(
                NamedEvent::AuditLogCleared,
                "Test",
                &[100u32][..],
                ok_constructor,
            ))
            .build()
            .unwrap();

        let outcome = classify(&catalog, &raw("Test", 100));
        let classified = outcome.classified().expect("fallback should classify");
        assert_eq!(classified.named_event, NamedEvent::AuditLogCleared);
    }

    #[test]
    fn classification_is_idempotent() {
        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(RuleDescriptor::new(
                NamedEvent::AuditLogCleared,
                "Test",
                &[100u32][..],
                ok_constructor,
            ))
            .build()
            .unwrap();

        let event = raw("Test", 100);
        assert_eq!(classify(&catalog, &event), classify(&catalog, &event));
    }

    #[test]
    fn classify_all_preserves_order() {
        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(RuleDescriptor::new(
                NamedEvent::AuditLogCleared,
                "Test",
                &[100u32][..],
                ok_constructor,
            ))
            .build()
            .unwrap();

        let events = vec![raw("Test", 100), raw("Test", 999), raw("Test", 100)];
        let outcomes = classify_all(&catalog, &events);
        assert!(outcomes[0].is_classified());
        assert!(!outcomes[1].is_classified());
        assert!(outcomes[2].is_classified());
    }

    #[cfg(feature = "multithreading")]
    #[test]
    fn par_classify_matches_sequential() {
        let catalog = CatalogBuilder::new()
            .discovery(DiscoveryMode::ExplicitOnly)
            .register(RuleDescriptor::new(
                NamedEvent::AuditLogCleared,
                "Test",
                &[100u32][..],
                ok_constructor,
            ))
            .build()
            .unwrap();

        let events: Vec<RawEvent> = (0..64)
            .map(|i| raw("Test", if i % 2 == 0 { 100 } else { 999 }))
            .collect();
        assert_eq!(par_classify(&catalog, &events), classify_all(&catalog, &events));
    }
}
