//! Rule metadata: the data-driven routing table entries the catalog indexes.
//!
//! A descriptor is tagged data, not behavior attached to a type: each rule
//! module builds its descriptors as plain values and hands them to the
//! registry. The dispatcher depends only on the function contracts carried
//! here, never on concrete rule types.

use std::borrow::Cow;

use crate::classification::EventDetail;
use crate::err::RuleResult;
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

/// Cheap applicability check beyond channel/id (provider name, usually).
/// Runs before any payload-dependent work.
pub type Predicate = fn(&RawEvent) -> bool;

/// Payload-inspecting factory used when several descriptors share one
/// `(channel, id)` key. `Ok(None)` means "not applicable, try the next
/// candidate"; an `Err` is a soft per-event fault.
pub type Disambiguator = fn(&RawEvent) -> RuleResult<Option<EventDetail>>;

/// Unconditional constructor for descriptors without a disambiguator.
pub type Constructor = fn(&RawEvent) -> RuleResult<EventDetail>;

/// How a descriptor reached the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Registered programmatically on the builder.
    Explicit,
    /// Enumerated from the builtin rule registry at build time.
    Builtin,
}

#[derive(Clone)]
pub struct RuleDescriptor {
    named_event: NamedEvent,
    channel: Cow<'static, str>,
    event_ids: Cow<'static, [u32]>,
    predicate: Option<Predicate>,
    disambiguator: Option<Disambiguator>,
    constructor: Constructor,
    origin: RuleOrigin,
}

impl RuleDescriptor {
    pub fn new(
        named_event: NamedEvent,
        channel: impl Into<Cow<'static, str>>,
        event_ids: impl Into<Cow<'static, [u32]>>,
        constructor: Constructor,
    ) -> Self {
        RuleDescriptor {
            named_event,
            channel: channel.into(),
            event_ids: event_ids.into(),
            predicate: None,
            disambiguator: None,
            constructor,
            origin: RuleOrigin::Explicit,
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_disambiguator(mut self, disambiguator: Disambiguator) -> Self {
        self.disambiguator = Some(disambiguator);
        self
    }

    pub(crate) fn mark_builtin(mut self) -> Self {
        self.origin = RuleOrigin::Builtin;
        self
    }

    pub fn named_event(&self) -> NamedEvent {
        self.named_event
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn event_ids(&self) -> &[u32] {
        &self.event_ids
    }

    pub fn predicate(&self) -> Option<Predicate> {
        self.predicate
    }

    pub fn disambiguator(&self) -> Option<Disambiguator> {
        self.disambiguator
    }

    pub fn constructor(&self) -> Constructor {
        self.constructor
    }

    pub fn origin(&self) -> RuleOrigin {
        self.origin
    }
}

impl std::fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("named_event", &self.named_event)
            .field("channel", &self.channel)
            .field("event_ids", &self.event_ids)
            .field("has_predicate", &self.predicate.is_some())
            .field("has_disambiguator", &self.disambiguator.is_some())
            .field("origin", &self.origin)
            .finish()
    }
}
