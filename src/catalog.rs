//! The indexed, immutable collection of rule descriptors.
//!
//! The catalog is populated once, single-threaded, before classification
//! begins, and is read-only afterwards -- concurrent classification needs no
//! locking. Candidate order within a `(channel, id)` bucket is deterministic
//! and significant: descriptors carrying a disambiguating factory sort ahead
//! of the factory-less catch-all, and ties break on registration sequence.
//! Incidental discovery order is never relied on.

use hashbrown::{HashMap, HashSet};
use log::debug;

use crate::descriptor::RuleDescriptor;
use crate::err::{CatalogError, CatalogResult};
use crate::named_event::NamedEvent;
use crate::rules;

type ChannelIndex =
    HashMap<Box<str>, HashMap<u32, Vec<usize>, ahash::RandomState>, ahash::RandomState>;

/// How the catalog sources its descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryMode {
    /// Only programmatic registrations; the builtin registry is skipped.
    ExplicitOnly,
    /// Only the builtin registry enumeration.
    Builtin,
    /// Explicit registrations win per named-event identifier; the builtin
    /// registry fills in every identifier with no explicit registration.
    #[default]
    Auto,
}

#[derive(Default)]
pub struct CatalogBuilder {
    mode: DiscoveryMode,
    explicit: Vec<RuleDescriptor>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder::default()
    }

    pub fn discovery(mut self, mode: DiscoveryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn register(mut self, descriptor: RuleDescriptor) -> Self {
        self.explicit.push(descriptor);
        self
    }

    /// Assembles, orders and validates the catalog. Fails fast: an invalid
    /// registration set stops startup rather than surfacing as a runtime
    /// coin-flip on first classification.
    pub fn build(self) -> CatalogResult<EventCatalog> {
        let descriptors = match self.mode {
            DiscoveryMode::ExplicitOnly => self.explicit,
            DiscoveryMode::Builtin => rules::builtin_descriptors()
                .into_iter()
                .map(RuleDescriptor::mark_builtin)
                .collect(),
            DiscoveryMode::Auto => {
                let covered: HashSet<NamedEvent> = self
                    .explicit
                    .iter()
                    .map(RuleDescriptor::named_event)
                    .collect();
                let mut all = self.explicit;
                all.extend(
                    rules::builtin_descriptors()
                        .into_iter()
                        .filter(|descriptor| !covered.contains(&descriptor.named_event()))
                        .map(RuleDescriptor::mark_builtin),
                );
                all
            }
        };

        for descriptor in &descriptors {
            if descriptor.event_ids().is_empty() {
                return Err(CatalogError::EmptyIdSet {
                    named_event: descriptor.named_event(),
                    channel: descriptor.channel().to_string(),
                });
            }
        }

        let mut index = ChannelIndex::default();
        for (sequence, descriptor) in descriptors.iter().enumerate() {
            let by_id = index.entry_ref(descriptor.channel()).or_default();
            for &event_id in descriptor.event_ids() {
                by_id.entry(event_id).or_default().push(sequence);
            }
        }

        let mut key_count = 0_usize;
        for (channel, by_id) in &mut index {
            for (&event_id, bucket) in by_id.iter_mut() {
                // Specific (factory-bearing) candidates ahead of the
                // catch-all; registration sequence breaks ties.
                bucket.sort_by_key(|&sequence| {
                    (descriptors[sequence].disambiguator().is_none(), sequence)
                });

                let catch_alls: Vec<usize> = bucket
                    .iter()
                    .copied()
                    .filter(|&sequence| descriptors[sequence].disambiguator().is_none())
                    .collect();
                if let [first, second, ..] = catch_alls[..] {
                    return Err(CatalogError::AmbiguousKey {
                        channel: channel.to_string(),
                        event_id,
                        first: descriptors[first].named_event(),
                        second: descriptors[second].named_event(),
                    });
                }
                key_count += 1;
            }
        }

        debug!(
            "catalog built: {} descriptors over {} (channel, id) keys",
            descriptors.len(),
            key_count
        );

        Ok(EventCatalog { descriptors, index })
    }
}

/// Immutable after [`CatalogBuilder::build`]; shareable across threads
/// without coordination.
#[derive(Debug)]
pub struct EventCatalog {
    descriptors: Vec<RuleDescriptor>,
    index: ChannelIndex,
}

impl EventCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Catalog over the builtin rule set only.
    pub fn with_builtin_rules() -> CatalogResult<Self> {
        CatalogBuilder::new().discovery(DiscoveryMode::Builtin).build()
    }

    /// Candidate descriptors for a `(channel, id)` key, in dispatch order.
    pub fn candidates<'a>(
        &'a self,
        channel: &str,
        event_id: u32,
    ) -> impl Iterator<Item = &'a RuleDescriptor> {
        self.index
            .get(channel)
            .and_then(|by_id| by_id.get(&event_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&sequence| &self.descriptors[sequence])
    }

    pub fn descriptors(&self) -> &[RuleDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
