use thiserror::Error;

use crate::named_event::NamedEvent;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
pub type RuleResult<T> = std::result::Result<T, RuleError>;

/// Errors raised while building an [`crate::EventCatalog`].
///
/// These are fatal to catalog construction and are surfaced immediately,
/// before any classification takes place.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("rule `{named_event}` declares an empty event id set for channel `{channel}`")]
    EmptyIdSet {
        named_event: NamedEvent,
        channel: String,
    },

    #[error(
        "rules `{first}` and `{second}` both claim channel `{channel}` id {event_id}, \
         and neither can disambiguate by payload content"
    )]
    AmbiguousKey {
        channel: String,
        event_id: u32,
        first: NamedEvent,
        second: NamedEvent,
    },
}

/// A per-event soft failure inside one rule's field extraction.
///
/// The dispatcher treats the offending candidate as not-applicable and moves
/// on; a `RuleError` never aborts classification of a batch.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("required payload field `{field}` is missing")]
    MissingField { field: &'static str },

    #[error("payload field `{field}` is malformed: {reason}")]
    MalformedField { field: &'static str, reason: String },
}
