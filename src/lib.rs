//! `evtclass` classifies raw Windows event-log records into strongly typed,
//! semantically named domain events.
//!
//! A [`RawEvent`] (channel, provider, numeric id, flat key/value payload) is
//! matched against an [`EventCatalog`] of rule descriptors; the first
//! applicable rule extracts and normalizes its fields into a
//! [`ClassifiedEvent`]. Records no rule claims come back as
//! [`Classification::Unclassified`].
//!
//! ```
//! use evtclass::{EventCatalog, NamedEvent, Payload, RawEvent, classify};
//!
//! let catalog = EventCatalog::with_builtin_rules().unwrap();
//!
//! let record = RawEvent {
//!     channel: "Security".to_string(),
//!     provider: "Microsoft-Windows-Security-Auditing".to_string(),
//!     event_id: 4741,
//!     record_id: 1,
//!     time_created: jiff::Timestamp::UNIX_EPOCH,
//!     computer: "DC01".to_string(),
//!     message: "A computer account was created.".to_string(),
//!     payload: Payload::from_pairs([
//!         ("SubjectUserName", "admin"),
//!         ("SubjectDomainName", "CORP"),
//!         ("TargetUserName", "WS042$"),
//!     ]),
//! };
//!
//! let outcome = classify(&catalog, &record);
//! assert_eq!(
//!     outcome.classified().unwrap().named_event,
//!     NamedEvent::ComputerAccountCreated
//! );
//! ```

pub mod catalog;
pub mod classification;
pub mod descriptor;
pub mod dispatch;
pub mod err;
pub mod fields;
pub mod flags;
pub mod named_event;
pub mod raw_event;
pub mod rules;

pub use catalog::{CatalogBuilder, DiscoveryMode, EventCatalog};
pub use classification::{Classification, ClassifiedEvent, EventDetail};
pub use descriptor::{RuleDescriptor, RuleOrigin};
#[cfg(feature = "multithreading")]
pub use dispatch::par_classify;
pub use dispatch::{classify, classify_all};
pub use err::{CatalogError, RuleError};
pub use fields::OperationKind;
pub use named_event::NamedEvent;
pub use raw_event::{Payload, RawEvent};
