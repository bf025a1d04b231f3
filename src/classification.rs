//! Typed classification results.
//!
//! A classified event is an envelope of record provenance plus an
//! [`EventDetail`]: an internally tagged enum whose variant is the
//! discriminator downstream consumers switch on. Classification is
//! all-or-nothing per record -- there are no partial results.

use jiff::Timestamp;
use serde::Serialize;

use crate::fields::OperationKind;
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

/// Fields extracted by the account-management rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountChange {
    /// `domain\user` that performed the operation.
    pub subject: String,
    /// `domain\account` the operation acted on.
    pub target: String,
    pub target_sid: String,
    pub sam_account_name: String,
    /// Decoded `UserAccountControl` flag list, or the raw value when no
    /// flag matched.
    pub user_account_control: String,
}

/// Fields extracted by the directory-service object rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryObjectChange {
    pub subject: String,
    /// Live distinguished name. For "object was moved" records this is the
    /// new DN, not the stale one the schema leaves behind.
    pub object_dn: String,
    pub object_guid: String,
    pub object_class: String,
    pub attribute_name: String,
    pub attribute_value: String,
    pub operation: OperationKind,
}

/// Fields extracted by the group-membership rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMembershipChange {
    pub subject: String,
    /// Distinguished name of the member added or removed.
    pub member: String,
    pub member_sid: String,
    /// `domain\group` identity.
    pub group: String,
    pub group_sid: String,
}

/// Fields extracted by the Kerberos ticket rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketActivity {
    /// `user@REALM` the ticket was requested for.
    pub target: String,
    pub service_name: String,
    pub client_address: String,
    /// Decoded `TicketOptions` flag list, or the raw value.
    pub ticket_options: String,
    /// Status or failure code, whichever spelling the schema used.
    pub status: String,
    pub encryption_type: String,
}

/// Fields extracted by the logon-session rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogonActivity {
    pub subject: String,
    pub target: String,
    /// Human label for the numeric logon type, or the raw value.
    pub logon_type: String,
    pub ip_address: String,
    pub logon_process: String,
    pub authentication_package: String,
    pub status: String,
}

/// Fields extracted by the system-state rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemTimeChange {
    pub subject: String,
    /// Clock reading before the change, when the record carried a
    /// parseable one.
    pub previous_time: Option<Timestamp>,
    /// Clock reading after the change.
    pub new_time: Option<Timestamp>,
    pub process_name: String,
}

/// Fields extracted by the audit-trail rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditTrailChange {
    pub subject: String,
}

/// Rule-specific extracted fields, tagged by result family.
///
/// The serde tag doubles as the discriminator consumed by tabular export.
/// Directory-service changes keep one field shape but split into
/// class-specific variants so a computer object change never serializes
/// under the generic tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum EventDetail {
    Account(AccountChange),
    ComputerObject(DirectoryObjectChange),
    GroupObject(DirectoryObjectChange),
    OrganizationalUnit(DirectoryObjectChange),
    DirectoryObject(DirectoryObjectChange),
    GroupMembership(GroupMembershipChange),
    Ticket(TicketActivity),
    Logon(LogonActivity),
    SystemTime(SystemTimeChange),
    AuditTrail(AuditTrailChange),
}

/// One typed classification outcome, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedEvent {
    pub named_event: NamedEvent,
    pub record_id: u64,
    pub time_created: Timestamp,
    pub computer: String,
    #[serde(flatten)]
    pub detail: EventDetail,
}

impl ClassifiedEvent {
    pub(crate) fn from_raw(named_event: NamedEvent, raw: &RawEvent, detail: EventDetail) -> Self {
        ClassifiedEvent {
            named_event,
            record_id: raw.record_id,
            time_created: raw.time_created,
            computer: raw.computer.clone(),
            detail,
        }
    }
}

/// Outcome of classifying one raw event.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Classified(ClassifiedEvent),
    /// No rule matched. A normal, expected outcome -- the caller decides
    /// whether to log, count, or drop it.
    Unclassified,
}

impl Classification {
    pub fn is_classified(&self) -> bool {
        matches!(self, Classification::Classified(_))
    }

    pub fn classified(&self) -> Option<&ClassifiedEvent> {
        match self {
            Classification::Classified(event) => Some(event),
            Classification::Unclassified => None,
        }
    }

    pub fn into_classified(self) -> Option<ClassifiedEvent> {
        match self {
            Classification::Classified(event) => Some(event),
            Classification::Unclassified => None,
        }
    }
}
