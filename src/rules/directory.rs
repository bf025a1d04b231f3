//! Directory-service object events (5136/5137/5139/5141).
//!
//! All four ids share one payload shape, discriminated by `ObjectClass`.
//! Each id therefore registers three class-specific descriptors with a
//! payload disambiguator plus one factory-less catch-all for every other
//! object class.

use crate::classification::{DirectoryObjectChange, EventDetail};
use crate::descriptor::RuleDescriptor;
use crate::err::RuleResult;
use crate::fields::{compose_pair, operation_kind, resolve, substitute_when};
use crate::named_event::NamedEvent;
use crate::raw_event::RawEvent;

use super::{SECURITY_CHANNEL, from_security_auditing};

/// Message subject of a 5139 record. Moved objects keep the live DN in
/// `NewObjectDN`; `ObjectDN` is stale for that sub-type.
const OBJECT_MOVED_SUBJECT: &str = "A directory service object was moved.";

const OBJECT_CLASS_COMPUTER: &str = "computer";
const OBJECT_CLASS_GROUP: &str = "group";
const OBJECT_CLASS_OU: &str = "organizationalUnit";

fn directory_change(raw: &RawEvent) -> DirectoryObjectChange {
    let payload = &raw.payload;
    let object_dn = resolve(payload, "ObjectDN");
    let object_dn = substitute_when(
        raw.subject(),
        OBJECT_MOVED_SUBJECT,
        &object_dn,
        &resolve(payload, "NewObjectDN"),
    );

    DirectoryObjectChange {
        subject: compose_pair(payload, "SubjectUserName", "SubjectDomainName", "\\", true, ""),
        object_dn,
        object_guid: resolve(payload, "ObjectGUID"),
        object_class: resolve(payload, "ObjectClass"),
        attribute_name: resolve(payload, "AttributeLDAPDisplayName"),
        attribute_value: resolve(payload, "AttributeValue"),
        operation: operation_kind(&resolve(payload, "OperationType")),
    }
}

fn computer_object(raw: &RawEvent) -> RuleResult<Option<EventDetail>> {
    Ok((resolve(&raw.payload, "ObjectClass") == OBJECT_CLASS_COMPUTER)
        .then(|| EventDetail::ComputerObject(directory_change(raw))))
}

fn group_object(raw: &RawEvent) -> RuleResult<Option<EventDetail>> {
    Ok((resolve(&raw.payload, "ObjectClass") == OBJECT_CLASS_GROUP)
        .then(|| EventDetail::GroupObject(directory_change(raw))))
}

fn organizational_unit(raw: &RawEvent) -> RuleResult<Option<EventDetail>> {
    Ok((resolve(&raw.payload, "ObjectClass") == OBJECT_CLASS_OU)
        .then(|| EventDetail::OrganizationalUnit(directory_change(raw))))
}

fn any_object(raw: &RawEvent) -> RuleResult<EventDetail> {
    Ok(EventDetail::DirectoryObject(directory_change(raw)))
}

pub fn descriptors() -> Vec<RuleDescriptor> {
    // (event id, computer/group/OU specializations, generic fallback)
    const OPERATIONS: &[(&[u32], [NamedEvent; 3], NamedEvent)] = &[
        (
            &[5137],
            [
                NamedEvent::ComputerObjectCreated,
                NamedEvent::GroupObjectCreated,
                NamedEvent::OrganizationalUnitCreated,
            ],
            NamedEvent::DirectoryObjectCreated,
        ),
        (
            &[5136],
            [
                NamedEvent::ComputerObjectModified,
                NamedEvent::GroupObjectModified,
                NamedEvent::OrganizationalUnitModified,
            ],
            NamedEvent::DirectoryObjectModified,
        ),
        (
            &[5139],
            [
                NamedEvent::ComputerObjectMoved,
                NamedEvent::GroupObjectMoved,
                NamedEvent::OrganizationalUnitMoved,
            ],
            NamedEvent::DirectoryObjectMoved,
        ),
        (
            &[5141],
            [
                NamedEvent::ComputerObjectDeleted,
                NamedEvent::GroupObjectDeleted,
                NamedEvent::OrganizationalUnitDeleted,
            ],
            NamedEvent::DirectoryObjectDeleted,
        ),
    ];

    let mut all = Vec::with_capacity(OPERATIONS.len() * 4);
    for &(ids, [computer, group, ou], generic) in OPERATIONS {
        all.push(
            RuleDescriptor::new(computer, SECURITY_CHANNEL, ids, any_object)
                .with_predicate(from_security_auditing)
                .with_disambiguator(computer_object),
        );
        all.push(
            RuleDescriptor::new(group, SECURITY_CHANNEL, ids, any_object)
                .with_predicate(from_security_auditing)
                .with_disambiguator(group_object),
        );
        all.push(
            RuleDescriptor::new(ou, SECURITY_CHANNEL, ids, any_object)
                .with_predicate(from_security_auditing)
                .with_disambiguator(organizational_unit),
        );
        all.push(
            RuleDescriptor::new(generic, SECURITY_CHANNEL, ids, any_object)
                .with_predicate(from_security_auditing),
        );
    }
    all
}
