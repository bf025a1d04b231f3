//! Builtin rule implementations: the catalog's payload.
//!
//! Each module covers one event family and exposes `descriptors()`. The
//! registry below is the init-time enumeration the catalog's discovery modes
//! consume -- a plain data table in fixed source order, so discovery order
//! is stable across builds.

pub mod account;
pub mod audit;
pub mod directory;
pub mod group;
pub mod kerberos;
pub mod logon;
pub mod system;

use crate::descriptor::RuleDescriptor;
use crate::raw_event::RawEvent;

/// The Windows Security log channel every builtin rule reads from.
pub const SECURITY_CHANNEL: &str = "Security";

/// Provider name of the Security auditing subsystem.
pub const SECURITY_AUDITING_PROVIDER: &str = "Microsoft-Windows-Security-Auditing";

/// Shared applicability predicate: the record was emitted by the Security
/// auditing provider.
pub(crate) fn from_security_auditing(raw: &RawEvent) -> bool {
    raw.provider == SECURITY_AUDITING_PROVIDER
}

/// Every builtin descriptor, in fixed registration order.
pub fn builtin_descriptors() -> Vec<RuleDescriptor> {
    let mut all = Vec::new();
    all.extend(account::descriptors());
    all.extend(directory::descriptors());
    all.extend(group::descriptors());
    all.extend(kerberos::descriptors());
    all.extend(logon::descriptors());
    all.extend(system::descriptors());
    all.extend(audit::descriptors());
    all
}
