//! The closed vocabulary of recognized event categories.
//!
//! Rules register against these identifiers; every classified result carries
//! the one it matched. The set is closed on purpose -- downstream consumers
//! switch over it for reporting and export.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NamedEvent {
    // Account management (user).
    UserAccountCreated,
    UserAccountEnabled,
    UserAccountDisabled,
    UserAccountDeleted,
    UserAccountChanged,
    UserAccountLockedOut,

    // Account management (computer).
    ComputerAccountCreated,
    ComputerAccountChanged,
    ComputerAccountDeleted,

    // Group membership.
    GlobalGroupMemberAdded,
    GlobalGroupMemberRemoved,
    LocalGroupMemberAdded,
    LocalGroupMemberRemoved,
    UniversalGroupMemberAdded,
    UniversalGroupMemberRemoved,

    // Directory-service object changes, specialized by object class.
    ComputerObjectCreated,
    ComputerObjectModified,
    ComputerObjectMoved,
    ComputerObjectDeleted,
    GroupObjectCreated,
    GroupObjectModified,
    GroupObjectMoved,
    GroupObjectDeleted,
    OrganizationalUnitCreated,
    OrganizationalUnitModified,
    OrganizationalUnitMoved,
    OrganizationalUnitDeleted,
    DirectoryObjectCreated,
    DirectoryObjectModified,
    DirectoryObjectMoved,
    DirectoryObjectDeleted,

    // Kerberos.
    AuthenticationTicketGranted,
    ServiceTicketRequested,
    KerberosPreAuthFailed,

    // Logon sessions.
    AccountLoggedOn,
    LogonFailed,
    AccountLoggedOff,
    UserInitiatedLogoff,

    // System state.
    SystemTimeChanged,

    // Audit trail.
    AuditLogCleared,
}

impl NamedEvent {
    pub fn label(&self) -> &'static str {
        match self {
            NamedEvent::UserAccountCreated => "a user account was created",
            NamedEvent::UserAccountEnabled => "a user account was enabled",
            NamedEvent::UserAccountDisabled => "a user account was disabled",
            NamedEvent::UserAccountDeleted => "a user account was deleted",
            NamedEvent::UserAccountChanged => "a user account was changed",
            NamedEvent::UserAccountLockedOut => "a user account was locked out",
            NamedEvent::ComputerAccountCreated => "a computer account was created",
            NamedEvent::ComputerAccountChanged => "a computer account was changed",
            NamedEvent::ComputerAccountDeleted => "a computer account was deleted",
            NamedEvent::GlobalGroupMemberAdded => {
                "a member was added to a security-enabled global group"
            }
            NamedEvent::GlobalGroupMemberRemoved => {
                "a member was removed from a security-enabled global group"
            }
            NamedEvent::LocalGroupMemberAdded => {
                "a member was added to a security-enabled local group"
            }
            NamedEvent::LocalGroupMemberRemoved => {
                "a member was removed from a security-enabled local group"
            }
            NamedEvent::UniversalGroupMemberAdded => {
                "a member was added to a security-enabled universal group"
            }
            NamedEvent::UniversalGroupMemberRemoved => {
                "a member was removed from a security-enabled universal group"
            }
            NamedEvent::ComputerObjectCreated => "a computer object was created",
            NamedEvent::ComputerObjectModified => "a computer object was modified",
            NamedEvent::ComputerObjectMoved => "a computer object was moved",
            NamedEvent::ComputerObjectDeleted => "a computer object was deleted",
            NamedEvent::GroupObjectCreated => "a group object was created",
            NamedEvent::GroupObjectModified => "a group object was modified",
            NamedEvent::GroupObjectMoved => "a group object was moved",
            NamedEvent::GroupObjectDeleted => "a group object was deleted",
            NamedEvent::OrganizationalUnitCreated => "an organizational unit was created",
            NamedEvent::OrganizationalUnitModified => "an organizational unit was modified",
            NamedEvent::OrganizationalUnitMoved => "an organizational unit was moved",
            NamedEvent::OrganizationalUnitDeleted => "an organizational unit was deleted",
            NamedEvent::DirectoryObjectCreated => "a directory service object was created",
            NamedEvent::DirectoryObjectModified => "a directory service object was modified",
            NamedEvent::DirectoryObjectMoved => "a directory service object was moved",
            NamedEvent::DirectoryObjectDeleted => "a directory service object was deleted",
            NamedEvent::AuthenticationTicketGranted => {
                "a Kerberos authentication ticket was granted"
            }
            NamedEvent::ServiceTicketRequested => "a Kerberos service ticket was requested",
            NamedEvent::KerberosPreAuthFailed => "Kerberos pre-authentication failed",
            NamedEvent::AccountLoggedOn => "an account was successfully logged on",
            NamedEvent::LogonFailed => "an account failed to log on",
            NamedEvent::AccountLoggedOff => "an account was logged off",
            NamedEvent::UserInitiatedLogoff => "a user initiated logoff",
            NamedEvent::SystemTimeChanged => "the system time was changed",
            NamedEvent::AuditLogCleared => "the audit log was cleared",
        }
    }
}

impl fmt::Display for NamedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
