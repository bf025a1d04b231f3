//! Bit-flag families carried by Security-channel payload fields, and a
//! shared decoder that renders them as human-readable flag lists.

use bitflags::{Flags, bitflags};

bitflags! {
    /// Account control bits carried by the `UserAccountControl` /
    /// `NewUacValue` payload fields of account-management events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UserAccountControl: u32 {
        const SCRIPT = 0x0000_0001;
        const ACCOUNT_DISABLED = 0x0000_0002;
        const HOME_DIR_REQUIRED = 0x0000_0008;
        const LOCKED_OUT = 0x0000_0010;
        const PASSWORD_NOT_REQUIRED = 0x0000_0020;
        const PASSWORD_CANT_CHANGE = 0x0000_0040;
        const ENCRYPTED_TEXT_PASSWORD_ALLOWED = 0x0000_0080;
        const TEMP_DUPLICATE_ACCOUNT = 0x0000_0100;
        const NORMAL_ACCOUNT = 0x0000_0200;
        const INTERDOMAIN_TRUST_ACCOUNT = 0x0000_0800;
        const WORKSTATION_TRUST_ACCOUNT = 0x0000_1000;
        const SERVER_TRUST_ACCOUNT = 0x0000_2000;
        const DONT_EXPIRE_PASSWORD = 0x0001_0000;
        const MNS_LOGON_ACCOUNT = 0x0002_0000;
        const SMARTCARD_REQUIRED = 0x0004_0000;
        const TRUSTED_FOR_DELEGATION = 0x0008_0000;
        const NOT_DELEGATED = 0x0010_0000;
        const USE_DES_KEY_ONLY = 0x0020_0000;
        const DONT_REQUIRE_PREAUTH = 0x0040_0000;
        const PASSWORD_EXPIRED = 0x0080_0000;
        const TRUSTED_TO_AUTH_FOR_DELEGATION = 0x0100_0000;
    }
}

bitflags! {
    /// KDC option bits carried by the `TicketOptions` payload field of
    /// Kerberos ticket events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TicketOptions: u32 {
        const FORWARDABLE = 0x4000_0000;
        const FORWARDED = 0x2000_0000;
        const PROXIABLE = 0x1000_0000;
        const PROXY = 0x0800_0000;
        const ALLOW_POSTDATE = 0x0400_0000;
        const POSTDATED = 0x0200_0000;
        const RENEWABLE = 0x0080_0000;
        const NAME_CANONICALIZE = 0x0001_0000;
        const RENEWABLE_OK = 0x0000_0010;
        const ENC_TKT_IN_SKEY = 0x0000_0008;
        const RENEW = 0x0000_0002;
        const VALIDATE = 0x0000_0001;
    }
}

fn parse_flag_bits(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        raw.parse::<u64>().ok()
    }
}

/// Decodes a raw numeric value (decimal or `0x`-prefixed hex) against the
/// flag family `F`.
///
/// Every declared non-zero flag whose bits are fully contained in the raw
/// value (`raw & flag == flag`) is listed, comma-joined, in declaration
/// order. Overlapping flags are all reported: the output documents every
/// matching label, not a minimal decomposition. When nothing matches, or the
/// value does not parse, the raw text is returned unchanged.
pub fn decode_flags<F>(raw: &str) -> String
where
    F: Flags + Copy,
    F::Bits: TryFrom<u64>,
{
    let Some(bits) = parse_flag_bits(raw) else {
        return raw.to_string();
    };
    let Ok(bits) = F::Bits::try_from(bits) else {
        return raw.to_string();
    };

    let value = F::from_bits_retain(bits);
    let mut names: Vec<&'static str> = Vec::new();
    for flag in F::FLAGS {
        let single = *flag.value();
        if single.is_empty() {
            continue;
        }
        if value.contains(single) {
            names.push(flag.name());
        }
    }

    if names.is_empty() {
        raw.to_string()
    } else {
        names.join(", ")
    }
}
