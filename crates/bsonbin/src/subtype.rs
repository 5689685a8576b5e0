use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Tag byte describing what kind of payload a [`Binary`](crate::Binary) holds.
///
/// Values 6 through 127 are reserved by the format, 128 and above are free for
/// application use.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "Subtype values should be attached to a binary value"]
pub struct Subtype(u8);

impl Subtype {
    pub const DEFAULT: Self = Self(0);
    pub const FUNCTION: Self = Self(1);
    pub const BYTE_ARRAY: Self = Self(2);
    pub const UUID_OLD: Self = Self(3);
    pub const UUID: Self = Self(4);
    pub const MD5: Self = Self(5);
    pub const USER_DEFINED: Self = Self(128);

    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn kind(self) -> SubtypeKind {
        match self.0 {
            0 => SubtypeKind::Generic,
            1 => SubtypeKind::Function,
            2 => SubtypeKind::ByteArray,
            3 => SubtypeKind::LegacyUuid,
            4 => SubtypeKind::Uuid,
            5 => SubtypeKind::Md5,
            v @ 6..=127 => SubtypeKind::Reserved(v),
            v => SubtypeKind::UserDefined(v),
        }
    }

    #[inline]
    pub fn is_user_defined(self) -> bool {
        self.0 >= Self::USER_DEFINED.0
    }

    /// Payload length mandated by the subtype, if any.
    pub fn expected_len(self) -> Option<usize> {
        match self.kind() {
            SubtypeKind::LegacyUuid | SubtypeKind::Uuid | SubtypeKind::Md5 => Some(16),
            _ => None,
        }
    }

    #[inline]
    pub fn is_uuid(self) -> bool {
        matches!(self.kind(), SubtypeKind::Uuid | SubtypeKind::LegacyUuid)
    }
}

/// Semantic classification of a [`Subtype`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtypeKind {
    Generic,
    Function,
    ByteArray,
    LegacyUuid,
    Uuid,
    Md5,
    Reserved(u8),
    UserDefined(u8),
}

impl From<u8> for Subtype {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Subtype> for u8 {
    fn from(value: Subtype) -> u8 {
        value.0
    }
}

/// Two lowercase hex digits, the way extended JSON spells it.
impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl FromStr for Subtype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidSubtype(s.to_owned()));
        }
        u8::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| Error::InvalidSubtype(s.to_owned()))
    }
}
