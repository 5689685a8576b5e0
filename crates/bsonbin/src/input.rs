use std::borrow::Cow;

use crate::{Error, Result, legacy};

/// Data accepted by [`Binary`](crate::Binary) constructors, `put` and `write`.
///
/// The shape of the input is fixed by the caller through the `From` impls, so
/// each operation only has to resolve it into bytes once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// A single numeric byte, range-checked on use.
    Byte(i64),
    Bytes(Cow<'a, [u8]>),
    /// Text, stored one byte per character.
    Text(Cow<'a, str>),
}

impl<'a> Input<'a> {
    /// Number of elements: bytes for `Bytes`, characters for `Text`.
    pub fn len(&self) -> usize {
        match self {
            Self::Byte(_) => 1,
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => legacy::encoded_len(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the input into the bytes it stands for.
    pub fn into_bytes(self) -> Result<Cow<'a, [u8]>> {
        match self {
            Self::Byte(value) => Ok(Cow::Owned(vec![Self::check_byte(value)?])),
            Self::Bytes(bytes) => Ok(bytes),
            Self::Text(text) => Ok(Cow::Owned(legacy::encode(&text))),
        }
    }

    /// Resolves the input into exactly one byte.
    pub fn into_byte(self) -> Result<u8> {
        match self {
            Self::Byte(value) => Self::check_byte(value),
            Self::Bytes(bytes) => match bytes.as_ref() {
                [byte] => Ok(*byte),
                other => Err(Error::NotSingleByte { len: other.len() }),
            },
            Self::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(legacy::encode_char(c)),
                    _ => Err(Error::NotSingleByte {
                        len: legacy::encoded_len(&text),
                    }),
                }
            }
        }
    }

    #[inline]
    fn check_byte(value: i64) -> Result<u8> {
        u8::try_from(value).map_err(|_| Error::InvalidByte { value })
    }
}

impl From<u8> for Input<'_> {
    fn from(value: u8) -> Self {
        Self::Byte(i64::from(value))
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Self::Byte(i64::from(value))
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Self::Byte(value)
    }
}

impl From<char> for Input<'_> {
    fn from(value: char) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(value))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(Cow::Borrowed(value.as_slice()))
    }
}

impl From<Vec<u8>> for Input<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(value))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}
