use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::{debug, trace};

use crate::{BUFFER_SIZE, Error, Input, Result, Subtype, TextFormat, legacy};

/// Binary payload with an explicit subtype and a logical length.
///
/// Behaves like an append-only byte buffer: `position` marks the end of the
/// written content, the backing store may be larger. The store only grows,
/// and growing never moves bytes that were already written.
#[derive(Clone)]
#[must_use = "Binary should be stored to access the data"]
pub struct Binary {
    subtype: Subtype,
    /// Backing store; its length is the capacity.
    store: Vec<u8>,
    /// Logical length, always `<= store.len()`.
    position: usize,
}

/// Content of a [`Binary`] as returned by [`Binary::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Legacy single-byte-per-character string.
    Text(String),
    Raw(Vec<u8>),
}

impl Binary {
    /// Creates an empty value of subtype [`Subtype::DEFAULT`].
    pub fn new() -> Self {
        Self::with_subtype(Subtype::DEFAULT)
    }

    pub fn with_subtype(subtype: Subtype) -> Self {
        Self::with_capacity(subtype, BUFFER_SIZE)
    }

    /// Creates an empty value with `capacity` bytes preallocated.
    pub fn with_capacity(subtype: Subtype, capacity: usize) -> Self {
        Self {
            subtype,
            store: vec![0; capacity],
            position: 0,
        }
    }

    /// Creates a value holding exactly `bytes`, with no spare capacity.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, subtype: Subtype) -> Self {
        let store = bytes.into();
        Self {
            subtype,
            position: store.len(),
            store,
        }
    }

    /// Creates a value from `text`, one byte per character.
    pub fn from_text(text: &str, subtype: Subtype) -> Self {
        Self::from_bytes(legacy::encode(text), subtype)
    }

    pub fn from_input<'a>(input: impl Into<Input<'a>>, subtype: Subtype) -> Result<Self> {
        let bytes = input.into().into_bytes()?;
        Ok(Self::from_bytes(bytes.into_owned(), subtype))
    }

    /// Parses `text` written in `format`.
    pub fn from_formatted(text: &str, format: TextFormat, subtype: Subtype) -> Result<Self> {
        Ok(Self::from_bytes(format.decode(text)?, subtype))
    }

    /// Parses a hex UUID (hyphens ignored) into a 16 byte value of subtype
    /// [`Subtype::UUID`].
    pub fn from_uuid_str(uuid: &str) -> Result<Self> {
        let digits: String = uuid.chars().filter(|c| *c != '-').collect();
        let bytes = hex::decode(digits)?;
        if bytes.len() != 16 {
            return Err(Error::InvalidUuid(bytes.len()));
        }
        Ok(Self::from_bytes(bytes, Subtype::UUID))
    }

    #[inline]
    pub fn subtype(&self) -> Subtype {
        self.subtype
    }

    /// Logical length of the content, not the capacity.
    #[inline]
    pub fn len(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position == 0
    }

    /// Size of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Appends a single byte.
    ///
    /// Numeric input must be in `0..=255`, byte and text input must hold
    /// exactly one element. When the store is full it grows by
    /// [`BUFFER_SIZE`] bytes.
    pub fn put<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<()> {
        let byte = input.into().into_byte()?;

        if self.position == self.store.len() {
            self.grow(self.store.len().saturating_add(BUFFER_SIZE), self.position, 1)?;
        }

        self.store[self.position] = byte;
        self.position += 1;
        Ok(())
    }

    /// Writes `input` at `offset`, or at the end of the content when `None`.
    ///
    /// Writing below the current length overwrites in place and leaves the
    /// length unchanged; writing past it extends the length to the end of the
    /// write. Bytes in a gap between the old length and `offset` are
    /// unspecified. A write whose end cannot be allocated fails with
    /// [`Error::OutOfRange`] and leaves the value unchanged.
    pub fn write<'a>(&mut self, input: impl Into<Input<'a>>, offset: Option<usize>) -> Result<()> {
        let data = input.into().into_bytes()?;
        let offset = offset.unwrap_or(self.position);
        let capacity = self.store.len();

        let Some(end) = offset.checked_add(data.len()) else {
            return Err(Error::OutOfRange {
                offset,
                len: data.len(),
                capacity,
            });
        };

        if end > capacity {
            self.grow(capacity.saturating_add(data.len()).max(end), offset, data.len())?;
        }

        self.store[offset..end].copy_from_slice(&data);
        self.position = self.position.max(end);
        Ok(())
    }

    /// Borrows `len` bytes starting at `offset`.
    ///
    /// A missing or zero `len` means the full logical length, counted from
    /// `offset` rather than up to the end of the content, so `read(2, None)`
    /// on a 10 byte value asks for bytes `2..12`. The window may reach past
    /// the content into spare capacity but never past the store.
    pub fn read(&self, offset: usize, len: Option<usize>) -> Result<&[u8]> {
        let len = len.filter(|len| *len > 0).unwrap_or(self.position);
        let capacity = self.store.len();

        let end = offset
            .checked_add(len)
            .filter(|end| *end <= capacity)
            .ok_or(Error::OutOfRange {
                offset,
                len,
                capacity,
            })?;

        if end > self.position {
            trace!(
                "Reading {offset}..{end} past the logical length {}",
                self.position
            );
        }

        Ok(&self.store[offset..end])
    }

    /// The written content.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.store[..self.position]
    }

    /// Returns the content as a legacy string, or as an owned byte copy when
    /// `as_raw` is set.
    pub fn value(&self, as_raw: bool) -> Value {
        if as_raw {
            Value::Raw(self.value_raw())
        } else {
            Value::Text(self.value_text())
        }
    }

    #[inline]
    pub fn value_text(&self) -> String {
        legacy::decode(self.as_bytes())
    }

    #[inline]
    pub fn value_raw(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.store.truncate(self.position);
        self.store
    }

    /// Base64 of the whole backing store, spare capacity included.
    ///
    /// Use [`Binary::to_formatted_string`] with [`TextFormat::Base64`] for the
    /// content alone.
    pub fn to_raw_bytes(&self) -> String {
        STANDARD.encode(&self.store)
    }

    /// Renders the content in `format`.
    pub fn to_formatted_string(&self, format: TextFormat) -> String {
        format.encode(self.as_bytes())
    }

    /// Hyphenated lowercase form of a 16 byte UUID value.
    pub fn to_uuid_string(&self) -> Result<String> {
        if !self.subtype.is_uuid() || self.position != 16 {
            return Err(Error::NotUuid {
                subtype: self.subtype,
                len: self.position,
            });
        }

        let hex = hex::encode(self.as_bytes());
        Ok(format!(
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        ))
    }

    /// Grows the store to `capacity` bytes so that `len` bytes fit at
    /// `offset`. Fails without touching the store when the allocation is
    /// impossible.
    #[cold]
    fn grow(&mut self, capacity: usize, offset: usize, len: usize) -> Result<()> {
        let old = self.store.len();
        if self.store.try_reserve_exact(capacity - old).is_err() {
            return Err(Error::OutOfRange {
                offset,
                len,
                capacity: old,
            });
        }

        debug!(
            "Growing binary store from {old} to {capacity} bytes ({} in use)",
            self.position
        );
        self.store.resize(capacity, 0);
        Ok(())
    }
}

impl Default for Binary {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        self.subtype == other.subtype && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Binary {}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary")
            .field("subtype", &self.subtype)
            .field("len", &self.position)
            .field("capacity", &self.store.len())
            .field("data", &hex::encode(self.as_bytes()))
            .finish()
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Binary {
    fn from(value: Vec<u8>) -> Self {
        Self::from_bytes(value, Subtype::DEFAULT)
    }
}

impl From<&[u8]> for Binary {
    fn from(value: &[u8]) -> Self {
        Self::from_bytes(value, Subtype::DEFAULT)
    }
}

impl From<&str> for Binary {
    fn from(value: &str) -> Self {
        Self::from_text(value, Subtype::DEFAULT)
    }
}
