use std::{fmt, str::FromStr};

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{Error, Result, legacy};

/// Named text encodings a binary payload can be rendered to or parsed from.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// Lowercase hexadecimal, two digits per byte.
    Hex,
    /// Standard alphabet, padded.
    Base64,
    /// UTF-8, invalid sequences replaced with U+FFFD.
    #[default]
    Utf8,
    /// One character per byte, same code.
    Latin1,
    /// One character per byte, high bit cleared.
    Ascii,
    /// Little-endian UTF-16 code units; a trailing odd byte is dropped.
    Utf16Le,
}

impl TextFormat {
    pub const ALL: [Self; 6] = [
        Self::Hex,
        Self::Base64,
        Self::Utf8,
        Self::Latin1,
        Self::Ascii,
        Self::Utf16Le,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
            Self::Utf16Le => "utf16le",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base64 => STANDARD.encode(bytes),
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => legacy::decode(bytes),
            Self::Ascii => bytes.iter().map(|b| char::from(b & 0x7f)).collect(),
            Self::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }

    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Hex => hex::decode(text)?,
            Self::Base64 => STANDARD.decode(text)?,
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Latin1 | Self::Ascii => legacy::encode(text),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        })
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "hex" => Self::Hex,
            "base64" => Self::Base64,
            "utf8" | "utf-8" => Self::Utf8,
            "latin1" | "binary" => Self::Latin1,
            "ascii" => Self::Ascii,
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Self::Utf16Le,
            _ => return Err(Error::UnknownFormat(s.to_owned())),
        })
    }
}
