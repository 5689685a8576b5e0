use std::result;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Binary, Error, Result, Subtype, TextFormat};

/// Extended JSON shapes of a binary value.
///
/// Serialization always emits the canonical form; the legacy form is only
/// accepted on input.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Canonical {
        #[serde(rename = "$binary")]
        binary: Body,
    },
    Legacy {
        #[serde(rename = "$binary")]
        base64: String,
        #[serde(rename = "$type")]
        subtype: String,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Body {
    base64: String,
    sub_type: String,
}

impl From<&Binary> for Repr {
    fn from(value: &Binary) -> Self {
        Self::Canonical {
            binary: Body {
                base64: value.to_formatted_string(TextFormat::Base64),
                sub_type: value.subtype().to_string(),
            },
        }
    }
}

impl TryFrom<Repr> for Binary {
    type Error = Error;

    fn try_from(value: Repr) -> Result<Self> {
        let (base64, subtype) = match value {
            Repr::Canonical { binary } => (binary.base64, binary.sub_type),
            Repr::Legacy { base64, subtype } => (base64, subtype),
        };
        Self::from_formatted(&base64, TextFormat::Base64, subtype.parse::<Subtype>()?)
    }
}

impl Serialize for Binary {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Repr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Repr::deserialize(deserializer)?
            .try_into()
            .map_err(de::Error::custom)
    }
}
