use std::fmt::Display;
use std::str::FromStr;

use binread::BinRead;
#[cfg(feature = "serde")]
use serde::Serialize;
use uuid::{Builder, Uuid};

use crate::error::InputError;

/// A 16-byte GUID as it appears on the wire: little-endian for the first
/// three fields, big-endian for the last two (the standard mixed-endian
/// GUID packet representation, §6). Renders to, and parses from, the
/// canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` textual form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Guid(Uuid);

impl Guid {
    /// Fills `buf` (which must be at least 16 bytes) with this GUID's
    /// on-wire mixed-endian byte representation, the way the C9 accessor
    /// surface's GUID getters fill a caller buffer.
    pub fn fill(&self, buf: &mut [u8]) -> Result<(), InputError> {
        if buf.len() < 16 {
            return Err(InputError::invalid("GUID buffer must be at least 16 bytes"));
        }
        buf[..16].copy_from_slice(&self.0.to_bytes_le());
        Ok(())
    }

    /// Builds a `Guid` from its on-wire mixed-endian 16-byte representation.
    pub fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Self(Builder::from_bytes_le(bytes).into_uuid())
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for Guid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl BinRead for Guid {
    type Args = ();

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        _args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        let mut bytes = [0; 16];
        reader.read_exact(&mut bytes)?;
        Ok(Self::from_bytes_le(bytes))
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_round_trips_through_fill() {
        let bytes: [u8; 16] = [
            0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x46,
        ];
        let guid = Guid::from_bytes_le(bytes);
        let text = guid.to_string();
        let reparsed: Guid = text.parse().unwrap();
        let mut filled = [0u8; 16];
        reparsed.fill(&mut filled).unwrap();
        assert_eq!(filled, bytes);
    }
}
