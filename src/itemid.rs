//! A single shell namespace item identifier (§4.4, part of C4).
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/itemid.rs`. The payload is
//! kept as an opaque byte blob — interpreting shell namespace item IDs is
//! explicitly out of scope (§1 Non-goals: "deep semantic interpretation").

use core::fmt;

use binread::BinRead;
#[cfg(feature = "serde")]
use serde::Serialize;

/// One element of an [`crate::idlist::IdList`]: a size-prefixed, opaque
/// byte record whose internal layout is shell-namespace-defined and not
/// interpreted by this crate.
#[derive(Clone, BinRead, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ItemID {
    /// Size, in bytes, of this structure including the size field itself.
    /// Zero marks the list terminator.
    #[br(assert(size == 0 || size > 2))]
    #[cfg_attr(feature = "serde", serde(skip))]
    size: u16,

    /// The shell-namespace-defined payload, uninterpreted.
    #[br(if(size > 0), count = if size > 0 { size - 2 } else { 0 })]
    data: Vec<u8>,
}

impl ItemID {
    /// Size, in bytes, of this item including the size field.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The opaque payload bytes of this item.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for ItemID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemID (raw data size {})", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binread::BinReaderExt;
    use std::io::Cursor;

    #[test]
    fn terminator_has_zero_size_and_no_data() {
        let bytes = [0u8, 0u8];
        let mut cursor = Cursor::new(bytes);
        let item: ItemID = cursor.read_le().unwrap();
        assert_eq!(item.size(), 0);
        assert!(item.data().is_empty());
    }

    #[test]
    fn item_retains_payload_verbatim() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&5u16.to_le_bytes());
        bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        let mut cursor = Cursor::new(bytes);
        let item: ItemID = cursor.read_le().unwrap();
        assert_eq!(item.data(), &[0xAA, 0xBB, 0xCC]);
    }
}
