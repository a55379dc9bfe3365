//! LinkTargetIdentifier (§4.4, C4): the optional structure carrying the
//! link target's shell namespace identity, gated by
//! `DataFlags::HAS_LINK_TARGET_IDENTIFIER`.
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/linktarget.rs`. The format
//! breaks the payload into a sequence of `ItemID` records for shell
//! namespace navigation, which this crate keeps available internally via
//! [`LinkTargetIdentifier::id_list`], but the primary accessor surface
//! (§4.4, §1 Non-goals) treats the whole structure as an opaque byte blob
//! reachable through the size-probe/fill pattern, since deep semantic
//! interpretation of shell namespace items is out of scope.

use binread::BinRead;
use byteorder::{ByteOrder, LE};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::InputError;
use crate::idlist::IdList;
use crate::itemid::ItemID;

/// The parsed LinkTargetIdentifier structure.
#[derive(Clone, Debug, Default, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkTargetIdentifier {
    /// Size, in bytes, of the IDList field that follows.
    size: u16,

    #[br(args(size))]
    id_list: IdList,
}

impl LinkTargetIdentifier {
    /// The item identifiers making up the target's shell namespace path,
    /// from root to leaf. Kept available as a bonus internal layering; the
    /// format-level contract is the opaque blob returned by
    /// [`Self::raw_size`]/[`Self::fill_raw`].
    pub fn id_list(&self) -> &[ItemID] {
        self.id_list.item_id_list()
    }

    /// Byte size of the opaque LinkTargetIdentifier payload (the IDList
    /// size field plus the IDList bytes themselves), as returned by the
    /// size-probe half of the accessor pair.
    pub fn raw_size(&self) -> usize {
        2 + self
            .id_list
            .item_id_list()
            .iter()
            .map(|item| item.size() as usize)
            .sum::<usize>()
            + 2 // terminator
    }

    /// Fills `buf` with the re-serialized opaque LinkTargetIdentifier
    /// payload: the IDList size field, each ItemID record verbatim, and
    /// the zero-size terminator.
    pub fn fill_raw(&self, buf: &mut [u8]) -> Result<usize, InputError> {
        let needed = self.raw_size();
        if buf.len() < needed {
            return Err(InputError::invalid("destination buffer is too small"));
        }
        let mut offset = 0;
        LE::write_u16(&mut buf[offset..offset + 2], self.size);
        offset += 2;
        for item in self.id_list.item_id_list() {
            LE::write_u16(&mut buf[offset..offset + 2], item.size());
            offset += 2;
            let data = item.data();
            buf[offset..offset + data.len()].copy_from_slice(data);
            offset += data.len();
        }
        LE::write_u16(&mut buf[offset..offset + 2], 0);
        offset += 2;
        Ok(offset)
    }
}
