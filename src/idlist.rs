//! The IDList: `*ItemID TerminalID` (§4.4, part of C4).
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/idlist.rs`. Read through a
//! hand-written `BinRead` impl rather than a declarative derive because the
//! loop termination condition (a zero-size terminator item, with the whole
//! list bounded by a byte count handed down from the caller) isn't
//! expressible with `#[br(count = ...)]` alone — the same reason the
//! teacher used a manual loop here.

use binread::BinRead;
use getset::Getters;
use log::trace;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::InputError;
use crate::itemid::ItemID;

/// A parsed IDList: the item identifiers between the start of
/// LinkTargetIdentifier and its terminating zero-size record.
#[derive(Clone, Debug, Default, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct IdList {
    /// The item identifiers, in target-root-to-leaf order.
    item_id_list: Vec<ItemID>,
}

impl BinRead for IdList {
    type Args = (u16,);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        let mut item_id_list = Vec::new();
        let mut bytes_to_read = args.0;
        trace!("ID List size: {bytes_to_read}");

        while bytes_to_read > 0 {
            if bytes_to_read < 2 {
                return Err(binread::Error::Custom {
                    pos: reader.stream_position()?,
                    err: Box::new(InputError::truncated("IDList ended mid-item")),
                });
            }

            let item_id: ItemID = binread::BinReaderExt::read_le(reader)?;

            if bytes_to_read == 2 && item_id.size() == 0 {
                break;
            }

            bytes_to_read = bytes_to_read.saturating_sub(item_id.size());
            item_id_list.push(item_id);
        }

        Ok(Self { item_id_list })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binread::BinReaderExt;
    use std::io::Cursor;

    fn item_bytes(payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend_from_slice(&((payload.len() + 2) as u16).to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn empty_list_is_just_the_terminator() {
        let bytes = 0u16.to_le_bytes().to_vec();
        let mut cursor = Cursor::new(bytes.clone());
        let list: IdList = cursor.read_le_args((bytes.len() as u16,)).unwrap();
        assert!(list.item_id_list().is_empty());
    }

    #[test]
    fn two_items_then_terminator() {
        let mut bytes = item_bytes(&[1, 2, 3]);
        bytes.extend(item_bytes(&[4, 5]));
        bytes.extend_from_slice(&0u16.to_le_bytes());
        let total = bytes.len() as u16;
        let mut cursor = Cursor::new(bytes);
        let list: IdList = cursor.read_le_args((total,)).unwrap();
        assert_eq!(list.item_id_list().len(), 2);
        assert_eq!(list.item_id_list()[0].data(), &[1, 2, 3]);
        assert_eq!(list.item_id_list()[1].data(), &[4, 5]);
    }
}
