use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::idlist::IdList;
use crate::itemid::ItemID;

/// An alternate target IDList usable instead of LinkTargetIdentifier on
/// platforms that support it (§4.7, signature `0xa000000a`).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size >= 10))]
#[getset(get = "pub")]
pub struct VistaAndAboveIdListDataBlock {
    #[br(args((block_size.saturating_sub(8)) as u16,))]
    #[getset(skip)]
    id_list: IdList,
}

impl VistaAndAboveIdListDataBlock {
    /// The alternate item identifier list.
    pub fn id_list(&self) -> &[ItemID] {
        self.id_list.item_id_list()
    }
}
