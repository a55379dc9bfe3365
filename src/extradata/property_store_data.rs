use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A serialized property storage structure ([MS-PROPSTORE] §2.2), carried
/// opaquely — interpreting individual properties is out of scope (§4.7,
/// signature `0xa0000009`).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size >= 8))]
#[getset(get = "pub")]
pub struct PropertyStoreDataBlock {
    /// The serialized property storage bytes, uninterpreted.
    #[br(count = block_size - 8)]
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    property_store: Vec<u8>,
}
