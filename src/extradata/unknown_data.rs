use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An ExtraData block whose signature wasn't one of the 11 documented
/// values. Retained verbatim rather than treated as a parse failure, since
/// producers are free to add vendor-specific blocks (§4.7).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32))]
#[getset(get = "pub")]
pub struct UnknownDataBlock {
    /// The block's 4-byte signature.
    signature: u32,

    /// The block's payload, uninterpreted.
    #[br(count = block_size - 8)]
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    #[getset(skip)]
    bytes: Vec<u8>,
}

impl UnknownDataBlock {
    /// The block's payload, uninterpreted.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
