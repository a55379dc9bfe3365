use binread::BinRead;
use encoding_rs::UTF_16LE;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::strings::FixedSizeString;

/// The name of a compatibility shim layer applied when the link target is
/// activated (§4.7, signature `0xa0000008`).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size >= 8))]
#[getset(get = "pub")]
pub struct ShimDataBlock {
    /// Name of the shim layer to apply.
    #[br(args((block_size - 8) as usize, UTF_16LE), map = |s: FixedSizeString| s.to_string())]
    #[getset(skip)]
    layer_name: String,
}

impl ShimDataBlock {
    /// Name of the shim layer to apply.
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }
}
