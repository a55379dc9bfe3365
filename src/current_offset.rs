//! A marker field that records the stream offset at which it was read,
//! used by [`crate::location::LocationInformation`] and its sub-structures
//! to anchor their internal offset fields (§4.5). Grounded on
//! `examples/lilopkins-lnk-rs/src/current_offset.rs`.

use binread::{io::StreamPosition, BinRead};

#[derive(Clone, Debug)]
pub struct CurrentOffset(u32);

impl BinRead for CurrentOffset {
    type Args = ();

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        _args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        Ok(Self(reader.stream_pos()?.try_into().unwrap_or(u32::MAX)))
    }
}

impl AsRef<u32> for CurrentOffset {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}