//! ExtraData (§4.7, C7): a sequence of signature-tagged blocks appended
//! after StringData, conveying additional information about the link
//! target. Terminated by a 4-byte zero length.
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/extradata/mod.rs`, which
//! already dispatches on the 11 documented signatures via `binread`'s
//! magic-tagged enum derive. Three things needed generalizing to satisfy
//! this crate's invariants: an unrecognized signature must retain its
//! `{size, signature, bytes}` verbatim rather than failing the whole
//! parse (added as the [`ExtraDataBlock::Unknown`] fallback arm, which
//! `binread`'s enum derive tries when none of the magic-tagged arms
//! match); a size below the 4-byte size field's own width (0, 1, 2, or 3)
//! is a terminal sentinel like the canonical 0, since it can't encode a
//! real block header, and the loop simply stops rather than erroring; and
//! a size of 4..=7 — too small for a block but too large to be a
//! plausible sentinel — is reported as `InputError::Truncated` rather
//! than silently misreading subsequent bytes as a new block.

use binread::BinRead;
#[allow(unused)]
use log::{debug, error, info, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::InputError;

pub use self::{
    console_data::ConsoleDataBlock, console_fe_data::ConsoleFEDataBlock,
    darwin_data::DarwinDataBlock, environment_variable_data::EnvironmentVariableDataBlock,
    icon_environment_data::IconEnvironmentDataBlock, known_folder_data::KnownFolderDataBlock,
    property_store_data::PropertyStoreDataBlock, shim_data::ShimDataBlock,
    special_folder_data::SpecialFolderDataBlock, tracker_data::TrackerDataBlock,
    unknown_data::UnknownDataBlock, vista_and_above_id_list_data::VistaAndAboveIdListDataBlock,
};

/// Console display settings for a link target that runs in a console window.
pub mod console_data;
/// Code page used for console text, for East Asian locales.
pub mod console_fe_data;
/// An application identifier usable instead of a LinkTargetIdentifier.
pub mod darwin_data;
/// A path to environment-variable information for the link target.
pub mod environment_variable_data;
/// An environment-variable-encoded path to an icon.
pub mod icon_environment_data;
/// The location of a known folder that is (or contains) the link target.
pub mod known_folder_data;
/// A serialized property storage structure, carried opaquely.
pub mod property_store_data;
/// The name of a compatibility shim applied when the target is activated.
pub mod shim_data;
/// The location of a special folder that is (or contains) the link target.
pub mod special_folder_data;
/// Distributed link tracking data used to relocate a moved target.
pub mod tracker_data;
/// A block whose signature didn't match any of the known 11, retained verbatim.
pub mod unknown_data;
/// An alternate target IDList for platforms newer than the base format.
pub mod vista_and_above_id_list_data;

/// One signature-tagged ExtraData block (§6 "ExtraData signatures").
#[allow(missing_docs)]
#[derive(Clone, Debug, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32, default_codepage: &'static encoding_rs::Encoding))]
pub enum ExtraDataBlock {
    #[br(magic = 0xa0000002u32)]
    ConsoleProps(#[br(args(block_size,))] ConsoleDataBlock),
    #[br(magic = 0xa0000004u32)]
    ConsoleFeProps(#[br(args(block_size,))] ConsoleFEDataBlock),
    #[br(magic = 0xa0000006u32)]
    DarwinProps(#[br(args(block_size, default_codepage))] DarwinDataBlock),
    #[br(magic = 0xa0000001u32)]
    EnvironmentProps(#[br(args(block_size, default_codepage))] EnvironmentVariableDataBlock),
    #[br(magic = 0xa0000007u32)]
    IconEnvironmentProps(#[br(args(block_size, default_codepage))] IconEnvironmentDataBlock),
    #[br(magic = 0xa000000bu32)]
    KnownFolderProps(#[br(args(block_size,))] KnownFolderDataBlock),
    #[br(magic = 0xa0000009u32)]
    PropertyStoreProps(#[br(args(block_size,))] PropertyStoreDataBlock),
    #[br(magic = 0xa0000008u32)]
    ShimProps(#[br(args(block_size,))] ShimDataBlock),
    #[br(magic = 0xa0000005u32)]
    SpecialFolderProps(#[br(args(block_size,))] SpecialFolderDataBlock),
    #[br(magic = 0xa0000003u32)]
    TrackerProps(#[br(args(block_size, default_codepage))] TrackerDataBlock),
    #[br(magic = 0xa000000au32)]
    VistaAndAboveIdListProps(#[br(args(block_size,))] VistaAndAboveIdListDataBlock),
    /// Catch-all for any signature not in the documented set. Retains the
    /// block's signature and payload verbatim instead of failing the parse.
    Unknown(#[br(args(block_size,))] UnknownDataBlock),
}

impl ExtraDataBlock {
    /// The 4-byte signature identifying this block's kind.
    pub fn signature(&self) -> u32 {
        match self {
            ExtraDataBlock::ConsoleProps(_) => 0xa0000002,
            ExtraDataBlock::ConsoleFeProps(_) => 0xa0000004,
            ExtraDataBlock::DarwinProps(_) => 0xa0000006,
            ExtraDataBlock::EnvironmentProps(_) => 0xa0000001,
            ExtraDataBlock::IconEnvironmentProps(_) => 0xa0000007,
            ExtraDataBlock::KnownFolderProps(_) => 0xa000000b,
            ExtraDataBlock::PropertyStoreProps(_) => 0xa0000009,
            ExtraDataBlock::ShimProps(_) => 0xa0000008,
            ExtraDataBlock::SpecialFolderProps(_) => 0xa0000005,
            ExtraDataBlock::TrackerProps(_) => 0xa0000003,
            ExtraDataBlock::VistaAndAboveIdListProps(_) => 0xa000000a,
            ExtraDataBlock::Unknown(b) => b.signature(),
        }
    }
}

/// One ExtraData block together with the raw bytes it was parsed from, so
/// the accessor surface can return the block's opaque payload (§4.9 "raw
/// data (size-probe/fill)") as well as its typed sub-accessors.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExtraDataRecord {
    signature: u32,
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    raw: Vec<u8>,
    kind: ExtraDataBlock,
}

impl ExtraDataRecord {
    /// The 4-byte signature identifying this block's kind.
    pub fn signature(&self) -> u32 {
        self.signature
    }

    /// This block's payload, verbatim, starting at the signature field
    /// (i.e. everything after the leading 4-byte block size).
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The typed, decoded form of this block.
    pub fn kind(&self) -> &ExtraDataBlock {
        &self.kind
    }
}

/// The ordered sequence of ExtraData blocks trailing a shell link.
#[derive(Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExtraData {
    blocks: Vec<ExtraDataRecord>,
}

impl ExtraData {
    /// The parsed blocks, in on-disk order.
    pub fn blocks(&self) -> &[ExtraDataRecord] {
        &self.blocks
    }
}

impl BinRead for ExtraData {
    type Args = (&'static encoding_rs::Encoding,);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        use binread::BinReaderExt;
        use std::io::Cursor;

        let default_codepage = args.0;
        let mut blocks = Vec::new();
        loop {
            let block_size: u32 = reader.read_le()?;
            if block_size < 4 {
                // A size below the 4-byte size field's own width can't encode a
                // real block; treat it the same as the canonical 0 terminator.
                trace!("ExtraData block size {block_size} is below 4 bytes; treating as terminal");
                break;
            }
            if block_size < 8 {
                warn!("ExtraData block size {block_size} is below the 8-byte minimum; stopping");
                return Err(binread::Error::Custom {
                    pos: reader.stream_position()?,
                    err: Box::new(InputError::truncated("extra data block shorter than 8 bytes")),
                });
            }
            trace!("Parsing ExtraData block of size {block_size}");

            let mut raw = vec![0u8; (block_size - 4) as usize];
            reader.read_exact(&mut raw).map_err(|_| binread::Error::Custom {
                pos: reader.stream_position().unwrap_or_default(),
                err: Box::new(InputError::truncated("extra data block shorter than its declared size")),
            })?;
            let signature = u32::from_le_bytes(raw[..4].try_into().unwrap());
            let mut cursor = Cursor::new(&raw);
            let kind: ExtraDataBlock = cursor.read_le_args((block_size, default_codepage))?;

            blocks.push(ExtraDataRecord { signature, raw, kind });
        }
        Ok(Self { blocks })
    }
}
