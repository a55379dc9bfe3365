/// Reads a `bitflags!`-derived type's underlying integer off a `binread`
/// stream using `from_bits_retain` rather than `from_bits`.
///
/// Header invariant (spec.md §3): "unrecognized data-flag bits are
/// preserved (round-tripped in the accessor) but do not gate further
/// parsing." A strict `from_bits` would reject any reserved/unknown bit
/// outright; `from_bits_retain` keeps them, which is what every bitmap in
/// this crate needs since none of them are guaranteed fully enumerated by
/// the format documentation.
macro_rules! binread_flags {
    ($type: ty, $repr:ty) => {
        impl binread::BinRead for $type {
            type Args = ();

            fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
                reader: &mut R,
                _options: &binread::ReadOptions,
                _args: Self::Args,
            ) -> binread::prelude::BinResult<Self> {
                use binread::BinReaderExt;
                let raw: $repr = reader.read_le()?;
                Ok(Self::from_bits_retain(raw))
            }
        }
    };
}

pub(crate) use binread_flags;
