use core::fmt::Display;

use binread::BinRead;
use encoding_rs::Encoding;

use crate::error::InputError;

/// A string stored in a fixed-size buffer (used by ConsoleDataBlock's
/// font-face-name field, §4.7).
#[derive(Clone, Debug)]
pub struct FixedSizeString(String);

impl BinRead for FixedSizeString {
    type Args = (usize, &'static Encoding);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        let count = args.0;
        let encoding = args.1;
        let mut buffer = vec![0; count];
        reader.read_exact(&mut buffer)?;

        let (cow, _, had_errors) = encoding.decode(&buffer);
        if had_errors {
            return Err(binread::Error::Custom {
                pos: reader.stream_position()?,
                err: Box::new(InputError::invalid(format!(
                    "unable to decode string as {}",
                    encoding.name()
                ))),
            });
        }
        Ok(Self(cow.trim_end_matches('\0').to_string()))
    }
}

impl Display for FixedSizeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for FixedSizeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FixedSizeString {
    /// `true` if this string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
