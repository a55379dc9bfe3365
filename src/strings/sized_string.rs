use std::fmt::Display;

use binread::{BinRead, BinReaderExt};
use encoding_rs::UTF_16LE;
use log::trace;

use crate::error::InputError;
use crate::strings::StringEncoding;

/// A string prefixed by a 2-byte character count, as used by StringData
/// entries (§4.6). Note the count is in characters, not bytes: doubled for
/// UTF-16LE reads.
#[derive(Clone, Debug)]
pub struct SizedString(String);

impl BinRead for SizedString {
    type Args = (StringEncoding,);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        let count_characters: u16 = reader.read_le()?;
        trace!(
            "reading sized string of size '{count_characters}' at 0x{:08x}",
            reader.stream_position()?
        );

        match args.0 {
            StringEncoding::CodePage(encoding) => {
                let mut buffer = vec![0; count_characters.into()];
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
                Ok(Self(cow.to_string()))
            }
            StringEncoding::Unicode => {
                let mut buffer = vec![0; usize::from(count_characters) * 2];
                reader.read_exact(&mut buffer)?;
                let (cow, _, had_errors) = UTF_16LE.decode(&buffer);
                if had_errors {
                    return Err(binread::Error::Custom {
                        pos: reader.stream_position()?,
                        err: Box::new(InputError::invalid("unable to decode string as UTF-16LE")),
                    });
                }
                Ok(Self(cow.to_string()))
            }
        }
    }
}

impl Display for SizedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
