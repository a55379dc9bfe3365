use core::fmt::Display;

use binread::{BinRead, BinReaderExt, NullWideString};

use crate::error::InputError;
use crate::strings::StringEncoding;

/// A string of unknown length terminated by a single NUL (codepage) or
/// double NUL (UTF-16LE) code unit, as used throughout LocationInformation
/// (§4.5).
#[derive(Clone, Debug)]
pub struct NullTerminatedString(String);

impl BinRead for NullTerminatedString {
    type Args = (StringEncoding,);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        match args.0 {
            StringEncoding::CodePage(encoding) => {
                let mut buffer = Vec::new();
                loop {
                    let c: u8 = reader.read_le()?;
                    if c == 0 {
                        break;
                    } else {
                        buffer.push(c);
                    }
                }
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
                let s: NullWideString = reader.read_le()?;
                Ok(Self(s.to_string()))
            }
        }
    }
}

impl Display for NullTerminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for NullTerminatedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
