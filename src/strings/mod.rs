mod string_encoding;
mod fixed_size_string;
mod null_terminated_string;
mod sized_string;

pub use string_encoding::*;
pub use fixed_size_string::*;
pub use null_terminated_string::*;
pub use sized_string::*;