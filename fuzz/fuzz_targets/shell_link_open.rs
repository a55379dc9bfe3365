#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use shelllink::ShellLink;

fuzz_target!(|data: &[u8]| {
    let mut link = ShellLink::initialize();
    if link.open_stream(Cursor::new(data.to_vec())).is_ok() {
        let _ = link.description();
        let _ = link.local_path();
        let _ = link.network_path();
        let count = link.data_block_count().unwrap_or(0);
        for i in 0..count {
            let _ = link.data_block_kind(i);
        }
    }
});
