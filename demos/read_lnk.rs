//! Prints the accessor surface of every `.lnk` file named on the command
//! line.
//!
//! Grounded on the teacher's `examples/read_lnk.rs`, which printed a
//! `#[derive(Debug)]`-dumped `ShellLink` — not possible here since
//! `ShellLink` is a stateful handle rather than a plain data struct, so
//! this walks the accessor surface instead.

use std::env;

use shelllink::ShellLink;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("usage: read_lnk <file.lnk> [more.lnk ...]");
        return;
    }

    for arg in &args[1..] {
        println!("{arg}:");
        let link = match ShellLink::open(arg) {
            Ok(link) => link,
            Err(e) => {
                eprintln!("  failed to open: {e}");
                continue;
            }
        };

        println!("  file_size: {:?}", link.file_size());
        println!("  show_command: {:?}", link.show_command());
        println!("  description: {:?}", link.description());
        println!("  relative_path: {:?}", link.relative_path());
        println!("  working_dir: {:?}", link.working_dir());
        println!("  arguments: {:?}", link.arguments());
        println!("  icon_location: {:?}", link.icon_location());
        println!("  local_path: {:?}", link.local_path());
        println!("  network_path: {:?}", link.network_path());

        if let Ok(count) = link.data_block_count() {
            println!("  data_blocks: {count}");
        }
    }
}
