//! Thin CLI demo over the `shelllink` accessor surface.
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/bin/lnk2json/main.rs`'s
//! `clap`/`simplelog`/`clap_verbosity_flag` wiring, generalized because
//! the crate no longer derives `Serialize` for the whole `ShellLink`
//! handle (it's an opaque, stateful file handle, not a data struct) —
//! this prints the fields the accessor surface exposes instead of
//! serializing the handle itself.

use clap::Parser;
use shelllink::{AsciiCodepage, ShellLink};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[clap(name = "lnkinfo", author, version, about = "Inspect a Windows .lnk shortcut file", long_about = None)]
struct Cli {
    /// Path to the .lnk file to inspect.
    path: std::path::PathBuf,

    /// ASCII codepage used to decode non-Unicode strings.
    #[clap(short = 'c', long, default_value = "windows-1252")]
    codepage: String,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn parse_codepage(name: &str) -> anyhow::Result<AsciiCodepage> {
    use AsciiCodepage::*;
    Ok(match name.to_ascii_lowercase().as_str() {
        "ascii" => Ascii,
        "iso-8859-1" | "latin1" => Iso8859_1,
        "iso-8859-2" | "latin2" => Iso8859_2,
        "iso-8859-3" => Iso8859_3,
        "iso-8859-4" => Iso8859_4,
        "iso-8859-5" => Iso8859_5,
        "iso-8859-6" => Iso8859_6,
        "iso-8859-7" => Iso8859_7,
        "iso-8859-8" => Iso8859_8,
        "iso-8859-9" => Iso8859_9,
        "iso-8859-10" => Iso8859_10,
        "iso-8859-11" => Iso8859_11,
        "iso-8859-13" => Iso8859_13,
        "iso-8859-14" => Iso8859_14,
        "iso-8859-15" => Iso8859_15,
        "iso-8859-16" => Iso8859_16,
        "koi8-r" => Koi8R,
        "koi8-u" => Koi8U,
        "windows-874" => Windows874,
        "windows-932" => Windows932,
        "windows-936" => Windows936,
        "windows-949" => Windows949,
        "windows-950" => Windows950,
        "windows-1250" => Windows1250,
        "windows-1251" => Windows1251,
        "windows-1252" => Windows1252,
        "windows-1253" => Windows1253,
        "windows-1254" => Windows1254,
        "windows-1255" => Windows1255,
        "windows-1256" => Windows1256,
        "windows-1257" => Windows1257,
        "windows-1258" => Windows1258,
        other => anyhow::bail!("unrecognized codepage: {other}"),
    })
}

fn print_string_field(label: &str, value: Result<Option<&str>, shelllink::Error>) {
    match value {
        Ok(Some(s)) => println!("{label}: {s}"),
        Ok(None) => {}
        Err(e) => eprintln!("{label}: <error: {e}>"),
    }
}

fn print_owned_string_field(label: &str, value: Result<Option<String>, shelllink::Error>) {
    match value {
        Ok(Some(s)) => println!("{label}: {s}"),
        Ok(None) => {}
        Err(e) => eprintln!("{label}: <error: {e}>"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    if !cli.path.exists() {
        anyhow::bail!("the file you specified does not exist");
    }
    if !cli.path.is_file() {
        anyhow::bail!("you did not specify a file");
    }

    let codepage = parse_codepage(&cli.codepage)?;
    let mut link = ShellLink::initialize();
    link.set_ascii_codepage(codepage);
    link.open_path(&cli.path)?;

    println!("file: {}", cli.path.display());
    println!("file_size: {}", link.file_size()?);
    println!("show_command: {:?}", link.show_command()?);
    println!("icon_index: {}", link.icon_index()?);
    println!("link_refers_to_file: {}", link.link_refers_to_file()?);

    print_string_field("description", link.description());
    print_string_field("relative_path", link.relative_path());
    print_string_field("working_dir", link.working_dir());
    print_string_field("arguments", link.arguments());
    print_string_field("icon_location", link.icon_location());
    print_owned_string_field("local_path", link.local_path());
    print_string_field("network_path", link.network_path());
    print_string_field("volume_label", link.volume_label());

    let offsets = link.location_diagnostic_offsets()?;
    for note in offsets {
        eprintln!("location warning: {note}");
    }

    let n = link.data_block_count()?;
    println!("data_blocks: {n}");
    for i in 0..n {
        if let Some(sig) = link.data_block_signature(i)? {
            println!("  [{i}] signature: 0x{sig:08x}");
        }
    }

    link.close();
    Ok(())
}
