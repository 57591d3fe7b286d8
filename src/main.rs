//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use hufzip::compression::compress::compress;
use hufzip::compression::decompress::decompress;
use hufzip::tools::cli::{hufopts_init, Mode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> hufzip::Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace; the -v flag
    // lowers the max level from here.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap_or_default();

    let options = hufopts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode() {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    info!("Done.\n");
    result
}
