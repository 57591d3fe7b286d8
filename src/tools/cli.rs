use std::fmt::{Display, Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor.",
    long_about = "
    Compresses files with a canonical byte-oriented Huffman code. The coding
    tree is stored inside the compressed file, so decompression needs nothing
    but the file itself.

    It is done in the spirit of learning, both learning Rust and learning
    compression techniques."
)]
pub struct HufOpts {
    /// Filenames of files to process
    #[clap()]
    pub files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    pub force_overwrite: bool,

    /// Rebalance which symbol sits on which leaf after building the tree
    #[clap(short = 'i', long = "improve")]
    pub improve: bool,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl HufOpts {
    /// Compression unless decompression was asked for.
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.v {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse the command line and set the log level from the verbosity flag.
pub fn hufopts_init() -> HufOpts {
    let opts = HufOpts::parse();
    log::set_max_level(opts.log_level());

    info!("Operational mode set to {}", opts.op_mode());
    info!("Processing {} file(s)", opts.files.len());
    if opts.improve {
        info!("Leaf improvement pass enabled");
    }
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_mode_test() {
        let opts = HufOpts::try_parse_from(["hufzip", "a.txt"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Zip);
        assert_eq!(opts.files, vec!["a.txt".to_string()]);
        assert!(!opts.force_overwrite);
        assert!(!opts.improve);
    }

    #[test]
    fn decompress_flag_test() {
        let opts = HufOpts::try_parse_from(["hufzip", "-d", "a.huf"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Unzip);
    }

    #[test]
    fn verbosity_test() {
        let opts = HufOpts::try_parse_from(["hufzip", "-v5", "a.txt"]).unwrap();
        assert_eq!(opts.log_level(), LevelFilter::Trace);
        let opts = HufOpts::try_parse_from(["hufzip", "-v0", "a.txt"]).unwrap();
        assert_eq!(opts.log_level(), LevelFilter::Off);
    }
}
