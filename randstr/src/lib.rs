use clap::Parser;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub mod charset;
pub mod error;
pub mod generate;
pub mod output;

pub use charset::{Alphabet, Charset};
pub use error::{Error, Result};
pub use generate::{generate, generate_with};
pub use output::{dispatch, Clipboard, SystemClipboard};

/// generates cryptographically secure random strings.
#[derive(Parser, Debug)]
#[command(name = "randstr", version)]
pub struct Args {
    /// length of the random string
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// character set to use
    #[arg(short, long, value_enum, default_value_t = Charset::Alphanumeric)]
    charset: Charset,

    /// custom character set to use when --charset is 'custom'
    #[arg(
        long = "custom_chars",
        required_if_eq("charset", "custom"),
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    custom_chars: Option<String>,

    /// copy the result to the clipboard
    #[arg(long)]
    copy: bool,

    /// path to a template file; the string is available
    /// as {{ random_string }}
    #[arg(long)]
    template: Option<PathBuf>,

    /// print the SHA256 hash of the string instead
    /// of the string itself
    #[arg(long = "hash_password")]
    hash_password: bool,

    /// silent mode
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// debug
    #[arg(long)]
    pub debug: bool,
}

/// Everything one run needs, checked once and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub charset: Charset,
    pub custom_chars: Option<String>,
    pub copy: bool,
    pub template: Option<PathBuf>,
    pub hash_password: bool,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.charset == Charset::Custom && args.custom_chars.as_deref().map_or(true, str::is_empty) {
            return Err(Error::usage("when --charset is 'custom', you must specify --custom_chars"));
        }
        Ok(Config {
            length: args.length,
            charset: args.charset,
            custom_chars: args.custom_chars,
            copy: args.copy,
            template: args.template,
            hash_password: args.hash_password,
        })
    }
}

impl Config {
    pub fn alphabet(&self) -> Result<Alphabet> {
        self.charset.alphabet(self.custom_chars.as_deref())
    }
}

/// Resolve the alphabet, generate, and dispatch. Nothing reaches `out`
/// unless every step before printing succeeded.
pub fn run(config: &Config, out: &mut impl Write, clipboard: &mut dyn Clipboard) -> Result<()> {
    let alphabet = config.alphabet()?;
    debug!("charset {} ({} chars), length {}", config.charset, alphabet.len(), config.length);
    let secret = generate(config.length, &alphabet)?;
    dispatch(config, &secret, out, clipboard)?;
    Ok(())
}
