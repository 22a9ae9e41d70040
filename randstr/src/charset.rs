use crate::error::{Error, Result};
use clap::ValueEnum;
use std::fmt::{Display, Formatter};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Charset {
    /// a-z, A-Z, 0-9
    #[default]
    Alphanumeric,
    /// a-z, A-Z, 0-9, and common symbols
    #[value(name = "alphanumeric_symbols")]
    AlphanumericSymbols,
    /// 0-9
    Digits,
    /// a-z, A-Z
    Letters,
    /// common symbols
    Symbols,
    /// use --custom_chars to specify characters
    Custom,
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Charset::Alphanumeric => "alphanumeric",
                Charset::AlphanumericSymbols => "alphanumeric_symbols",
                Charset::Digits => "digits",
                Charset::Letters => "letters",
                Charset::Symbols => "symbols",
                Charset::Custom => "custom",
            }
        )
    }
}

/// A non-empty pool of characters to draw from. Duplicates are kept,
/// they just weight the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(Error::precondition("character set cannot be empty"));
        }
        Ok(Alphabet(chars.chars().collect()))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false once built; here for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().collect::<String>())
    }
}

impl Charset {
    /// `custom` is only consulted for `Charset::Custom` and is used verbatim.
    pub fn alphabet(self, custom: Option<&str>) -> Result<Alphabet> {
        match self {
            Charset::Alphanumeric => Alphabet::new(&[LETTERS, DIGITS].concat()),
            Charset::AlphanumericSymbols => Alphabet::new(&[LETTERS, DIGITS, PUNCTUATION].concat()),
            Charset::Digits => Alphabet::new(DIGITS),
            Charset::Letters => Alphabet::new(LETTERS),
            Charset::Symbols => Alphabet::new(PUNCTUATION),
            Charset::Custom => {
                let chars = custom.ok_or_else(|| {
                    Error::usage("when --charset is 'custom', you must specify --custom_chars")
                })?;
                Alphabet::new(chars)
            }
        }
    }
}
