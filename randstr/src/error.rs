use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// arguments that made it past clap but still can't be used
    #[error("usage error: {0}")]
    Usage(String),

    /// bad length or empty alphabet, raised before any output
    #[error("invalid input: {0}")]
    Precondition(String),

    /// template missing, unparsable, or failed to render
    #[error("template error ({}): {message}", path.display())]
    Template { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// tera keeps the useful part (file name, line, column) in the source
    /// chain, so flatten it into one line.
    pub fn template(path: impl Into<PathBuf>, err: &tera::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        // parse errors come with a multi-line caret diagram
        let message = message.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::Template {
            path: path.into(),
            message,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => 1,
            Error::Usage(_) => 2,
            Error::Precondition(_) => 3,
            Error::Template { .. } => 4,
        }
    }
}
