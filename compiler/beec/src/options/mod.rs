//! Command-line options.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    /// Print every frame's definitions after the tree.
    pub frames: bool,
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("help requested")]
    Help,
    #[error("missing source file")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl Options {
    /// Parse the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut path = None;
        let mut frames = false;
        let mut quiet = false;

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "-h" | "--help" => return Err(OptionsError::Help),
                "--frames" => frames = true,
                "-q" | "--quiet" => quiet = true,
                _ if arg.starts_with('-') => return Err(OptionsError::UnknownOption(arg)),
                _ if path.is_some() => return Err(OptionsError::Unexpected(arg)),
                _ => path = Some(PathBuf::from(arg)),
            }
        }

        let path = path.ok_or(OptionsError::MissingPath)?;
        Ok(Options {
            path,
            frames,
            quiet,
        })
    }
}
