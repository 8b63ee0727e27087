use crate::mt::MtError;
use std::path::PathBuf;

/// Errors raised by the resource and pipeline layers
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed
    Io { path: PathBuf, source: std::io::Error },
    /// The resource file is not well-formed XML
    Xml(String),
    /// The configuration file could not be read or parsed
    Config(String),
    /// The baseline resource file does not exist
    MissingInput(PathBuf),
    /// No target language was requested
    NoTargetLanguages,
    /// A translation provider could not be set up
    Translator(MtError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Xml(msg) => write!(f, "XML error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::MissingInput(path) => {
                write!(f, "Source resource file not found: {}", path.display())
            }
            Error::NoTargetLanguages => write!(f, "No target language codes were given"),
            Error::Translator(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Translator(err) => Some(err),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<MtError> for Error {
    fn from(err: MtError) -> Self {
        Error::Translator(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_path() {
        let err = Error::MissingInput(PathBuf::from("app/src/main/res/values/strings.xml"));
        assert!(err.to_string().contains("app/src/main/res/values/strings.xml"));

        let err = Error::io(
            "out/strings.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "out/strings.xml: denied");
    }
}
