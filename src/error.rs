use std::fmt;

macro_rules! define_errors {
    (
        $(wrap $variant:ident($ty:ty) => $label:expr),*;
        $(msg $msg_variant:ident => $msg_label:expr),*
        $(;)?
    ) => {
        #[derive(Debug)]
        pub enum LobbyistsError {
            $($variant($ty),)*
            $($msg_variant(String),)*
        }

        impl fmt::Display for LobbyistsError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(LobbyistsError::$variant(err) => write!(f, "{}: {}", $label, err),)*
                    $(LobbyistsError::$msg_variant(msg) => write!(f, "{}: {}", $msg_label, msg),)*
                }
            }
        }

        $(impl From<$ty> for LobbyistsError {
            fn from(err: $ty) -> Self {
                LobbyistsError::$variant(err)
            }
        })*
    };
}

define_errors! {
    wrap Io(std::io::Error)        => "Io error",
    wrap Toml(toml::de::Error)     => "Toml error",
    wrap Rusqlite(rusqlite::Error) => "Rusqlite error";
    msg Config => "Config error",
    msg Db     => "DB error"
}

impl std::error::Error for LobbyistsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LobbyistsError::Io(err) => Some(err),
            LobbyistsError::Toml(err) => Some(err),
            LobbyistsError::Rusqlite(err) => Some(err),
            LobbyistsError::Config(_) | LobbyistsError::Db(_) => None,
        }
    }
}

impl LobbyistsError {
    /// The underlying I/O error kind, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LobbyistsError::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}

pub type LobbyistsResult<T> = std::result::Result<T, LobbyistsError>;
