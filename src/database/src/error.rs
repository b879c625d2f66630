use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Parse {
        file: String,
        line: usize,
        message: String,
    },
    Capacity(String),
    Config(String),
}

impl DatabaseError {
    pub fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
        DatabaseError::Parse {
            file: String::from(file),
            line,
            message: message.into(),
        }
    }
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::Io(err) => write!(f, "i/o error: {}", err),
            DatabaseError::Parse {
                file,
                line,
                message,
            } => write!(f, "parse error in {} line {}: {}", file, line, message),
            DatabaseError::Capacity(message) => write!(f, "capacity exceeded: {}", message),
            DatabaseError::Config(message) => write!(f, "configuration error: {}", message),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Io(err)
    }
}
