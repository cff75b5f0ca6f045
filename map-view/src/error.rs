use logger::LoggerError;

/// Everything that can go wrong before the map window is up and running.
///
/// Pointer handlers never fail; only startup returns these.
#[derive(Debug)]
pub enum MapError {
    Usage(String),
    Io(std::io::Error),
    Csv(csv::Error),
    DuplicateCode(String),
    EmptyLocations,
    Logger(LoggerError),
    Window(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Usage(msg) => write!(f, "Usage error: {}", msg),
            MapError::Io(e) => write!(f, "I/O Error: {}", e),
            MapError::Csv(e) => write!(f, "Invalid locations file: {}", e),
            MapError::DuplicateCode(code) => write!(f, "Duplicate location code: {}", code),
            MapError::EmptyLocations => write!(f, "The locations file has no records"),
            MapError::Logger(e) => write!(f, "Logger error: {}", e),
            MapError::Window(msg) => write!(f, "Window error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Csv(e) => Some(e),
            MapError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Io(err)
    }
}

impl From<csv::Error> for MapError {
    fn from(err: csv::Error) -> Self {
        MapError::Csv(err)
    }
}

impl From<LoggerError> for MapError {
    fn from(err: LoggerError) -> Self {
        MapError::Logger(err)
    }
}

impl From<eframe::Error> for MapError {
    fn from(err: eframe::Error) -> Self {
        MapError::Window(err.to_string())
    }
}
