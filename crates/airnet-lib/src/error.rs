use thiserror::Error;

/// Convenient result alias for the AirNet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of library errors.
///
/// Front ends use this to decide how to report a failure without matching on
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed airport id, location, or size class.
    Validation,
    /// An airport id was inserted twice.
    DuplicateKey,
    /// A referenced airport is not part of the network.
    NotFound,
    /// Both endpoints exist but no sequence of flights connects them.
    Unreachable,
    /// Underlying storage (SQLite or filesystem) failed.
    Storage,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Airport identifiers must be exactly three characters long.
    #[error("invalid airport id '{id}': expected exactly 3 characters")]
    InvalidAirportId { id: String },

    /// Raised when a location is not a pair of finite numbers.
    #[error("invalid location '{input}': {reason}")]
    InvalidLocation { input: String, reason: String },

    /// Raised when a size class letter or name is not recognised.
    #[error("invalid size class '{value}': expected L, M or S")]
    InvalidSizeClass { value: String },

    /// Raised when inserting an airport whose id is already present.
    #[error("airport {id} already exists")]
    DuplicateAirport { id: String },

    /// Raised when an airport id could not be found in the network.
    #[error("unknown airport: {id}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised instead of [`Error::RouteNotFound`] when the goal is unreachable
    /// and some flights were left out of the search because their cost was
    /// negative or not finite.
    #[error(
        "no route found between {start} and {goal}; {skipped} flight(s) were ignored \
         because their cost is not a finite, non-negative number"
    )]
    UnusableFlightCosts {
        start: String,
        goal: String,
        skipped: usize,
    },

    /// Raised when a route summary is requested for a route without airports.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when stored rows cannot be turned into a network.
    #[error("corrupt network store: {message}")]
    CorruptStore { message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the network database")]
    ProjectDirsUnavailable,

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAirportId { .. }
            | Error::InvalidLocation { .. }
            | Error::InvalidSizeClass { .. } => ErrorKind::Validation,
            Error::DuplicateAirport { .. } => ErrorKind::DuplicateKey,
            Error::UnknownAirport { .. } => ErrorKind::NotFound,
            Error::RouteNotFound { .. }
            | Error::UnusableFlightCosts { .. }
            | Error::EmptyRoute => ErrorKind::Unreachable,
            Error::CorruptStore { .. }
            | Error::ProjectDirsUnavailable
            | Error::Sqlite(_)
            | Error::Io(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn invalid_location(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidLocation {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
