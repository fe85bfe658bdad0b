use std::{error::Error, fmt, time::Duration};

pub mod config;
pub mod lookup;
pub mod orchestrator;

#[derive(Debug)]
pub enum LookupError {
    NotFound,
    Timeout(Duration),
    Other(Box<dyn Error + Send + Sync>),
}

impl LookupError {
    pub fn other<T: Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Other(why) => Some(why.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Timeout(limit) => write!(f, "no response within {:?}", limit),
            Self::Other(why) => write!(f, "{}", why),
        }
    }
}

pub type LookupResult<O> = Result<O, LookupError>;

#[derive(Debug)]
pub enum ComparisonError {
    /// Origin or destination is blank.
    MissingEndpoint,
    /// The route options lookup failed, without routes there is nothing to
    /// compare.
    Routes(LookupError),
}

impl Error for ComparisonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingEndpoint => None,
            Self::Routes(why) => Some(why),
        }
    }
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingEndpoint => write!(f, "origin and destination are required"),
            Self::Routes(why) => write!(f, "route options lookup failed: {}", why),
        }
    }
}

impl From<LookupError> for ComparisonError {
    fn from(value: LookupError) -> Self {
        Self::Routes(value)
    }
}
