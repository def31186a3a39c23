use crate::Level;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Vau(vau::Error),
    /// a rule of the level uses its wildcards inconsistently
    InvalidRule(Level, String),
    /// levels whose goal was not reached
    Unsolved(Vec<Level>),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl From<vau::Error> for Error {
    fn from(err: vau::Error) -> Self {
        Self::Vau(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
