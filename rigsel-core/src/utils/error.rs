/// An error type for all solver failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// An invalid configuration parameter with details about the violation.
    InvalidConfig(String),
    /// A population which cannot be sampled: it has no genes or its total fitness is zero,
    /// so no proportional share can be assigned to any gene.
    DegeneratePopulation,
}

/// A type alias for result type with `SolverError`.
pub type SolverResult<T> = Result<T, SolverError>;

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidConfig(details) => write!(f, "invalid configuration: {details}"),
            SolverError::DegeneratePopulation => {
                write!(f, "population is degenerate: no gene can get a proportional share")
            }
        }
    }
}

impl std::error::Error for SolverError {}
