use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompoundingError>;

/// Failures of the compounding pipeline.
///
/// Every variant is fatal to the operation that raised it: builders never
/// substitute a default for a missing fixing and never return partial series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompoundingError {
    #[error("date {date} is outside of [{from}, {until}]")]
    DateOutOfRange {
        date: NaiveDate,
        from: NaiveDate,
        until: NaiveDate,
    },

    #[error("no reset published for {0}")]
    MissingReset(NaiveDate),

    #[error("no start date found for maturity {maturity} around {candidate}")]
    ResolverExhausted {
        maturity: NaiveDate,
        candidate: NaiveDate,
    },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid date range: {from} is after {until}")]
    InvalidDateRange {
        from: NaiveDate,
        until: NaiveDate,
    },
}
