//! Recognition of PostgreSQL constraint violations that carry domain meaning.

use salon_core::errors::SalonError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique(Option<String>),
    ForeignKey(Option<String>),
}

/// Classifies a database error as a constraint violation, if it is one.
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_err = err.as_database_error()?;
    let constraint = db_err.constraint().map(str::to_string);
    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => Some(ConstraintViolation::Unique(constraint)),
        Some(FOREIGN_KEY_VIOLATION) => Some(ConstraintViolation::ForeignKey(constraint)),
        _ => None,
    }
}

/// Same as [`constraint_violation`] for errors already wrapped in a report.
pub fn report_violation(report: &eyre::Report) -> Option<ConstraintViolation> {
    report
        .downcast_ref::<sqlx::Error>()
        .and_then(constraint_violation)
}

pub fn db_error(err: sqlx::Error) -> SalonError {
    SalonError::Database(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert_eq!(constraint_violation(&sqlx::Error::RowNotFound), None);
        assert_eq!(report_violation(&eyre::eyre!("plain failure")), None);
    }

    #[test]
    fn test_db_error_wraps_as_database() {
        assert!(matches!(db_error(sqlx::Error::PoolTimedOut), SalonError::Database(_)));
    }
}
