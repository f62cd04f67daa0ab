//! Conversions from external infrastructure errors into domain errors.

use rusqlite::Error as SqlError;
use straycare_domain::StrayCareError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub StrayCareError);

impl From<InfraError> for StrayCareError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<StrayCareError> for InfraError {
    fn from(value: StrayCareError) -> Self {
        InfraError(value)
    }
}

trait IntoStrayCareError {
    fn into_straycare(self) -> StrayCareError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → StrayCareError */
/* -------------------------------------------------------------------------- */

impl IntoStrayCareError for SqlError {
    fn into_straycare(self) -> StrayCareError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        StrayCareError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        StrayCareError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        StrayCareError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        StrayCareError::Database(format!("unable to open database file: {message}"))
                    }
                    _ => StrayCareError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                StrayCareError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                StrayCareError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::IntegralValueOutOfRange(column, value) => StrayCareError::Database(format!(
                "integer value {value} out of range in column {column}"
            )),
            RE::InvalidColumnType(_, name, ty) => {
                StrayCareError::Database(format!("invalid column type for {name}: {ty}"))
            }
            RE::Utf8Error(_) => {
                StrayCareError::Database("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => StrayCareError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => StrayCareError::Database("invalid SQL query".into()),
            other => StrayCareError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_straycare())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → StrayCareError */
/* -------------------------------------------------------------------------- */

impl IntoStrayCareError for r2d2::Error {
    fn into_straycare(self) -> StrayCareError {
        StrayCareError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_straycare())
    }
}

/* -------------------------------------------------------------------------- */
/* helpers for map_err */
/* -------------------------------------------------------------------------- */

pub(crate) fn map_sql_error(err: SqlError) -> StrayCareError {
    StrayCareError::from(InfraError::from(err))
}

pub(crate) fn map_pool_error(err: r2d2::Error) -> StrayCareError {
    StrayCareError::from(InfraError::from(err))
}

pub(crate) fn map_join_error(err: JoinError) -> StrayCareError {
    StrayCareError::Internal(format!("Task join error: {err}"))
}
