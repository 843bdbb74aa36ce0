//! Conversions from storage-layer errors into domain errors.

use rusqlite::Error as SqlError;
use tabtally_domain::TabTallyError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TabTallyError);

impl From<InfraError> for TabTallyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TabTallyError> for InfraError {
    fn from(value: TabTallyError) -> Self {
        InfraError(value)
    }
}

impl From<SqlError> for InfraError {
    fn from(err: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let domain_err = match err {
            SqlError::SqliteFailure(code, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match code.code {
                    ErrorCode::DatabaseBusy => TabTallyError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        TabTallyError::Database("database is locked".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        TabTallyError::Database(format!("constraint violation: {message}"))
                    }
                    _ => TabTallyError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        code.code, code.extended_code, message
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                TabTallyError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                TabTallyError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                TabTallyError::Database(format!("invalid column type: {ty}"))
            }
            other => TabTallyError::Database(other.to_string()),
        };

        InfraError(domain_err)
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(err: r2d2::Error) -> Self {
        InfraError(TabTallyError::Database(format!("connection pool error: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_maps_to_not_found() {
        let infra: InfraError = SqlError::QueryReturnedNoRows.into();
        let domain: TabTallyError = infra.into();
        assert!(matches!(domain, TabTallyError::NotFound(_)));
    }

    #[test]
    fn conversion_failures_map_to_database() {
        let err = SqlError::InvalidColumnType(0, "domain".into(), rusqlite::types::Type::Blob);
        let infra: InfraError = err.into();
        assert!(matches!(TabTallyError::from(infra), TabTallyError::Database(_)));
    }
}
