use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users.email";
const CNT_PHOTO_FILENAME: &str = "photos.filename";

/// SQLite reports constraint violations through the error message, not a
/// structured constraint name, so match on the offending column path.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if message.contains("UNIQUE constraint failed") {
                if message.contains(CNT_USER_EMAIL) {
                    return DomainError::Conflict("email address already registered".into());
                }
                if message.contains(CNT_PHOTO_FILENAME) {
                    return DomainError::Conflict("stored filename already in use".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }

            if message.contains("FOREIGN KEY constraint failed") {
                return DomainError::NotFound("referenced record not found".into());
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
