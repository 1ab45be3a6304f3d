//! Conversions between `SQLite` rows and domain types.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use pawhub_core::{
    Address, BlockchainRecord, ChatHistory, RecordType, RepositoryError, UserProfile,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for blockchain record queries.
pub const BLOCKCHAIN_RECORD_COLUMNS: &str =
    "id, order_id, record_type, data_to_verify, data_hash, created_at";

/// Shared SELECT column list for chat history queries.
pub const CHAT_HISTORY_COLUMNS: &str = "id, user_id, prompt, reply, created_at";

/// Shared SELECT column list for profile queries.
pub const USER_PROFILE_COLUMNS: &str = "id, user_id, display_name, created_at";

/// Shared SELECT column list for address queries, qualified with the `a` alias.
pub const ADDRESS_COLUMNS: &str = "a.id AS id, a.user_profile_id AS user_profile_id, a.line1 AS line1, a.line2 AS line2, a.city AS city, a.postal_code AS postal_code, a.country AS country, a.created_at AS created_at";

/// Storage format for timestamps. Fixed width, so text order equals time order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format a timestamp for storage.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Truncate a timestamp to the precision kept in storage.
pub fn stored_precision(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(6)
}

/// Parse a stored timestamp. A trailing " UTC" is tolerated.
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = datetime_str.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

/// Map a sqlx error to a repository error, naming the entity involved.
pub fn map_sqlx_error(err: sqlx::Error, entity: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(entity.to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepositoryError::Constraint(format!("{entity}: {db}"))
        }
        sqlx::Error::Database(db) if db.is_check_violation() => {
            RepositoryError::Constraint(format!("{entity}: {db}"))
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = row.try_get(column).map_err(storage)?;
    parse_datetime(&raw)
        .ok_or_else(|| RepositoryError::Serialization(format!("invalid {column}: {raw}")))
}

/// Parse a database row into a `BlockchainRecord`.
pub fn row_to_blockchain_record(row: &SqliteRow) -> Result<BlockchainRecord, RepositoryError> {
    let record_type_str: String = row.try_get("record_type").map_err(storage)?;
    let record_type = RecordType::parse(&record_type_str).ok_or_else(|| {
        RepositoryError::Serialization(format!("unknown record_type: {record_type_str}"))
    })?;

    Ok(BlockchainRecord {
        id: row.try_get("id").map_err(storage)?,
        order_id: row.try_get("order_id").map_err(storage)?,
        record_type,
        data_to_verify: row.try_get("data_to_verify").map_err(storage)?,
        data_hash: row.try_get("data_hash").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
    })
}

/// Parse a database row into a `ChatHistory`.
pub fn row_to_chat_history(row: &SqliteRow) -> Result<ChatHistory, RepositoryError> {
    Ok(ChatHistory {
        id: row.try_get("id").map_err(storage)?,
        user_id: row.try_get("user_id").map_err(storage)?,
        prompt: row.try_get("prompt").map_err(storage)?,
        reply: row.try_get("reply").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
    })
}

/// Parse a database row into a `UserProfile`.
pub fn row_to_user_profile(row: &SqliteRow) -> Result<UserProfile, RepositoryError> {
    Ok(UserProfile {
        id: row.try_get("id").map_err(storage)?,
        user_id: row.try_get("user_id").map_err(storage)?,
        display_name: row.try_get("display_name").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
    })
}

/// Parse a database row into an `Address`.
pub fn row_to_address(row: &SqliteRow) -> Result<Address, RepositoryError> {
    Ok(Address {
        id: row.try_get("id").map_err(storage)?,
        user_profile_id: row.try_get("user_profile_id").map_err(storage)?,
        line1: row.try_get("line1").map_err(storage)?,
        line2: row.try_get("line2").map_err(storage)?,
        city: row.try_get("city").map_err(storage)?,
        postal_code: row.try_get("postal_code").map_err(storage)?,
        country: row.try_get("country").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
    })
}
