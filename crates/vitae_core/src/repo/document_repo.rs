//! Document store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the one resume document as JSON under a fixed key.
//! - Shield callers from corrupt or foreign persisted payloads.
//!
//! # Invariants
//! - `load` returns either a structurally valid document or `None`; a
//!   payload that fails to decode degrades to `None` with a warning, it
//!   never propagates as an error.
//! - The serialized field names are the storage compatibility surface and
//!   must stay readable by older payloads.

use crate::db::DbError;
use crate::model::document::Document;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the resume document is stored under.
pub const DOCUMENT_KEY: &str = "resume";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for document persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the single-document store.
pub trait DocumentRepository {
    /// Serializes and upserts the full document under [`DOCUMENT_KEY`].
    fn save(&self, document: &Document) -> RepoResult<()>;
    /// Loads the stored document, or `None` when the key was never
    /// written or the stored payload cannot be decoded.
    fn load(&self) -> RepoResult<Option<Document>>;
}

/// SQLite-backed document repository.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn save(&self, document: &Document) -> RepoResult<()> {
        let body = serde_json::to_string(document).map_err(RepoError::Encode)?;
        self.conn.execute(
            "INSERT INTO documents (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![DOCUMENT_KEY, body],
        )?;
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<Document>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE key = ?1;",
                [DOCUMENT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            return Ok(None);
        };

        match serde_json::from_str::<Document>(&body) {
            Ok(document) => Ok(Some(document)),
            Err(err) => {
                // Corrupt or foreign payload; treat as first run rather
                // than surfacing a decode fault to the editor.
                warn!("event=document_load module=repo status=decode_failed error={err}");
                Ok(None)
            }
        }
    }
}
