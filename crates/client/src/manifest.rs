//! Manifest subsystem
//!
//! The remote publishes its static content catalogue as a zipped SQLite
//! database. Acquisition is three independently retryable steps: discover
//! the locale path from the manifest index, download the archive in bytes
//! mode against the bare-domain root, and extract it on a blocking task.
//! The extracted snapshot is read-only; it is never mutated after
//! extraction.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use serde_json::Value;
use tracing::{debug, info};

use tricorn_domain::{TricornError, TricornResult};

use crate::rest::RestClient;

/// Default cache directory for the extracted database.
pub const DEFAULT_CACHE_DIR: &str = "./.cache";
/// File name of the extracted snapshot.
const DATABASE_NAME: &str = "destiny.sqlite3";
/// File name of the transient downloaded archive.
const ARCHIVE_NAME: &str = "file.zip";
/// Default manifest locale.
pub const DEFAULT_LOCALE: &str = "en";

/// A read-only handle over an extracted manifest snapshot.
///
/// The connection opens lazily on first query and is serialized behind a
/// mutex; clones of the path can be opened independently since the file
/// is never written after extraction.
pub struct Manifest {
    path: PathBuf,
    connection: parking_lot::Mutex<Option<Connection>>,
}

impl std::fmt::Debug for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manifest").field("path", &self.path).finish_non_exhaustive()
    }
}

fn column_to_json(row: &rusqlite::Row<'_>, index: usize) -> Value {
    use rusqlite::types::ValueRef;

    match row.get_ref(index) {
        Ok(ValueRef::Null) | Err(_) => Value::Null,
        Ok(ValueRef::Integer(n)) => Value::from(n),
        Ok(ValueRef::Real(f)) => Value::from(f),
        // Definition tables store a JSON document per row.
        Ok(ValueRef::Text(text)) => match serde_json::from_slice(text) {
            Ok(parsed) => parsed,
            Err(_) => Value::String(String::from_utf8_lossy(text).into_owned()),
        },
        Ok(ValueRef::Blob(blob)) => Value::String(String::from_utf8_lossy(blob).into_owned()),
    }
}

impl Manifest {
    /// Open a handle over an already-extracted snapshot.
    pub fn open(path: impl Into<PathBuf>) -> TricornResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(TricornError::Manifest(format!(
                "no manifest database at {}",
                path.display()
            )));
        }
        Ok(Self { path, connection: parking_lot::Mutex::new(None) })
    }

    /// The snapshot's location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a query against the snapshot and collect every row, with each
    /// column decoded to JSON (definition tables store one JSON document
    /// per row).
    pub fn execute(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> TricornResult<Vec<Vec<Value>>> {
        let mut guard = self.connection.lock();
        let connection = match &mut *guard {
            Some(connection) => connection,
            slot @ None => {
                let connection = Connection::open_with_flags(
                    &self.path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| TricornError::Manifest(format!("cannot open snapshot: {e}")))?;
                slot.insert(connection)
            }
        };

        let mut statement = connection
            .prepare(sql)
            .map_err(|e| TricornError::Manifest(format!("cannot prepare query: {e}")))?;
        let columns = statement.column_count();

        let mut rows = statement
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| TricornError::Manifest(format!("query failed: {e}")))?;

        let mut collected = Vec::new();
        while let Some(row) =
            rows.next().map_err(|e| TricornError::Manifest(format!("row read failed: {e}")))?
        {
            collected.push((0..columns).map(|index| column_to_json(row, index)).collect());
        }
        Ok(collected)
    }
}

fn extract_archive(archive_path: PathBuf, database_path: PathBuf) -> TricornResult<()> {
    let file = fs::File::open(&archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| TricornError::Manifest(format!("cannot read archive: {e}")))?;
    if archive.is_empty() {
        return Err(TricornError::Manifest("archive contains no entries".into()));
    }

    // The remote ships exactly one database file per archive.
    let mut entry = archive
        .by_index(0)
        .map_err(|e| TricornError::Manifest(format!("cannot read archive entry: {e}")))?;
    let staging = database_path.with_extension("partial");
    let mut output = fs::File::create(&staging)?;
    std::io::copy(&mut entry, &mut output)?;
    drop(output);

    fs::rename(&staging, &database_path)?;
    fs::remove_file(&archive_path)?;
    Ok(())
}

impl RestClient {
    /// Read the locale's database path from the manifest index.
    pub async fn fetch_manifest_path(&self, locale: &str) -> TricornResult<String> {
        let index = self.fetch_manifest_index().await?;
        index
            .get("mobileWorldContentPaths")
            .and_then(|paths| paths.get(locale))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                TricornError::Manifest(format!("manifest index carries no `{locale}` content path"))
            })
    }

    /// Download and extract the manifest snapshot into `cache_dir`.
    ///
    /// Idempotent: if the snapshot already exists and `force` is false,
    /// no network fetch is performed. `force` removes the snapshot and
    /// any cached archive first. Concurrent extraction into one
    /// directory is not supported.
    pub async fn download_manifest_to(
        &self,
        cache_dir: impl AsRef<Path>,
        locale: &str,
        force: bool,
    ) -> TricornResult<Manifest> {
        let cache_dir = cache_dir.as_ref();
        let database_path = cache_dir.join(DATABASE_NAME);
        let archive_path = cache_dir.join(ARCHIVE_NAME);

        if force {
            for stale in [&database_path, &archive_path] {
                if stale.exists() {
                    fs::remove_file(stale)?;
                }
            }
        } else if database_path.exists() {
            debug!(path = %database_path.display(), "manifest snapshot already present");
            return Manifest::open(database_path);
        }

        fs::create_dir_all(cache_dir)?;

        let content_path = self.fetch_manifest_path(locale).await?;
        info!(%content_path, "downloading manifest archive");
        let bytes = self.request_bytes(&content_path).await?;
        fs::write(&archive_path, &bytes)?;

        let extracted = database_path.clone();
        tokio::task::spawn_blocking(move || extract_archive(archive_path, extracted))
            .await
            .map_err(|e| TricornError::Manifest(format!("extraction task failed: {e}")))??;

        Manifest::open(database_path)
    }

    /// [`RestClient::download_manifest_to`] with the default cache
    /// directory and locale.
    pub async fn download_manifest(&self, force: bool) -> TricornResult<Manifest> {
        self.download_manifest_to(DEFAULT_CACHE_DIR, DEFAULT_LOCALE, force).await
    }
}
