//! Shared photo storage kept in the same SQLite file as the sheet.

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::remote::MediaStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PUBLIC_GRANTEE: &str = "anyone";
const PUBLIC_ROLE: &str = "reader";

/// A stored object as returned by [`DriveStore::fetch_public`].
#[derive(Debug, Clone)]
pub struct MediaObject {
    pub id: String,
    pub name: String,
    pub folder_id: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

pub struct DriveStore {
    pool: DbPool,
    folder_id: String,
    link_template: String,
    staging_dir: PathBuf,
}

/// Removes the staged copy when dropped, on success and failure alike.
struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    fn write(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let staged = Self {
            path: dir.join(name),
        };
        fs::write(&staged.path, data)?;
        Ok(staged)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl DriveStore {
    pub fn open(
        path: &str,
        folder_id: &str,
        link_template: &str,
        staging_dir: impl Into<PathBuf>,
    ) -> AppResult<Self> {
        let pool = DbPool::open_existing(path)
            .map_err(|e| AppError::UploadFailed(format!("{path}: {e}")))?;

        Ok(Self {
            pool,
            folder_id: folder_id.to_string(),
            link_template: link_template.to_string(),
            staging_dir: staging_dir.into(),
        })
    }

    pub fn link_for(&self, id: &str) -> String {
        self.link_template.replace("{id}", id)
    }

    /// Extract the object id from a link built with the configured template.
    /// Anything that does not match the template is taken as a bare id.
    pub fn id_from_link<'a>(&self, link: &'a str) -> &'a str {
        let link = link.trim();
        if let Some((prefix, suffix)) = self.link_template.split_once("{id}")
            && let Some(rest) = link.strip_prefix(prefix)
            && let Some(id) = rest.strip_suffix(suffix)
        {
            return id;
        }
        link
    }

    /// Look up an object by link or id. Only publicly readable objects are returned.
    pub fn fetch_public(&self, link_or_id: &str) -> AppResult<Option<MediaObject>> {
        let id = self.id_from_link(link_or_id);

        let obj = self
            .pool
            .conn
            .query_row(
                "SELECT o.id, o.name, o.folder_id, o.mime_type, o.data
                 FROM media_objects o
                 JOIN media_permissions p ON p.object_id = o.id
                 WHERE o.id = ?1 AND p.grantee = ?2 AND p.role = ?3
                 LIMIT 1",
                params![id, PUBLIC_GRANTEE, PUBLIC_ROLE],
                |row| {
                    Ok(MediaObject {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        folder_id: row.get(2)?,
                        mime_type: row.get(3)?,
                        data: row.get(4)?,
                    })
                },
            )
            .optional()?;

        Ok(obj)
    }

    fn create_object(&self, name: &str, data: &[u8]) -> rusqlite::Result<String> {
        let id = Uuid::new_v4().simple().to_string();

        let tx = self.pool.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO media_objects (id, name, folder_id, mime_type, data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                name,
                self.folder_id,
                mime_for(name),
                data,
                Local::now().to_rfc3339()
            ],
        )?;
        tx.execute(
            "INSERT INTO media_permissions (object_id, grantee, role) VALUES (?1, ?2, ?3)",
            params![id, PUBLIC_GRANTEE, PUBLIC_ROLE],
        )?;
        tx.commit()?;

        Ok(id)
    }
}

impl MediaStore for DriveStore {
    fn upload_and_link(&self, data: &[u8], desired_filename: &str) -> AppResult<String> {
        let name = Path::new(desired_filename)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::UploadFailed(format!("invalid file name '{desired_filename}'"))
            })?;

        let staged = StagedFile::write(&self.staging_dir, &name, data)
            .map_err(|e| AppError::UploadFailed(format!("staging {name}: {e}")))?;

        let content = fs::read(&staged.path)
            .map_err(|e| AppError::UploadFailed(format!("reading {name}: {e}")))?;

        let id = self
            .create_object(&name, &content)
            .map_err(|e| AppError::UploadFailed(format!("storing {name}: {e}")))?;

        let link = self.link_for(&id);
        ttlog_soft(&self.pool.conn, "upload", &name, &link);
        Ok(link)
    }
}

fn mime_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_defaults_to_jpeg() {
        assert_eq!(mime_for("GGN_25_A1_QR.jpg"), "image/jpeg");
        assert_eq!(mime_for("scan.PNG"), "image/png");
        assert_eq!(mime_for("noext"), "image/jpeg");
    }

    #[test]
    fn staged_file_is_removed_on_drop() {
        let dir = std::env::temp_dir().join("treeqr_staged_unit");
        let path = {
            let staged = StagedFile::write(&dir, "x.jpg", b"abc").unwrap();
            assert!(staged.path.exists());
            staged.path.clone()
        };
        assert!(!path.exists());
    }
}
