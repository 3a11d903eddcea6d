use ecoleta_shared::models::Point;
use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
};
use std::path::Path;
use std::sync::Arc;

const POINTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("points");

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),
    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),
    #[error("table error: {0}")]
    Table(#[from] redb::TableError),
    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),
    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),
    #[error("corrupt record: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct Storage {
    db: Database,
}

impl Storage {
    pub fn open(path: &Path) -> Result<Arc<Self>, StorageError> {
        let db = Database::create(path)?;

        // Ensure table exists
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(POINTS_TABLE)?;
        }
        write_txn.commit()?;

        tracing::info!(path = %path.display(), "Opened point database");
        Ok(Arc::new(Storage { db }))
    }

    pub fn save_point(&self, point: &Point) -> Result<(), StorageError> {
        let json = serde_json::to_vec(point)?;
        let id_str = point.id.to_string();

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(POINTS_TABLE)?;
            table.insert(id_str.as_str(), json.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_point(&self, id: &str) -> Result<Option<Point>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(POINTS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All stored points, oldest first.
    pub fn list_points(&self) -> Result<Vec<Point>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(POINTS_TABLE)?;

        let mut points = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            points.push(serde_json::from_slice::<Point>(value.value())?);
        }
        points.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(points)
    }

    pub fn count_points(&self) -> Result<u64, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(POINTS_TABLE)?;
        Ok(table.len()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoleta_shared::models::CreatePointRequest;
    use uuid::Uuid;

    fn sample_point(city: &str, created_at: &str) -> Point {
        Point::from_request(
            Uuid::new_v4(),
            CreatePointRequest {
                name: "Ecoponto".to_string(),
                email: "eco@example.com".to_string(),
                whatsapp: "11999990000".to_string(),
                uf: "SP".to_string(),
                city: city.to_string(),
                latitude: -23.55,
                longitude: -46.63,
                items: vec![1, 2],
            },
            created_at.to_string(),
        )
    }

    fn temp_storage() -> (tempfile::TempDir, Arc<Storage>) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("points.redb")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_save_and_get_point() {
        let (_dir, storage) = temp_storage();
        let point = sample_point("Santos", "2026-01-01T00:00:00Z");
        storage.save_point(&point).unwrap();

        let loaded = storage.get_point(&point.id.to_string()).unwrap().unwrap();
        assert_eq!(loaded, point);
    }

    #[test]
    fn test_get_missing_point() {
        let (_dir, storage) = temp_storage();
        assert!(storage.get_point(&Uuid::new_v4().to_string()).unwrap().is_none());
    }

    #[test]
    fn test_list_points_oldest_first() {
        let (_dir, storage) = temp_storage();
        let newer = sample_point("Campinas", "2026-02-01T00:00:00Z");
        let older = sample_point("Santos", "2026-01-01T00:00:00Z");
        storage.save_point(&newer).unwrap();
        storage.save_point(&older).unwrap();

        let points = storage.list_points().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].city, "Santos");
        assert_eq!(points[1].city, "Campinas");
        assert_eq!(storage.count_points().unwrap(), 2);
    }

    #[test]
    fn test_points_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.redb");
        let point = sample_point("Santos", "2026-01-01T00:00:00Z");
        {
            let storage = Storage::open(&path).unwrap();
            storage.save_point(&point).unwrap();
        }
        let storage = Storage::open(&path).unwrap();
        assert_eq!(storage.count_points().unwrap(), 1);
    }
}
