//! Filesystem storage for the gear catalog.
//!
//! JSONL files under the data directory are the source of truth:
//! - `catalog/gear_items.jsonl`
//! - `catalog/categories.jsonl`
//! - `catalog/pack_lists.jsonl`
//! - `catalog/goals.jsonl` (goal history; last record wins)

use std::path::PathBuf;
use thiserror::Error;

use crate::models::WeightGoal;

mod jsonl;

pub use jsonl::{EntityType, JsonlReader, JsonlWriter};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.data_dir.join("catalog")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read the current weight goal, if any was ever recorded.
///
/// goals.jsonl is append-only history; the most recent record wins.
pub fn read_weight_goal(config: &StorageConfig) -> Result<Option<WeightGoal>, StorageError> {
    let reader = JsonlReader::<WeightGoal>::for_entity(config, EntityType::Goal);
    let mut goals = reader.read_all()?;
    Ok(goals.pop())
}

/// Append a new weight goal record.
pub fn write_weight_goal(config: &StorageConfig, goal: &WeightGoal) -> Result<(), StorageError> {
    let writer = JsonlWriter::<WeightGoal>::for_entity(config, EntityType::Goal);
    writer.append(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));
        assert_eq!(config.catalog_dir(), PathBuf::from("/data/catalog"));
    }

    #[test]
    fn test_goal_read_missing_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());
        assert!(read_weight_goal(&config).unwrap().is_none());
    }

    #[test]
    fn test_goal_last_record_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        write_weight_goal(&config, &WeightGoal::new(Some(6000.0), None)).unwrap();
        write_weight_goal(&config, &WeightGoal::new(Some(4500.0), Some(9000.0))).unwrap();

        let goal = read_weight_goal(&config).unwrap().unwrap();
        assert_eq!(goal.base_weight_goal, Some(4500.0));
        assert_eq!(goal.total_weight_goal, Some(9000.0));
    }
}
