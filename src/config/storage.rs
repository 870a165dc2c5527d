//! Member details storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::storage::{FlatFileSnapshotStore, DEFAULT_SEPARATOR_WIDTH};

const MAX_SEPARATOR_WIDTH: usize = 1000;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Report file written by "save" and read by "load"
    #[serde(default = "default_member_details_path")]
    pub member_details_path: PathBuf,

    /// Where the previous report is copied before each save
    #[serde(default = "default_backup_path")]
    pub backup_path: PathBuf,

    /// Length of the dashed separator lines
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

impl StorageConfig {
    /// Builds the flat-file store described by this configuration.
    pub fn snapshot_store(&self) -> FlatFileSnapshotStore {
        FlatFileSnapshotStore::new(&self.member_details_path, &self.backup_path)
            .with_separator_width(self.separator_width)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.member_details_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.member_details_path"));
        }
        if self.backup_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.backup_path"));
        }
        if self.backup_path == self.member_details_path {
            return Err(ValidationError::BackupPathCollides);
        }
        if self.separator_width == 0 || self.separator_width > MAX_SEPARATOR_WIDTH {
            return Err(ValidationError::InvalidSeparatorWidth {
                max: MAX_SEPARATOR_WIDTH,
            });
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            member_details_path: default_member_details_path(),
            backup_path: default_backup_path(),
            separator_width: default_separator_width(),
        }
    }
}

fn default_member_details_path() -> PathBuf {
    PathBuf::from("MemberDetails.txt")
}

fn default_backup_path() -> PathBuf {
    PathBuf::from("MemberDetails.bak")
}

fn default_separator_width() -> usize {
    DEFAULT_SEPARATOR_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.member_details_path, PathBuf::from("MemberDetails.txt"));
        assert_eq!(config.separator_width, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backup_must_not_overwrite_report() {
        let config = StorageConfig {
            backup_path: PathBuf::from("MemberDetails.txt"),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::BackupPathCollides));
    }

    #[test]
    fn separator_width_is_bounded() {
        let config = StorageConfig {
            separator_width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSeparatorWidth { .. })
        ));
    }

    #[test]
    fn snapshot_store_uses_configured_paths() {
        let config = StorageConfig::default();
        let store = config.snapshot_store();
        assert_eq!(store.path(), config.member_details_path.as_path());
        assert_eq!(store.backup_path(), config.backup_path.as_path());
    }
}
