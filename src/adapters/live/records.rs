//! Live record store reading and writing YAML metadata records.

use crate::ports::records::{Job, RecordStore};
use crate::record::DocumentNode;

/// Live record store backed by one YAML file per job.
pub struct LiveRecordStore;

impl RecordStore for LiveRecordStore {
    fn read_record(
        &self,
        job: &Job,
    ) -> Result<DocumentNode, Box<dyn std::error::Error + Send + Sync>> {
        let contents = std::fs::read_to_string(&job.meta_path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    fn write_record(
        &self,
        job: &Job,
        record: &DocumentNode,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let yaml = serde_yaml::to_string(record)?;
        if let Some(parent) = job.meta_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(&job.meta_path, yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MetadataValue;

    #[test]
    fn write_then_read_round_trips() {
        let dir = std::env::temp_dir().join("mintid_records_roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let job = Job::new("job-1", dir.join("meta.yaml"));

        let mut record = DocumentNode::new("Monograph");
        record.metadata.push(MetadataValue { name: "CatalogIDDigital".into(), value: "42".into() });

        let store = LiveRecordStore;
        store.write_record(&job, &record).unwrap();
        let loaded = store.read_record(&job).unwrap();

        assert_eq!(record, loaded);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_record_file_is_an_error() {
        let job = Job::new("job-2", "/nonexistent/mintid/meta.yaml");
        assert!(LiveRecordStore.read_record(&job).is_err());
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = std::env::temp_dir().join("mintid_records_mkdir");
        let _ = std::fs::remove_dir_all(&dir);
        let job = Job::new("job-3", dir.join("nested").join("meta.yaml"));

        LiveRecordStore.write_record(&job, &DocumentNode::new("Monograph")).unwrap();
        assert!(job.meta_path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
