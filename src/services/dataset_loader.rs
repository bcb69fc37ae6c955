use crate::config::StorageConfig;
use crate::core::Dataset;
use crate::error::DashboardError;
use crate::services::storage::{ObjectFetcher, UrlSigner};
use std::time::Duration;
use tracing::{error, info};

/// Loads the case table from a fixed bucket/key through a signed URL
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    bucket: String,
    key: String,
    ttl: Duration,
}

impl DatasetLoader {
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            bucket: storage.bucket.clone(),
            key: storage.dataset_key.clone(),
            ttl: Duration::from_secs(storage.url_ttl_secs),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sign, download and parse the dataset.
    ///
    /// Fails with `Credentials` when signing is refused and `Validation` when
    /// a required column is missing; nothing is retried.
    pub fn load(
        &self,
        signer: &dyn UrlSigner,
        fetcher: &dyn ObjectFetcher,
    ) -> Result<Dataset, DashboardError> {
        let result = signer
            .sign(&self.bucket, &self.key, self.ttl)
            .and_then(|url| fetcher.fetch(&url))
            .and_then(Dataset::from_csv_bytes);

        match &result {
            Ok(ds) => info!(
                bucket = %self.bucket,
                key = %self.key,
                rows = ds.row_count(),
                columns = ds.column_count(),
                "Loaded dataset"
            ),
            Err(e) => error!(bucket = %self.bucket, key = %self.key, "Dataset load failed: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use url::Url;

    struct RecordingSigner {
        calls: RefCell<Vec<(String, String, u64)>>,
        fail: bool,
    }

    impl UrlSigner for RecordingSigner {
        fn sign(&self, bucket: &str, key: &str, ttl: Duration) -> Result<Url, DashboardError> {
            self.calls
                .borrow_mut()
                .push((bucket.to_string(), key.to_string(), ttl.as_secs()));
            if self.fail {
                return Err(DashboardError::Credentials("aws_access_key_id not set".into()));
            }
            Ok(Url::parse(&format!("https://storage.test/{bucket}/{key}?sig=1")).unwrap())
        }
    }

    struct StaticFetcher(&'static str);

    impl ObjectFetcher for StaticFetcher {
        fn fetch(&self, _url: &Url) -> Result<Vec<u8>, DashboardError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    fn signer(fail: bool) -> RecordingSigner {
        RecordingSigner {
            calls: RefCell::new(Vec::new()),
            fail,
        }
    }

    #[test]
    fn test_load_signs_default_location() {
        let loader = DatasetLoader::new(&StorageConfig::default());
        let signer = signer(false);
        let ds = loader
            .load(
                &signer,
                &StaticFetcher("file_attachment_id,assign_class\nA1,nevus\n"),
            )
            .unwrap();
        assert_eq!(ds.row_count(), 1);
        assert_eq!(
            signer.calls.borrow().as_slice(),
            &[(
                "derm-data-general".to_string(),
                "dev_set_2.csv".to_string(),
                3600
            )]
        );
    }

    #[test]
    fn test_signing_failure_stops_the_load() {
        let loader = DatasetLoader::new(&StorageConfig::default());
        let err = loader
            .load(&signer(true), &StaticFetcher("unused"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Credentials(_)));
    }

    #[test]
    fn test_missing_column_fails_validation() {
        let loader = DatasetLoader::new(&StorageConfig::default());
        let err = loader
            .load(
                &signer(false),
                &StaticFetcher("file_attachment_id,prediction\nA1,benign\n"),
            )
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation { .. }));
    }
}
