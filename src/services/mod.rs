pub mod dataset_loader;
pub mod image_resolver;
pub mod storage;

pub use dataset_loader::DatasetLoader;
pub use image_resolver::{fetch_image, image_key, ImageResolver};
pub use storage::{HttpFetcher, ObjectFetcher, S3Signer, UrlSigner, DEFAULT_URL_TTL};
