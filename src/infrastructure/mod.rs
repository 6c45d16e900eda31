pub mod classifier;
pub mod config;
pub mod http;
pub mod upload;

pub use classifier::{MockClassifierApi, RestClassifierApi};
pub use config::Config;
pub use http::HttpTransport;
pub use upload::{upload, ProgressCallback, UploadForm, UploadProgress};
