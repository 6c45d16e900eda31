mod classifier_api;
mod transport;

pub use classifier_api::ClassifierApi;
pub use transport::{ApiTransport, FetchRequest, FetchResponse, HttpMethod};
