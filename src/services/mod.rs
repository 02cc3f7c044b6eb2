pub mod transport;
pub mod outcome;
pub mod api_client;

pub use transport::*;
pub use outcome::*;
pub use api_client::ApiClient;
