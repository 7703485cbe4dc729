mod client;
mod errors;
pub mod types;
pub use self::client::{Client, PendingResponse, DATA_PATH, STATUS_PATH};
pub use self::errors::Error;
