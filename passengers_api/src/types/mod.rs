mod passenger;
pub use self::passenger::{PassengerRecord, Verbatim};

mod payload;
pub use self::payload::{ErrorBody, ResponsePayload};

mod status;
pub use self::status::ServiceStatus;
