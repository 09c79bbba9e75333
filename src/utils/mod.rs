pub mod jwt;
pub mod math;
pub mod request_token;
pub mod validate;

pub use math::round2;
pub use request_token::{RequestSequencer, RequestTicket};
pub use validate::{validate_division, validate_identifier};
