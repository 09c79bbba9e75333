pub mod attendance;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod marks;
pub mod reference;

pub use common::response::ApiResponse;
pub use common::validation::ValidationResult;
