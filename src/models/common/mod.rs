pub mod date;
pub mod number;
pub mod response;
pub mod validation;
