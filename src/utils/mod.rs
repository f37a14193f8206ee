pub mod error;
pub mod js;
pub mod logger;
pub mod validation;
