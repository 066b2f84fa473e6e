pub mod logger;
pub mod upload;
