pub mod document;
pub mod file;
pub mod signature;
pub mod upload_target;
