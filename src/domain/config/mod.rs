pub mod client;
pub mod policy;
