pub mod health_controller;
pub mod verification_controller;
