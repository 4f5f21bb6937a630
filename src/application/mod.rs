pub mod error;
pub mod form_controller;
pub mod services;
pub mod validator;
