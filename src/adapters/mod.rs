pub mod cli;
pub mod controllers;
pub mod file_loader;
pub mod state;
pub mod view;
