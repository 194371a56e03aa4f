pub mod controllers;
pub mod error;
pub mod infrastructure;
