pub mod health;
pub mod save;
