pub mod dish;
pub mod health;
pub mod recipe;
pub mod secrets;
pub mod server;
pub mod video;
