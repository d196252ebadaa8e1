pub mod app;
pub mod auth;
pub mod config;
pub mod signup;
pub mod state;
pub mod users;
