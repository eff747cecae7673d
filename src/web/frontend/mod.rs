mod filters;
mod frontend_controller;
pub mod server;
