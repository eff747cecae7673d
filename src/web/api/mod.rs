pub mod memorials_controller;
pub mod server;
