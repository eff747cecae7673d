use crate::memorial::memorials_state::MemorialsState;
use crate::web::api::memorials_controller;
use crate::web::server::Server;
use dto::upload_config::UploadConfig;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {
    upload_config: UploadConfig,
}

impl ApiServer {
    pub fn new(upload_config: UploadConfig) -> Self {
        Self { upload_config }
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.upload_config.clone())
            .manage(Mutex::new(MemorialsState::default()))
            .mount("/api/", routes![memorials_controller::create_memorial])
            .register("/api/", catchers![memorials_controller::payload_too_large])
    }
}
