mod error;
mod memorial;
mod tools;
mod web;

#[cfg(test)]
#[path = "../build/wasm_build.rs"]
mod wasm_build;

#[macro_use]
extern crate rocket;

use crate::web::start_servers;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    start_servers()
}
