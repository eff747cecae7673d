use crate::tools::args::retrieve_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;
use dto::upload_config::UploadConfig;
use rocket::data::{ByteUnit, Limits};
use rocket::{Build, Rocket};

const PORT_ARG_NAMES: [&str; 2] = ["-p", "--port"];
const DEFAULT_PORT: u16 = 8000;
/// Room left in a form for its text fields and multipart overhead.
const FORM_OVERHEAD: u64 = 1024 * 1024;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server(args: &[String]) -> Rocket<Build> {
    let upload_config = UploadConfig::default();
    let figment = rocket::Config::figment()
        .merge(("port", get_port(args)))
        .merge(("limits", build_limits(&upload_config)));
    let rocket_build = rocket::custom(figment);

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new(upload_config)),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port(args: &[String]) -> u16 {
    retrieve_arg_value(args, &PORT_ARG_NAMES)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Uploads are checked by the application: Rocket must let the largest allowed files through.
fn build_limits(upload_config: &UploadConfig) -> Limits {
    let max_file_size = upload_config
        .max_image_size()
        .max(upload_config.max_audio_size());
    let max_form_size =
        upload_config.max_image_size() + upload_config.max_audio_size() + FORM_OVERHEAD;
    Limits::default()
        .limit("file", ByteUnit::from(*max_file_size + FORM_OVERHEAD))
        .limit("data-form", ByteUnit::from(max_form_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {vec!["--port=10"], vec!["-p=10"], vec!["--port=doe"], vec!["--port="], vec![]},
        expected_port = {10, 10, DEFAULT_PORT, DEFAULT_PORT, DEFAULT_PORT}
    )]
    fn should_get_port(args: Vec<&str>, expected_port: u16) {
        let args = args.into_iter().map(str::to_owned).collect::<Vec<_>>();
        assert_eq!(expected_port, get_port(&args));
    }

    #[test]
    fn should_let_largest_files_through() {
        let upload_config = UploadConfig::default();
        let limits = build_limits(&upload_config);

        let file_limit = limits.get("file").unwrap();
        let form_limit = limits.get("data-form").unwrap();
        assert!(file_limit.as_u64() > *upload_config.max_audio_size());
        assert!(
            form_limit.as_u64()
                > upload_config.max_image_size() + upload_config.max_audio_size()
        );
    }
}
