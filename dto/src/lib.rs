pub mod memorial;
pub mod memorial_form;
pub mod selected_file;
pub mod upload_config;
