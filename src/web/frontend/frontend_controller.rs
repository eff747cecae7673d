use crate::memorial::memorials_state::MemorialsState;
use crate::tools::log_message_and_return;
use dto::upload_config::{FileKind, UploadConfig};
use rocket::http::Status;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};
use std::sync::Mutex;

#[get("/")]
pub async fn index() -> Template {
    Template::render(
        "index",
        context! {
            title: "Vida em Memória",
            page: "index",
        },
    )
}

#[get("/criar-memorial")]
pub async fn create_memorial(upload_config: &State<UploadConfig>) -> Template {
    Template::render(
        "criar-memorial",
        context! {
            title: "Criar memorial",
            page: "criar-memorial",
            max_image_size: upload_config.max_image_size(),
            max_audio_size: upload_config.max_audio_size(),
            image_accept: upload_config.accept_attribute(FileKind::Image),
            audio_accept: upload_config.accept_attribute(FileKind::Audio),
        },
    )
}

#[get("/memorial/<id>")]
pub async fn display_memorial(
    id: &str,
    memorials_state: &State<Mutex<MemorialsState>>,
) -> Result<Template, Status> {
    let memorials_state = memorials_state.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    let memorial = memorials_state.get(id).ok_or(Status::NotFound)?;

    Ok(Template::render(
        "memorial",
        context! {
            title: format!("Em memória de {}", memorial.person_name()),
            page: "memorial",
            memorial: memorial,
        },
    ))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: "Página não encontrada",
            uri: req.uri(),
        },
    )
}
