use crate::error::ApplicationError;
use crate::memorial::memorials_state::MemorialsState;
use crate::memorial::submission::MemorialSubmission;
use crate::tools::log_message_and_return;
use dto::memorial::{MemorialCreated, SubmissionRejection};
use dto::upload_config::UploadConfig;
use rocket::form::Form;
use rocket::{Request, State};
use rocket::http::Status;
use rocket::response::status::{Created, Custom};
use rocket::serde::json::Json;
use std::sync::Mutex;
use uuid::Uuid;

type Rejection = Custom<Json<SubmissionRejection>>;

/// Create a memorial out of the creation form.
/// Answer with the new memorial's identifier and page,
/// or with every reason the submission has been rejected for.
#[post("/memorials", data = "<submission>")]
pub async fn create_memorial(
    upload_config: &State<UploadConfig>,
    memorials_state: &State<Mutex<MemorialsState>>,
    submission: Form<MemorialSubmission<'_>>,
) -> Result<Created<Json<MemorialCreated>>, Rejection> {
    let id = Uuid::new_v4().to_string();
    let memorial = submission
        .to_memorial(id, upload_config)
        .map_err(reject)?;
    let created = MemorialCreated::from(&memorial);

    memorials_state
        .lock()
        .map_err(log_message_and_return(
            "Couldn't acquire lock",
            ApplicationError::StorageUnavailable,
        ))
        .map_err(reject)?
        .insert(memorial);

    log::info!("Memorial {} created", created.id());
    Ok(Created::new(created.url().clone()).body(Json(created)))
}

fn reject(error: ApplicationError) -> Rejection {
    match error {
        ApplicationError::InvalidSubmission(errors) => {
            log::debug!("Submission rejected: {errors:?}");
            Custom(
                Status::UnprocessableEntity,
                Json(SubmissionRejection::new(errors)),
            )
        }
        ApplicationError::StorageUnavailable => Custom(
            Status::InternalServerError,
            Json(SubmissionRejection::new(vec![error.to_string()])),
        ),
    }
}

/// Rocket refuses uploads over its limits before the submission reaches the controller.
#[catch(413)]
pub async fn payload_too_large(req: &Request<'_>) -> Rejection {
    log::info!("Submission too large [uri: {}]", req.uri());
    Custom(
        Status::PayloadTooLarge,
        Json(SubmissionRejection::new(vec![
            "Os arquivos enviados são grandes demais".to_owned(),
        ])),
    )
}
