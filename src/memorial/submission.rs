use crate::error::{ApplicationError, Result};
use dto::memorial::Memorial;
use dto::memorial_form::{MemorialFields, RequiredField};
use dto::selected_file::SelectedFile;
use dto::upload_config::UploadConfig;
use rocket::FromForm;
use rocket::fs::TempFile;

/// The creation form, as sent by the browser.
/// Text fields are optional so that a missing field is reported like an empty one.
#[derive(FromForm)]
pub struct MemorialSubmission<'r> {
    person_name: Option<String>,
    birth_date: Option<String>,
    death_date: Option<String>,
    message: Option<String>,
    photo: Option<TempFile<'r>>,
    soundtrack: Option<TempFile<'r>>,
}

impl MemorialSubmission<'_> {
    fn fields(&self) -> MemorialFields {
        MemorialFields::from_lookup(|field| {
            let value = match field {
                RequiredField::PersonName => &self.person_name,
                RequiredField::BirthDate => &self.birth_date,
                RequiredField::DeathDate => &self.death_date,
                RequiredField::Message => &self.message,
            };
            Some(value.clone().unwrap_or_default())
        })
    }

    /// Check the submission the same way the browser does, and build the memorial out of it.
    /// Every problem found is reported, not only the first one.
    pub fn to_memorial(&self, id: String, upload_config: &UploadConfig) -> Result<Memorial> {
        let photo = self.photo.as_ref().and_then(describe_file);
        let soundtrack = self.soundtrack.as_ref().and_then(describe_file);

        let mut errors = vec![];
        if let Some(photo) = &photo {
            if let Err(error) = upload_config.check_image(photo) {
                errors.push(error.to_string());
            }
        }
        if let Some(soundtrack) = &soundtrack {
            if let Err(error) = upload_config.check_audio(soundtrack) {
                errors.push(error.to_string());
            }
        }

        match Memorial::from_fields(id, &self.fields(), photo, soundtrack) {
            Ok(memorial) if errors.is_empty() => Ok(memorial),
            Ok(_) => Err(ApplicationError::InvalidSubmission(errors)),
            Err(validation_errors) => {
                let mut messages = validation_errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                messages.extend(errors);
                Err(ApplicationError::InvalidSubmission(messages))
            }
        }
    }
}

/// An empty file part is what browsers send when no file has been picked.
fn describe_file(file: &TempFile<'_>) -> Option<SelectedFile> {
    if file.len() == 0 {
        return None;
    }

    let name = file.name().unwrap_or_default().to_owned();
    let mime_type = file
        .content_type()
        .map(|content_type| {
            let media_type = content_type.media_type();
            format!("{}/{}", media_type.top(), media_type.sub())
        })
        .unwrap_or_default();
    Some(SelectedFile::new(name, mime_type, file.len()))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn get_complete_submission() -> MemorialSubmission<'static> {
        MemorialSubmission {
            person_name: Some("Ana".to_owned()),
            birth_date: Some("1950-01-01".to_owned()),
            death_date: Some("2020-01-01".to_owned()),
            message: Some("x".to_owned()),
            photo: None,
            soundtrack: None,
        }
    }

    #[test]
    fn should_build_memorial_from_complete_submission() {
        let memorial = get_complete_submission()
            .to_memorial("abc".to_owned(), &UploadConfig::default())
            .unwrap();
        assert_eq!("Ana", memorial.person_name());
        assert_eq!(&None, memorial.photo());
    }

    #[test]
    fn should_report_every_missing_field() {
        let submission = MemorialSubmission {
            person_name: None,
            message: Some(" ".to_owned()),
            ..get_complete_submission()
        };
        let error = submission
            .to_memorial("abc".to_owned(), &UploadConfig::default())
            .unwrap_err();
        assert_eq!(
            ApplicationError::InvalidSubmission(vec![
                "O campo \"Nome\" é obrigatório".to_owned(),
                "O campo \"Mensagem\" é obrigatório".to_owned(),
            ]),
            error
        );
    }

    #[test]
    fn should_reject_wrong_date_order() {
        let submission = MemorialSubmission {
            death_date: Some("1940-01-01".to_owned()),
            ..get_complete_submission()
        };
        let error = submission
            .to_memorial("abc".to_owned(), &UploadConfig::default())
            .unwrap_err();
        assert_eq!(
            ApplicationError::InvalidSubmission(vec![
                "A data de falecimento deve ser posterior à data de nascimento".to_owned()
            ]),
            error
        );
    }
}
