use crate::memorial_form::{MemorialFields, RequiredField, ValidationError};
use crate::selected_file::SelectedFile;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A memorial which passed validation.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct Memorial {
    id: String,
    person_name: String,
    birth_date: NaiveDate,
    death_date: NaiveDate,
    message: String,
    photo: Option<SelectedFile>,
    soundtrack: Option<SelectedFile>,
}

impl Memorial {
    /// Validate the fields and build the memorial from them.
    /// All validation errors are returned at once.
    pub fn from_fields(
        id: String,
        fields: &MemorialFields,
        photo: Option<SelectedFile>,
        soundtrack: Option<SelectedFile>,
    ) -> Result<Self, Vec<ValidationError>> {
        let validation = fields.validate();
        let missing = |field: RequiredField| ValidationError::RequiredFieldMissing(field);

        // Every required field has to exist here, even when a page would have omitted it.
        let mut errors = RequiredField::ALL
            .into_iter()
            .filter(|field| fields.text(*field).is_none())
            .map(missing)
            .collect::<Vec<_>>();
        errors.extend(validation.errors().iter().cloned());
        if !errors.is_empty() {
            return Err(errors);
        }

        let text = |field: RequiredField| fields.text(field).unwrap_or_default().to_owned();
        let date = |field: RequiredField| fields.date(field).ok_or_else(|| vec![missing(field)]);
        Ok(Self {
            id,
            person_name: text(RequiredField::PersonName),
            birth_date: date(RequiredField::BirthDate)?,
            death_date: date(RequiredField::DeathDate)?,
            message: text(RequiredField::Message),
            photo,
            soundtrack,
        })
    }

    pub fn url(&self) -> String {
        memorial_url(&self.id)
    }
}

pub fn memorial_url(id: &str) -> String {
    format!("/memorial/{id}")
}

/// Answer of the server when a memorial has been created.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct MemorialCreated {
    id: String,
    url: String,
}

impl MemorialCreated {
    pub fn new(id: String, url: String) -> Self {
        Self { id, url }
    }
}

impl From<&Memorial> for MemorialCreated {
    fn from(memorial: &Memorial) -> Self {
        Self::new(memorial.id.clone(), memorial.url())
    }
}

/// Answer of the server when a submission doesn't pass validation.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct SubmissionRejection {
    errors: Vec<String>,
}

impl SubmissionRejection {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}
