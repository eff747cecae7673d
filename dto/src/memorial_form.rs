use chrono::NaiveDate;
use derive_getters::Getters;
use std::collections::BTreeMap;
use thiserror::Error;

/// Format of the values produced by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields a memorial can't be created without, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequiredField {
    PersonName,
    BirthDate,
    DeathDate,
    Message,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::PersonName,
        RequiredField::BirthDate,
        RequiredField::DeathDate,
        RequiredField::Message,
    ];

    /// Name of the form field.
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::PersonName => "person_name",
            RequiredField::BirthDate => "birth_date",
            RequiredField::DeathDate => "death_date",
            RequiredField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::PersonName => "Nome",
            RequiredField::BirthDate => "Data de nascimento",
            RequiredField::DeathDate => "Data de falecimento",
            RequiredField::Message => "Mensagem",
        }
    }

    fn is_date(&self) -> bool {
        matches!(self, RequiredField::BirthDate | RequiredField::DeathDate)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("O campo \"{}\" é obrigatório", .0.label())]
    RequiredFieldMissing(RequiredField),
    #[error("A data de falecimento deve ser posterior à data de nascimento")]
    DateOrderInvalid,
}

/// Values of the required fields, as read from a form.
/// A field which doesn't exist on the page has no value at all and isn't checked.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorialFields {
    values: BTreeMap<RequiredField, String>,
}

impl MemorialFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fields by asking `lookup` for each required field, in order.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(RequiredField) -> Option<String>,
    {
        let values = RequiredField::ALL
            .into_iter()
            .filter_map(|field| lookup(field).map(|value| (field, value)))
            .collect();
        Self { values }
    }

    pub fn with(mut self, field: RequiredField, value: &str) -> Self {
        self.values.insert(field, value.to_owned());
        self
    }

    /// Trimmed value of the field, if the field exists.
    pub fn text(&self, field: RequiredField) -> Option<&str> {
        self.values.get(&field).map(|value| value.trim())
    }

    /// Parsed value of a date field.
    /// Anything that isn't a calendar date is treated as missing.
    pub fn date(&self, field: RequiredField) -> Option<NaiveDate> {
        self.text(field)
            .and_then(|value| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
    }

    fn is_filled(&self, field: RequiredField) -> bool {
        if field.is_date() {
            self.date(field).is_some()
        } else {
            self.text(field).is_some_and(|value| !value.is_empty())
        }
    }

    /// Check every field, without stopping at the first failure,
    /// then check that the birth date comes strictly before the death date.
    pub fn validate(&self) -> FormValidation {
        let mut checks = vec![];
        let mut errors = vec![];

        for field in RequiredField::ALL {
            if !self.values.contains_key(&field) {
                continue;
            }
            let valid = self.is_filled(field);
            if !valid {
                errors.push(ValidationError::RequiredFieldMissing(field));
            }
            checks.push(FieldCheck { field, valid });
        }

        let birth_date = self.date(RequiredField::BirthDate);
        let death_date = self.date(RequiredField::DeathDate);
        if let (Some(birth_date), Some(death_date)) = (birth_date, death_date) {
            if birth_date >= death_date {
                checks
                    .iter_mut()
                    .filter(|check| check.field == RequiredField::DeathDate)
                    .for_each(|check| check.valid = false);
                errors.push(ValidationError::DateOrderInvalid);
            }
        }

        FormValidation { checks, errors }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    field: RequiredField,
    valid: bool,
}

impl FieldCheck {
    pub fn field(&self) -> RequiredField {
        self.field
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

#[derive(Debug, Getters, PartialEq)]
pub struct FormValidation {
    checks: Vec<FieldCheck>,
    errors: Vec<ValidationError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_field_valid(&self, field: RequiredField) -> Option<bool> {
        self.checks
            .iter()
            .find(|check| check.field == field)
            .map(FieldCheck::is_valid)
    }

    pub fn has_date_order_error(&self) -> bool {
        self.errors.contains(&ValidationError::DateOrderInvalid)
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(any(test, feature = "test"))]
pub mod fixtures {
    use super::*;

    pub fn get_complete_fields() -> MemorialFields {
        MemorialFields::new()
            .with(RequiredField::PersonName, "Ana")
            .with(RequiredField::BirthDate, "1950-01-01")
            .with(RequiredField::DeathDate, "2020-01-01")
            .with(RequiredField::Message, "x")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::get_complete_fields;
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_accept_complete_fields() {
        let validation = get_complete_fields().validate();
        assert!(validation.is_valid());
        assert_eq!(4, validation.checks().len());
        assert!(validation.checks().iter().all(FieldCheck::is_valid));
    }

    #[parameterized(
        field = {RequiredField::PersonName, RequiredField::BirthDate, RequiredField::DeathDate, RequiredField::Message},
        value = {"", "   ", "", "\n\t"}
    )]
    fn should_reject_empty_field(field: RequiredField, value: &str) {
        let validation = get_complete_fields().with(field, value).validate();
        assert!(!validation.is_valid());
        assert_eq!(Some(false), validation.is_field_valid(field));
        assert_eq!(
            &vec![ValidationError::RequiredFieldMissing(field)],
            validation.errors()
        );
    }

    #[test]
    fn should_check_every_field_without_stopping() {
        let fields = MemorialFields::from_lookup(|_| Some(String::new()));
        let validation = fields.validate();
        assert_eq!(4, validation.errors().len());
        assert!(validation.checks().iter().all(|check| !check.is_valid()));
        let checked = validation
            .checks()
            .iter()
            .map(FieldCheck::field)
            .collect::<Vec<_>>();
        assert_eq!(RequiredField::ALL.to_vec(), checked);
    }

    #[test]
    fn should_skip_fields_missing_from_page() {
        let fields = MemorialFields::new()
            .with(RequiredField::PersonName, "Ana")
            .with(RequiredField::Message, "x");
        let validation = fields.validate();
        assert!(validation.is_valid());
        assert_eq!(None, validation.is_field_valid(RequiredField::BirthDate));
    }

    #[parameterized(
        death_date = {"1940-01-01", "1950-01-01"}
    )]
    fn should_reject_death_not_after_birth(death_date: &str) {
        let validation = get_complete_fields()
            .with(RequiredField::DeathDate, death_date)
            .validate();
        assert!(!validation.is_valid());
        assert!(validation.has_date_order_error());
        assert_eq!(Some(false), validation.is_field_valid(RequiredField::DeathDate));
        assert_eq!(Some(true), validation.is_field_valid(RequiredField::BirthDate));
        assert_eq!(
            vec!["A data de falecimento deve ser posterior à data de nascimento".to_owned()],
            validation.messages()
        );
    }

    #[parameterized(
        birth_date = {"1950-01-01", "2019-12-31", "1900-02-28"},
        death_date = {"1950-01-02", "2020-01-01", "2024-02-29"}
    )]
    fn should_accept_death_after_birth(birth_date: &str, death_date: &str) {
        let validation = get_complete_fields()
            .with(RequiredField::BirthDate, birth_date)
            .with(RequiredField::DeathDate, death_date)
            .validate();
        assert!(validation.is_valid());
    }

    #[parameterized(
        value = {"not a date", "2020-13-01", "2021-02-29", "01/02/2020"}
    )]
    fn should_treat_unparseable_date_as_missing(value: &str) {
        let validation = get_complete_fields()
            .with(RequiredField::BirthDate, value)
            .validate();
        assert!(!validation.is_valid());
        assert!(!validation.has_date_order_error());
        assert_eq!(
            &vec![ValidationError::RequiredFieldMissing(RequiredField::BirthDate)],
            validation.errors()
        );
    }

    #[test]
    fn should_not_check_date_order_when_one_date_is_missing() {
        let validation = get_complete_fields()
            .with(RequiredField::DeathDate, "")
            .validate();
        assert!(!validation.has_date_order_error());
    }

    #[test]
    fn should_trim_values() {
        let fields = get_complete_fields().with(RequiredField::PersonName, "  Ana  ");
        assert_eq!(Some("Ana"), fields.text(RequiredField::PersonName));
    }

    #[test]
    fn should_be_idempotent() {
        let fields = get_complete_fields().with(RequiredField::DeathDate, "1940-01-01");
        assert_eq!(fields.validate(), fields.validate());
    }
}
