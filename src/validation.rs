//! Employee form validation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::I18n;
use crate::model::EmployeeDraft;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Ten digits, leading 5, no country code or trunk zero.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^5\d{2}\d{7}$").expect("valid phone pattern"));

/// Form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    PhoneNumber,
    Email,
    Department,
    Position,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::DateOfEmployment,
            Self::DateOfBirth,
            Self::PhoneNumber,
            Self::Email,
            Self::Department,
            Self::Position,
        ]
    }

    /// Field name as used in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    /// Translation key of the field label.
    pub fn label_key(&self) -> String {
        format!("employees.form.{}", self.as_str())
    }

    fn is_blank(&self, draft: &EmployeeDraft) -> bool {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }
        match self {
            Self::FirstName => blank(&draft.first_name),
            Self::LastName => blank(&draft.last_name),
            Self::DateOfEmployment => draft.date_of_employment.as_deref().map_or(true, blank),
            Self::DateOfBirth => draft.date_of_birth.as_deref().map_or(true, blank),
            Self::PhoneNumber => blank(&draft.phone_number),
            Self::Email => blank(&draft.email),
            Self::Department => draft.department.is_none(),
            Self::Position => draft.position.is_none(),
        }
    }
}

/// Field-keyed, localized error messages. Empty when the draft is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// `Ok(())` when empty, otherwise the errors wrapped for `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self))
        }
    }
}

/// Submission blocked by invalid fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationError(pub ValidationErrors);

/// Validate a candidate record. Messages are resolved in the language
/// active at call time.
pub fn validate(draft: &EmployeeDraft, i18n: &I18n) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    for field in Field::all() {
        if field.is_blank(draft) {
            errors.insert(*field, i18n.t("employees.validation.required"));
        }
    }

    let email = draft.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        errors.insert(Field::Email, i18n.t("employees.validation.invalidEmail"));
    }

    let phone = draft.phone_number.trim();
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        errors.insert(
            Field::PhoneNumber,
            i18n.t("employees.validation.invalidPhone"),
        );
    }

    ValidationErrors(errors)
}
