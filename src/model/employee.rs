//! Employee record and the caller-facing draft/patch shapes.

use serde::{Deserialize, Serialize};

use crate::format::date_input_value;

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    /// Stable key used in storage and translation paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::Tech => "tech",
        }
    }

    pub fn all() -> &'static [Department] {
        &[Self::Analytics, Self::Tech]
    }

    /// Parse from the stable key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.as_str() == s)
    }
}

/// Seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    /// Stable key used in storage and translation paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Medior => "medior",
            Self::Senior => "senior",
        }
    }

    pub fn all() -> &'static [Position] {
        &[Self::Junior, Self::Medior, Self::Senior]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.as_str() == s)
    }
}

/// Candidate record as entered in the add/edit form.
///
/// Carries no identity: `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

/// Partial update. `None` leaves the stored field as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_employment: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_employment: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub created_at: String,
}

impl Employee {
    /// Build a stored record from a draft and store-assigned identity.
    pub fn from_draft(id: String, created_at: String, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_employment: draft.date_of_employment,
            date_of_birth: draft.date_of_birth,
            phone_number: draft.phone_number,
            email: draft.email,
            department: draft.department,
            position: draft.position,
            created_at,
        }
    }

    /// Merge the supplied fields of `patch` into this record.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.date_of_employment {
            self.date_of_employment = Some(v);
        }
        if let Some(v) = patch.date_of_birth {
            self.date_of_birth = Some(v);
        }
        if let Some(v) = patch.phone_number {
            self.phone_number = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.department {
            self.department = Some(v);
        }
        if let Some(v) = patch.position {
            self.position = Some(v);
        }
    }

    /// The form view of this record, used to pre-fill the edit form and
    /// to validate the merged result of an edit.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.date_of_employment.as_deref().map(date_input_value),
            date_of_birth: self.date_of_birth.as_deref().map(date_input_value),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            department: self.department,
            position: self.position,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
