//! Registration form state management
//!
//! The aggregate holds one payload per role. Switching role swaps which
//! payload is rendered and validated; the inactive payloads keep their
//! data so the user can switch back without losing anything.

use super::education::{EducationField, EducationList};
use super::field::{FieldRule, FormField};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The category of user registering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Adopter,
    Shelter,
    Veterinarian,
}

/// Raised when a role value arrives that the schema table does not know.
///
/// This is a configuration error, not user input: it is rejected at the
/// boundary where the role is set instead of silently validating an
/// empty schema.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role '{0}' (expected adopter, shelter or veterinarian)")]
pub struct UnknownRoleError(pub String);

impl Role {
    #[allow(dead_code)]
    pub const ALL: [Role; 3] = [Role::Adopter, Role::Shelter, Role::Veterinarian];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Adopter => "Adopter",
            Role::Shelter => "Shelter",
            Role::Veterinarian => "Veterinarian",
        }
    }

    /// Next role in selector order (wraps around)
    pub fn next(&self) -> Role {
        match self {
            Role::Adopter => Role::Shelter,
            Role::Shelter => Role::Veterinarian,
            Role::Veterinarian => Role::Adopter,
        }
    }

    /// Previous role in selector order (wraps around)
    pub fn prev(&self) -> Role {
        match self {
            Role::Adopter => Role::Veterinarian,
            Role::Shelter => Role::Adopter,
            Role::Veterinarian => Role::Shelter,
        }
    }

    /// The field set that must be rendered and validated for this role
    pub fn schema(&self) -> RoleSchema {
        match self {
            Role::Adopter => RoleSchema {
                required_fields: &[],
                optional_fields: &["preferred_species", "home_description"],
                has_education_list: false,
            },
            Role::Shelter => RoleSchema {
                required_fields: &["shelter_name"],
                optional_fields: &["description", "logo_url", "adoption_policy"],
                has_education_list: false,
            },
            Role::Veterinarian => RoleSchema {
                required_fields: &["experience"],
                optional_fields: &["clinic_name", "specialization"],
                has_education_list: true,
            },
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adopter" => Ok(Role::Adopter),
            "shelter" => Ok(Role::Shelter),
            "veterinarian" => Ok(Role::Veterinarian),
            _ => Err(UnknownRoleError(s.to_string())),
        }
    }
}

/// Field set activated by a role
#[derive(Debug, Clone, Copy)]
pub struct RoleSchema {
    pub required_fields: &'static [&'static str],
    /// Rendered but never validated
    #[allow(dead_code)]
    pub optional_fields: &'static [&'static str],
    pub has_education_list: bool,
}

// Adopter payload: nothing is required, the platform only asks for
// preferences to match against listings.
#[derive(Debug, Clone)]
pub struct AdopterProfile {
    pub preferred_species: FormField,
    pub home_description: FormField,
}

impl AdopterProfile {
    pub const FIELD_COUNT: usize = 2;

    fn new() -> Self {
        Self {
            preferred_species: FormField::text("preferred_species", "Preferred Species", false),
            home_description: FormField::text("home_description", "Home Description", true),
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.preferred_species),
            1 => Some(&self.home_description),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.preferred_species),
            1 => Some(&mut self.home_description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShelterProfile {
    pub shelter_name: FormField,
    pub description: FormField,
    pub logo_url: FormField,
    pub adoption_policy: FormField,
}

impl ShelterProfile {
    pub const FIELD_COUNT: usize = 4;

    fn new() -> Self {
        Self {
            shelter_name: FormField::text("shelter_name", "Shelter Name", false),
            description: FormField::text("description", "Description", true),
            logo_url: FormField::text("logo_url", "Logo URL", false),
            adoption_policy: FormField::text("adoption_policy", "Adoption Policy", true),
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.shelter_name),
            1 => Some(&self.description),
            2 => Some(&self.logo_url),
            3 => Some(&self.adoption_policy),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.shelter_name),
            1 => Some(&mut self.description),
            2 => Some(&mut self.logo_url),
            3 => Some(&mut self.adoption_policy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VeterinarianProfile {
    pub clinic_name: FormField,
    pub specialization: FormField,
    pub experience: FormField,
    pub education: EducationList,
}

impl VeterinarianProfile {
    pub const FIELD_COUNT: usize = 3;

    fn new() -> Self {
        Self {
            clinic_name: FormField::text("clinic_name", "Clinic Name", false),
            specialization: FormField::text("specialization", "Specialization", false),
            experience: FormField::digits("experience", "Experience (years)"),
            education: EducationList::default(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.clinic_name),
            1 => Some(&self.specialization),
            2 => Some(&self.experience),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.clinic_name),
            1 => Some(&mut self.specialization),
            2 => Some(&mut self.experience),
            _ => None,
        }
    }
}

/// What the active field index points at, resolved at call time.
///
/// Resolving lazily (instead of capturing an index when focus moves)
/// keeps focus valid across list add/remove, which renumbers the
/// education cells behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    RoleSelector,
    /// Index into the active payload's scalar fields
    Scalar(usize),
    Education {
        entry: usize,
        field: EducationField,
    },
    AddEntry,
    Buttons,
}

/// Message shown when a required scalar field is blank.
///
/// Keyed by field name; the sentence casing differs from the display
/// labels, which title-case every word.
fn required_message(name: &str) -> &'static str {
    match name {
        "shelter_name" => "Shelter name is required.",
        "experience" => "Experience is required.",
        _ => "This field is required.",
    }
}

/// Buttons on the form's action row
pub const BUTTON_CANCEL: usize = 0;
pub const BUTTON_SUBMIT: usize = 1;

/// Aggregate root for one registration session
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub role: Role,
    pub adopter: AdopterProfile,
    pub shelter: ShelterProfile,
    pub veterinarian: VeterinarianProfile,
    pub active_field_index: usize,
    /// Which button is selected on the action row (0=Cancel, 1=Submit)
    pub selected_button: usize,
    /// One-shot visibility gate; flipped by [`RegistrationForm::reveal`],
    /// never reset within a session
    show_errors: bool,
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl RegistrationForm {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            adopter: AdopterProfile::new(),
            shelter: ShelterProfile::new(),
            veterinarian: VeterinarianProfile::new(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
            show_errors: false,
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// Switch the active role. Payload data for the previous role is kept.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        // The focus order changes shape with the role
        self.clamp_active_field();
    }

    /// Number of scalar fields in the active payload
    pub fn scalar_count(&self) -> usize {
        match self.role {
            Role::Adopter => AdopterProfile::FIELD_COUNT,
            Role::Shelter => ShelterProfile::FIELD_COUNT,
            Role::Veterinarian => VeterinarianProfile::FIELD_COUNT,
        }
    }

    /// Total focusable positions: role selector, scalars, education cells
    /// plus the add-entry row (veterinarian only), action buttons.
    pub fn field_count(&self) -> usize {
        let mut count = 1 + self.scalar_count() + 1;
        if self.role == Role::Veterinarian {
            count += self.veterinarian.education.len() * EducationField::ALL.len() + 1;
        }
        count
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    fn clamp_active_field(&mut self) {
        let max = self.field_count() - 1;
        if self.active_field_index > max {
            self.active_field_index = max;
        }
    }

    /// Resolve the active field index to a concrete target
    pub fn focus_target(&self) -> FocusTarget {
        let index = self.active_field_index;
        if index == 0 {
            return FocusTarget::RoleSelector;
        }

        let scalars = self.scalar_count();
        if index <= scalars {
            return FocusTarget::Scalar(index - 1);
        }

        let rest = index - 1 - scalars;
        if self.role == Role::Veterinarian {
            let cells = self.veterinarian.education.len() * EducationField::ALL.len();
            if rest < cells {
                return FocusTarget::Education {
                    entry: rest / EducationField::ALL.len(),
                    field: EducationField::ALL[rest % EducationField::ALL.len()],
                };
            }
            if rest == cells {
                return FocusTarget::AddEntry;
            }
        }

        FocusTarget::Buttons
    }

    fn active_scalar_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match self.role {
            Role::Adopter => self.adopter.field_mut(index),
            Role::Shelter => self.shelter.field_mut(index),
            Role::Veterinarian => self.veterinarian.field_mut(index),
        }
    }

    /// Read a scalar field of the active payload by position
    pub fn active_scalar(&self, index: usize) -> Option<&FormField> {
        match self.role {
            Role::Adopter => self.adopter.field(index),
            Role::Shelter => self.shelter.field(index),
            Role::Veterinarian => self.veterinarian.field(index),
        }
    }

    /// Look up a scalar field of the active payload by name
    fn active_field_by_name(&self, name: &str) -> Option<&FormField> {
        (0..self.scalar_count())
            .filter_map(|i| self.active_scalar(i))
            .find(|f| f.name == name)
    }

    /// Route a typed character to the focused field.
    ///
    /// Digits-only fields drop non-digit characters at this boundary; the
    /// rejected keystroke never reaches form state.
    pub fn handle_char(&mut self, c: char) {
        match self.focus_target() {
            FocusTarget::Scalar(i) => {
                if let Some(field) = self.active_scalar_mut(i) {
                    field.push_char(c);
                }
            }
            FocusTarget::Education { entry, field } => {
                self.veterinarian.education.push_char(entry, field, c);
            }
            FocusTarget::RoleSelector | FocusTarget::AddEntry | FocusTarget::Buttons => {}
        }
    }

    /// Route a backspace to the focused field
    pub fn handle_backspace(&mut self) {
        match self.focus_target() {
            FocusTarget::Scalar(i) => {
                if let Some(field) = self.active_scalar_mut(i) {
                    field.pop_char();
                }
            }
            FocusTarget::Education { entry, field } => {
                self.veterinarian.education.pop_char(entry, field);
            }
            FocusTarget::RoleSelector | FocusTarget::AddEntry | FocusTarget::Buttons => {}
        }
    }

    /// Append an education entry and focus its first cell
    pub fn add_education_entry(&mut self) {
        self.veterinarian.education.add();
        let new_entry = self.veterinarian.education.len() - 1;
        self.active_field_index =
            1 + self.scalar_count() + new_entry * EducationField::ALL.len();
    }

    /// Remove the education entry under focus; no-op when focus is not on
    /// an entry. Focus is re-clamped because the list shrank.
    pub fn remove_focused_education_entry(&mut self) {
        if let FocusTarget::Education { entry, .. } = self.focus_target() {
            self.veterinarian.education.remove(entry);
            self.clamp_active_field();
        }
    }

    /// Recompute the error map for the active schema from scratch.
    ///
    /// Full recomputation (rather than patching) guarantees that keys for
    /// removed education entries never linger.
    pub fn compute_errors(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        let schema = self.role.schema();

        for &name in schema.required_fields {
            if let Some(field) = self.active_field_by_name(name) {
                if FieldRule::NonBlank.evaluate(field.as_text()).is_err() {
                    errors.insert(name.to_string(), required_message(name).to_string());
                }
            }
        }

        if schema.has_education_list {
            let education = &self.veterinarian.education;
            if education.is_empty() {
                errors.insert(
                    "education".to_string(),
                    "At least one education entry is required.".to_string(),
                );
            }
            for (i, entry) in education.iter().enumerate() {
                for field in EducationField::ALL {
                    if FieldRule::NonBlank.evaluate(entry.get(field)).is_err() {
                        errors.insert(
                            field.error_key(i),
                            format!("{} is required.", field.label()),
                        );
                    }
                }
            }
        }

        errors
    }

    /// Flip the visibility gate. Idempotent; there is no reverse
    /// transition within a session.
    pub fn reveal(&mut self) {
        self.show_errors = true;
    }

    /// Whether a submit attempt has made errors visible
    pub fn errors_revealed(&self) -> bool {
        self.show_errors
    }

    /// Whether the error for `key` should be surfaced to the user
    #[allow(dead_code)]
    pub fn is_visible(&self, key: &str) -> bool {
        self.show_errors && self.compute_errors().contains_key(key)
    }

    /// The message for `key`, but only once the gate is open
    pub fn visible_error(&self, key: &str) -> Option<String> {
        if self.show_errors {
            self.compute_errors().remove(key)
        } else {
            None
        }
    }

    /// The form can be submitted when the active schema has no errors
    pub fn is_submit_ready(&self) -> bool {
        self.compute_errors().is_empty()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(Role::default())
    }
}
