//! Form domain layer
//!
//! Role-conditional registration form state: field rules, the dynamic
//! education list and the validation/visibility controller.

mod education;
mod field;
mod registration;

pub use education::EducationField;
pub use field::FormField;
pub use registration::{
    FocusTarget, RegistrationForm, Role, BUTTON_CANCEL, BUTTON_SUBMIT,
};
