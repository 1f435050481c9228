//! Contact form validation and submission lifecycle.
//!
//! `idle → validating → submitting → {succeeded, failed}`; a validation
//! failure goes straight to `failed`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{ContactError, SubmitError, ValidationError};
use crate::toast::Toast;

/// Form control names read from the contact form.
pub const FIELD_NAMES: [&str; 5] = ["name", "email", "phone", "projectType", "message"];

pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "projectType", "message"];

pub const SUCCESS_MESSAGE: &str = "¡Solicitud enviada correctamente! Te contactaremos pronto.";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

impl ContactFields {
    /// Build from form-data style `(name, value)` pairs. Unknown names are
    /// ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let mut fields = Self::default();
        for (name, value) in pairs {
            match name {
                "name" => fields.name = value,
                "email" => fields.email = value,
                "phone" => fields.phone = value,
                "projectType" => fields.project_type = value,
                "message" => fields.message = value,
                _ => {}
            }
        }
        fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "projectType" => Some(&self.project_type),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// A malformed email is reported ahead of missing fields.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if !fields.email.is_empty() && !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    let missing = fields.missing_required();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// What the page should do once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub toast: Toast,
    pub reset_form: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    phase: FormPhase,
}

impl ContactFormState {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate and enter `Submitting`.
    ///
    /// Rejected with `Busy` while an earlier submission is still pending.
    pub fn begin(&mut self, fields: &ContactFields) -> Result<(), ContactError> {
        if self.is_pending() {
            return Err(ContactError::Busy);
        }
        self.phase = FormPhase::Validating;
        if let Err(e) = validate(fields) {
            self.phase = FormPhase::Failed;
            return Err(e.into());
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) -> FormOutcome {
        match result {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                FormOutcome {
                    toast: Toast::success(SUCCESS_MESSAGE),
                    reset_form: true,
                }
            }
            Err(e) => {
                self.phase = FormPhase::Failed;
                FormOutcome {
                    toast: Toast::error(e.to_string()),
                    reset_form: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn complete() -> ContactFields {
        ContactFields {
            name: "Lucía".into(),
            email: "lucia@taller.es".into(),
            phone: String::new(),
            project_type: "prototipo".into(),
            message: "Necesito 20 piezas en PETG".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(validate(&complete()), Ok(()));
    }

    #[test]
    fn each_blank_required_field_is_rejected() {
        for name in REQUIRED_FIELDS {
            let mut fields = complete();
            match name {
                "name" => fields.name = "   ".into(),
                "email" => fields.email = String::new(),
                "projectType" => fields.project_type = "\t".into(),
                "message" => fields.message = String::new(),
                _ => unreachable!(),
            }
            assert_eq!(
                validate(&fields),
                Err(ValidationError::MissingFields(vec![name])),
                "{name}"
            );
        }
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["lucia", "lucia@taller", "@taller.es", "lu cia@taller.es", "lucia@@taller.es"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn invalid_email_takes_priority_over_missing_fields() {
        let fields = ContactFields {
            email: "no-es-un-email".into(),
            ..ContactFields::default()
        };
        let err = validate(&fields).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Por favor, introduce un email válido.");
    }

    #[test]
    fn from_pairs_maps_form_names() {
        let fields = ContactFields::from_pairs([
            ("name", "Ana".to_owned()),
            ("projectType", "figura".to_owned()),
            ("newsletter", "on".to_owned()),
        ]);
        assert_eq!(fields.name, "Ana");
        assert_eq!(fields.project_type, "figura");
        assert_eq!(fields.missing_required(), vec!["email", "message"]);
    }

    #[test]
    fn success_resets_form_and_shows_success_toast() {
        let mut form = ContactFormState::default();
        form.begin(&complete()).unwrap();
        let outcome = form.finish(Ok(()));
        assert!(outcome.reset_form);
        assert_eq!(outcome.toast.kind, ToastKind::Success);
        assert_eq!(outcome.toast.message, SUCCESS_MESSAGE);
        assert_eq!(form.phase(), FormPhase::Succeeded);
    }

    #[test]
    fn failure_retains_form_and_shows_error_toast() {
        let mut form = ContactFormState::default();
        form.begin(&complete()).unwrap();
        let outcome = form.finish(Err(SubmitError::new("offline")));
        assert!(!outcome.reset_form);
        assert_eq!(outcome.toast.kind, ToastKind::Error);
        assert_eq!(
            outcome.toast.message,
            "Error al enviar el formulario. Inténtelo de nuevo."
        );
        assert_eq!(form.phase(), FormPhase::Failed);
    }

    #[test]
    fn second_submit_while_pending_is_busy() {
        let mut form = ContactFormState::default();
        form.begin(&complete()).unwrap();
        assert_eq!(form.begin(&complete()), Err(ContactError::Busy));
        form.finish(Ok(()));
        assert!(form.begin(&complete()).is_ok());
    }

    #[test]
    fn invalid_form_does_not_enter_submitting() {
        let mut form = ContactFormState::default();
        let err = form.begin(&ContactFields::default()).unwrap_err();
        assert!(matches!(err, ContactError::Invalid(ValidationError::MissingFields(_))));
        assert!(!form.is_pending());
        assert_eq!(form.phase(), FormPhase::Failed);
    }
}
