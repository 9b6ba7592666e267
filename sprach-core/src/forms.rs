//! Login and registration form.
//!
//! Only validation is done here. A valid form yields a [`Submission`] that
//! describes the request a backend would receive; nothing is sent.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Validation errors, one per rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("E-mail address is invalid")]
    InvalidEmail,

    #[error("Password is missing")]
    MissingPassword,

    #[error("Name is missing")]
    MissingName,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// Translation key in the login section.
    pub fn key(&self) -> &'static str {
        match self {
            FormError::InvalidEmail => "invalidEmail",
            FormError::MissingPassword => "missingPassword",
            FormError::MissingName => "missingName",
            FormError::PasswordMismatch => "passwordMismatch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// An input field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordRepeat,
}

impl Field {
    /// Translation key of the field label.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordRepeat => "repeatPassword",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordRepeat)
    }
}

/// The validated request. Passwords are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub mode: FormMode,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    mode: FormMode,
    name: String,
    email: String,
    password: String,
    password_repeat: String,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switch between login and registration. Passwords are cleared.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
        self.password.clear();
        self.password_repeat.clear();
        debug!(mode = ?self.mode, "form mode toggled");
    }

    /// Fields shown in the current mode, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self.mode {
            FormMode::Login => &[Field::Email, Field::Password],
            FormMode::Register => &[
                Field::Name,
                Field::Email,
                Field::Password,
                Field::PasswordRepeat,
            ],
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordRepeat => &self.password_repeat,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.value_mut(field).pop();
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordRepeat => &mut self.password_repeat,
        }
    }

    /// Check the fields for the current mode.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.mode == FormMode::Register && self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.mode == FormMode::Register && self.password != self.password_repeat {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validate and build the request.
    pub fn submit(&self) -> Result<Submission, FormError> {
        if let Err(e) = self.validate() {
            debug!(mode = ?self.mode, error = %e, "form rejected");
            return Err(e);
        }
        let submission = Submission {
            mode: self.mode,
            email: self.email.trim().to_string(),
            name: match self.mode {
                FormMode::Register => Some(self.name.trim().to_string()),
                FormMode::Login => None,
            },
        };
        info!(mode = ?submission.mode, "form submitted");
        Ok(submission)
    }
}
