//! # Validated Fields
//!
//! Every scalar a contact carries is wrapped in a small newtype that can only
//! hold a value accepted by its kind's validator. Construction (`new`) and
//! mutation (`set`) both run the same check, and deserialization goes through
//! `new` as well, so a value loaded from disk is held to the same rules as one
//! typed at the prompt.
//!
//! | Kind       | Rule                                                  |
//! |------------|-------------------------------------------------------|
//! | `Name`     | any string                                            |
//! | `Phone`    | exactly 10 ASCII digits                               |
//! | `Birthday` | a real calendar date written `DD.MM.YYYY`             |
//! | `Email`    | `local@domain.tld`, local part starts with a letter   |
//! | `Address`  | any string                                            |
//!
//! Values are stored verbatim: no trimming or normalization happens here.
//! Callers that want trimmed input trim before constructing.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// `chrono` format string for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("birthday pattern compiles"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9._]+@[a-zA-Z]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// The closed set of field kinds a contact can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
    Email,
    Address,
}

impl FieldKind {
    /// Pure predicate deciding whether `value` is acceptable for this kind.
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            FieldKind::Name | FieldKind::Address => true,
            FieldKind::Phone => value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()),
            FieldKind::Birthday => parse_birthday(value).is_some(),
            FieldKind::Email => EMAIL_RE.is_match(value),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Birthday => "birthday",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
        }
    }

    /// Short description of the accepted format, shown when input is rejected.
    pub fn hint(self) -> &'static str {
        match self {
            FieldKind::Name | FieldKind::Address => "any text",
            FieldKind::Phone => "phone must contain 10 digits",
            FieldKind::Birthday => "use the DD.MM.YYYY format",
            FieldKind::Email => "use the name@test.com format",
        }
    }

    fn check(self, value: &str) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError {
                kind: self,
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value was rejected by its field's validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} '{value}': {}", .kind.hint())]
pub struct ValidationError {
    pub kind: FieldKind,
    pub value: String,
}

/// Capability shared by every validated field.
pub trait Field: fmt::Display {
    const KIND: FieldKind;

    /// The stored string, exactly as it was accepted.
    fn value(&self) -> &str;

    fn is_valid(value: &str) -> bool
    where
        Self: Sized,
    {
        Self::KIND.is_valid(value)
    }
}

macro_rules! validated_field {
    ($(#[$meta:meta])* $ty:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                <Self as Field>::KIND.check(&value)?;
                Ok(Self(value))
            }

            /// Replaces the value, re-running validation. On failure the old
            /// value is kept.
            pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
                *self = Self::new(value)?;
                Ok(())
            }
        }

        impl Field for $ty {
            const KIND: FieldKind = $kind;

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(field: $ty) -> String {
                field.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_field!(
    /// A contact's name. Also the key the address book stores it under.
    Name => FieldKind::Name
);
validated_field!(
    /// A ten digit phone number.
    Phone => FieldKind::Phone
);
validated_field!(
    /// A birth date, kept in its `DD.MM.YYYY` text form.
    Birthday => FieldKind::Birthday
);
validated_field!(Email => FieldKind::Email);
validated_field!(Address => FieldKind::Address);

impl Birthday {
    pub fn date(&self) -> Option<NaiveDate> {
        parse_birthday(&self.0)
    }
}

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}
