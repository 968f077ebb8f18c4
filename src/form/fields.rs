//! The six form fields and their values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::form::error::FormError;

/// Identifies one of the six form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Phone,
    Email,
    GuessCost,
    SpidrPin,
}

impl FieldName {
    /// All fields in display order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Phone,
        FieldName::Email,
        FieldName::GuessCost,
        FieldName::SpidrPin,
    ];

    /// Literal field name as used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Phone => "phone",
            FieldName::Email => "email",
            FieldName::GuessCost => "guessCost",
            FieldName::SpidrPin => "spidrPin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Phone => "Phone Number",
            FieldName::Email => "Email Address",
            FieldName::GuessCost => "Guess the Air Fryer's Price ($)",
            FieldName::SpidrPin => "Secret Spidr PIN",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldName::SpidrPin => Some("####-####-####-####"),
            _ => None,
        }
    }

    /// Position in [`FieldName::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldName::FirstName => 0,
            FieldName::LastName => 1,
            FieldName::Phone => 2,
            FieldName::Email => 3,
            FieldName::GuessCost => 4,
            FieldName::SpidrPin => 5,
        }
    }

    /// Vertical logo offset in pixels while this field has focus.
    pub fn logo_offset(self) -> u16 {
        self.index() as u16 * 20
    }

    /// Next field, wrapping after the last one.
    pub fn next(self) -> FieldName {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping before the first one.
    pub fn prev(self) -> FieldName {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FormError::UnknownField {
                name: name.to_string(),
            })
    }
}

/// Current value of every field, always in masked form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub guess_cost: String,
    pub spidr_pin: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Phone => &self.phone,
            FieldName::Email => &self.email,
            FieldName::GuessCost => &self.guess_cost,
            FieldName::SpidrPin => &self.spidr_pin,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Phone => &mut self.phone,
            FieldName::Email => &mut self.email,
            FieldName::GuessCost => &mut self.guess_cost,
            FieldName::SpidrPin => &mut self.spidr_pin,
        };
        *slot = value;
    }

    /// Fields holding the empty string. Whitespace counts as filled.
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }
}
