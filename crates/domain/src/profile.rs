// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and company profile field rules.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::validation::require_non_blank;

/// Student academic profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfileFields {
    pub full_name: String,
    pub roll_number: String,
    pub branch: String,
    pub cgpa: f64,
    pub phone: Option<String>,
}

/// Company business profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfileFields {
    pub company_name: String,
    pub industry: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

fn trimmed_optional(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn validate_phone(phone: &str) -> Result<(), DomainError> {
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidPhone(format!(
            "'{phone}' must be exactly 10 digits"
        )));
    }
    Ok(())
}

impl StudentProfileFields {
    /// Validates the profile and returns a trimmed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank, the CGPA is outside
    /// `[0, 10]` (or not a number), or the phone is present but not ten digits.
    pub fn validate(&self) -> Result<Self, DomainError> {
        require_non_blank("full_name", &self.full_name)?;
        require_non_blank("roll_number", &self.roll_number)?;
        require_non_blank("branch", &self.branch)?;

        if !(0.0..=10.0).contains(&self.cgpa) {
            return Err(DomainError::InvalidCgpa(format!(
                "{} is outside the range 0 to 10",
                self.cgpa
            )));
        }

        let phone: Option<String> = trimmed_optional(self.phone.as_ref());
        if let Some(phone) = &phone {
            validate_phone(phone)?;
        }

        Ok(Self {
            full_name: self.full_name.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            branch: self.branch.trim().to_string(),
            cgpa: self.cgpa,
            phone,
        })
    }
}

impl CompanyProfileFields {
    /// Validates the profile and returns a trimmed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the company name or industry is blank.
    pub fn validate(&self) -> Result<Self, DomainError> {
        require_non_blank("company_name", &self.company_name)?;
        require_non_blank("industry", &self.industry)?;

        Ok(Self {
            company_name: self.company_name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            description: trimmed_optional(self.description.as_ref()),
            website: trimmed_optional(self.website.as_ref()),
            contact_person: trimmed_optional(self.contact_person.as_ref()),
            contact_email: trimmed_optional(self.contact_email.as_ref()),
            contact_phone: trimmed_optional(self.contact_phone.as_ref()),
        })
    }
}
