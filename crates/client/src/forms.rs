//! Synchronous form validation.
//!
//! Each form validates into either the request body it would submit or the
//! per-field messages to show. Invalid forms never reach the API.
use std::{collections::BTreeMap, sync::LazyLock};

use api_types::{
    Amount, AmountError,
    transaction::{Transaction, TransactionInput},
    user::{LoginCredentials, SignupData},
};
use chrono::{Local, NaiveDate};
use regex::Regex;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 200;
const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 200;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Title,
    Description,
    Value,
    TransactionDate,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(Field::Email, "Email is invalid");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    let len = char_len(password);
    if password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        errors.insert(
            Field::Password,
            "Password must be between 6 and 10 characters",
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginCredentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result(|| LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupData, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.insert(Field::Name, "Name is required");
        } else if char_len(&self.name) > MAX_NAME_LEN {
            errors.insert(Field::Name, "Name must be less than 200 characters");
        }

        check_email(&mut errors, &self.email);
        if errors.get(Field::Email).is_none() && char_len(&self.email) > MAX_EMAIL_LEN {
            errors.insert(Field::Email, "Email must be less than 200 characters");
        }

        check_password(&mut errors, &self.password);

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match");
        }

        errors.into_result(|| SignupData {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Create/edit form for a transaction. Fields hold raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub title: String,
    pub description: String,
    pub value: String,
    pub transaction_date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl TransactionForm {
    /// Empty form dated `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            value: String::new(),
            transaction_date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Form pre-filled from an existing transaction, for editing.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            title: transaction.title.clone(),
            description: transaction.description.clone().unwrap_or_default(),
            value: transaction.value.to_decimal_string(),
            transaction_date: transaction
                .transaction_date
                .format(DATE_FORMAT)
                .to_string(),
        }
    }

    pub fn validate(&self) -> Result<TransactionInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(Field::Title, "Title is required");
        } else if char_len(&self.title) > MAX_TITLE_LEN {
            errors.insert(Field::Title, "Title must be less than 100 characters");
        }

        if char_len(&self.description) > MAX_DESCRIPTION_LEN {
            errors.insert(
                Field::Description,
                "Description must be less than 200 characters",
            );
        }

        let value = match self.value.parse::<Amount>() {
            Ok(value) if value.is_positive() => Some(value),
            Err(AmountError::TooManyDecimals) => {
                errors.insert(Field::Value, "Value must have at most 2 decimal places");
                None
            }
            _ => {
                errors.insert(Field::Value, "Value must be greater than 0");
                None
            }
        };

        let date = if self.transaction_date.trim().is_empty() {
            errors.insert(Field::TransactionDate, "Date is required");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.transaction_date.trim(), DATE_FORMAT).ok();
            if parsed.is_none() {
                errors.insert(
                    Field::TransactionDate,
                    "Date must be in YYYY-MM-DD format",
                );
            }
            parsed
        };

        match (value, date) {
            (Some(value), Some(transaction_date)) if errors.is_empty() => Ok(TransactionInput {
                title: self.title.clone(),
                description: Some(self.description.clone()).filter(|d| !d.is_empty()),
                value,
                transaction_date,
            }),
            _ => Err(errors),
        }
    }
}
