// Typed form structs with declarative validation
// Every form carries a rule table mapping field name to constraints; a valid
// form converts into the request payload the API client sends. Validation
// collects all field errors instead of stopping at the first.

use chrono::NaiveDate;

use crate::models::{LoginRequest, NewGuest, NewReservation, ReservationStatus, SignupRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    Email,
    DigitsOnly,
    MinLen(usize),
    IsoDate,
    Numeric,
}

impl Rule {
    // Rules other than Required skip empty values; Required is expected to
    // sit first in the field's rule list.
    fn check(self, field: &'static str, value: &str) -> Option<FieldError> {
        let value = value.trim();
        match self {
            Rule::Required => value
                .is_empty()
                .then(|| FieldError::new(field, format!("{} is required", field))),
            Rule::Email => (!value.is_empty() && !looks_like_email(value))
                .then(|| FieldError::new(field, "Invalid email format")),
            Rule::DigitsOnly => {
                (!value.is_empty() && !value.chars().all(|c| c.is_ascii_digit()))
                    .then(|| FieldError::new(field, format!("{} should contain only numbers", field)))
            }
            Rule::MinLen(min) => (!value.is_empty() && value.chars().count() < min).then(|| {
                FieldError::new(field, format!("{} must be at least {} characters", field, min))
            }),
            Rule::IsoDate => {
                (!value.is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err())
                    .then(|| FieldError::new(field, format!("{} must be a yyyy-MM-dd date", field)))
            }
            Rule::Numeric => (!value.is_empty() && value.parse::<u32>().is_err())
                .then(|| FieldError::new(field, format!("{} must be a valid id", field))),
        }
    }
}

// Same check the server applies: an @ plus a dot somewhere in the domain
fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .map_or(false, |(local, domain)| !local.is_empty() && domain.contains('.'))
}

type RuleTable = &'static [(&'static str, &'static [Rule])];

fn run_rules<'a, F>(table: RuleTable, value_of: F) -> Vec<FieldError>
where
    F: Fn(&'static str) -> &'a str,
{
    let mut errors = Vec::new();
    for &(field, rules) in table {
        let value = value_of(field);
        for rule in rules {
            if let Some(error) = rule.check(field, value) {
                errors.push(error);
            }
        }
    }
    errors
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuestForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_type: String,
    pub id_number: String,
}

impl GuestForm {
    const RULES: RuleTable = &[
        ("name", &[Rule::Required]),
        ("email", &[Rule::Required, Rule::Email]),
        ("phone", &[Rule::Required, Rule::DigitsOnly]),
        ("id_type", &[Rule::Required]),
        ("id_number", &[Rule::Required]),
    ];

    fn value_of(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "id_type" => &self.id_type,
            "id_number" => &self.id_number,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<NewGuest, Vec<FieldError>> {
        let errors = run_rules(Self::RULES, |field| self.value_of(field));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewGuest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: optional(&self.address),
            id_type: self.id_type.trim().to_string(),
            id_number: self.id_number.trim().to_string(),
        })
    }
}

// Select inputs deliver ids as strings; the payload carries them numeric.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    pub guest_id: String,
    pub room_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub special_requests: String,
}

impl ReservationForm {
    const RULES: RuleTable = &[
        ("guest_id", &[Rule::Required, Rule::Numeric]),
        ("room_id", &[Rule::Required, Rule::Numeric]),
        ("check_in_date", &[Rule::Required, Rule::IsoDate]),
        ("check_out_date", &[Rule::Required, Rule::IsoDate]),
    ];

    fn value_of(&self, field: &str) -> &str {
        match field {
            "guest_id" => &self.guest_id,
            "room_id" => &self.room_id,
            "check_in_date" => &self.check_in_date,
            "check_out_date" => &self.check_out_date,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<NewReservation, Vec<FieldError>> {
        let mut errors = run_rules(Self::RULES, |field| self.value_of(field));

        // Cross-field constraint, only meaningful once both dates parse
        if let (Ok(check_in), Ok(check_out)) = (
            NaiveDate::parse_from_str(self.check_in_date.trim(), "%Y-%m-%d"),
            NaiveDate::parse_from_str(self.check_out_date.trim(), "%Y-%m-%d"),
        ) {
            if check_out < check_in {
                errors.push(FieldError::new(
                    "check_out_date",
                    "Check-out must be after check-in",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewReservation {
            guest_id: self.guest_id.trim().parse().unwrap_or_default(),
            room_id: self.room_id.trim().parse().unwrap_or_default(),
            check_in_date: self.check_in_date.trim().to_string(),
            check_out_date: self.check_out_date.trim().to_string(),
            // New bookings always start out confirmed
            status: ReservationStatus::Confirmed,
            special_requests: optional(&self.special_requests),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub position: String,
    pub password: String,
}

impl SignupForm {
    const RULES: RuleTable = &[
        ("name", &[Rule::Required]),
        ("email", &[Rule::Required, Rule::Email]),
        ("position", &[Rule::Required]),
        ("password", &[Rule::Required, Rule::MinLen(8)]),
    ];

    fn value_of(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "position" => &self.position,
            "password" => &self.password,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<SignupRequest, Vec<FieldError>> {
        let errors = run_rules(Self::RULES, |field| self.value_of(field));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            position: self.position.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    const RULES: RuleTable = &[
        ("email", &[Rule::Required, Rule::Email]),
        ("password", &[Rule::Required]),
    ];

    fn value_of(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, Vec<FieldError>> {
        let errors = run_rules(Self::RULES, |field| self.value_of(field));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
