use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::models::{wire, ReservationDraft, ReservationForm, Table, TableDraft, TableForm};
use crate::services::formatting::format_mobile_number;

// Variants are declared in evaluation order, which is also the order their
// messages are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationRule {
    ClosedOnTuesday,
    InThePast,
    BeforeOpening,
    AfterClosing,
    MobileNumberTooShort,
    PartyTooSmall,
}

impl ReservationRule {
    pub fn message(&self) -> &'static str {
        match self {
            ReservationRule::ClosedOnTuesday => "Sorry, but the restaurant is closed on Tuesdays.",
            ReservationRule::InThePast => "Reservations must be set after today.",
            ReservationRule::BeforeOpening => {
                "The earliest reservation time available is 10:30AM. Please select a new time."
            }
            ReservationRule::AfterClosing => {
                "The latest reservation time is 9:30 PM. Please select a new time."
            }
            ReservationRule::MobileNumberTooShort => "Telephone number must be 10 digits.",
            ReservationRule::PartyTooSmall => "Reservations must have at least one person.",
        }
    }
}

impl fmt::Display for ReservationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

const MIN_MOBILE_DIGITS: usize = 10;

pub fn check_reservation(draft: &ReservationDraft, now: NaiveDateTime) -> Vec<ReservationRule> {
    let hour = draft.reservation_time.hour();
    let minute = draft.reservation_time.minute();
    let mut violated = Vec::new();

    if draft.reservation_date.weekday() == Weekday::Tue {
        violated.push(ReservationRule::ClosedOnTuesday);
    }

    if draft.starts_at() <= now {
        violated.push(ReservationRule::InThePast);
    }

    // These two are pattern matches on the hour/minute pair, not a single
    // range comparison. 09:30..=09:59 passes the opening check.
    if (hour <= 10 && minute < 30) || hour < 9 {
        violated.push(ReservationRule::BeforeOpening);
    }

    if (hour >= 21 && minute > 30) || hour >= 22 {
        violated.push(ReservationRule::AfterClosing);
    }

    let digits = draft
        .mobile_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    if digits < MIN_MOBILE_DIGITS {
        violated.push(ReservationRule::MobileNumberTooShort);
    }

    if draft.party_size < 1 {
        violated.push(ReservationRule::PartyTooSmall);
    }

    violated
}

pub fn validate_reservation(draft: &ReservationDraft, now: NaiveDateTime) -> Vec<String> {
    check_reservation(draft, now)
        .into_iter()
        .map(|rule| rule.to_string())
        .collect()
}

// Unparseable fields are reported instead of the business rules, which need
// a complete draft. Missing names are appended last.
pub fn validate_reservation_form(
    form: &ReservationForm,
    now: NaiveDateTime,
) -> Result<ReservationDraft, Vec<String>> {
    let date = wire::parse_date(&form.reservation_date);
    let time = wire::parse_time(&form.reservation_time);
    let party_size = form.people.trim().parse::<i32>().ok();

    let mut errors = Vec::new();
    let draft = match (date, time, party_size) {
        (Some(reservation_date), Some(reservation_time), Some(party_size)) => {
            let draft = ReservationDraft {
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                mobile_number: format_mobile_number(&form.mobile_number),
                party_size,
                reservation_date,
                reservation_time,
            };
            errors.extend(validate_reservation(&draft, now));
            Some(draft)
        }
        _ => {
            if date.is_none() {
                errors.push("Reservation date must be a valid date.".to_string());
            }
            if time.is_none() {
                errors.push("Reservation time must be a valid time.".to_string());
            }
            if party_size.is_none() {
                errors.push("Party size must be a number.".to_string());
            }
            None
        }
    };

    if form.first_name.trim().is_empty() {
        errors.push("First name is required.".to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.push("Last name is required.".to_string());
    }

    match draft {
        Some(draft) if errors.is_empty() => Ok(draft),
        _ => Err(errors),
    }
}

pub fn validate_table_form(form: &TableForm) -> Result<TableDraft, Vec<String>> {
    let table_name = form.table_name.trim().to_string();
    let capacity = form.capacity.trim().parse::<i32>().unwrap_or(0);

    let mut errors = Vec::new();
    if table_name.chars().count() < 2 {
        errors.push("Table name must be at least 2 characters.".to_string());
    }
    if capacity < 1 {
        errors.push("Table capacity must be at least 1.".to_string());
    }

    if errors.is_empty() {
        Ok(TableDraft {
            table_name,
            capacity,
        })
    } else {
        Err(errors)
    }
}

pub fn check_seating(table: &Table, party_size: i32) -> Vec<String> {
    let mut errors = Vec::new();
    if table.capacity < party_size {
        errors.push("Table capacity is smaller than the party size.".to_string());
    }
    if table.is_occupied() {
        errors.push("Table is occupied.".to_string());
    }
    errors
}
