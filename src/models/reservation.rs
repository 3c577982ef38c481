use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ids::ReservationId;
use super::wire;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(rename = "people")]
    pub party_size: i32,
    #[serde(with = "wire::date")]
    pub reservation_date: NaiveDate,
    #[serde(with = "wire::time")]
    pub reservation_time: NaiveTime,
}

impl ReservationDraft {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.reservation_date.and_time(self.reservation_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    #[serde(flatten)]
    pub draft: ReservationDraft,
    #[serde(default)]
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Cancelled,
    Finished,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "booked",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Finished => "finished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "Booked",
            ReservationStatus::Seated => "Seated",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Finished => "Finished",
        }
    }

    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Booked, ReservationStatus::Seated)
                | (ReservationStatus::Booked, ReservationStatus::Cancelled)
                | (ReservationStatus::Seated, ReservationStatus::Finished)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: String,
}

impl From<&Reservation> for ReservationForm {
    fn from(reservation: &Reservation) -> Self {
        let draft = &reservation.draft;
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            mobile_number: draft.mobile_number.clone(),
            reservation_date: wire::format_date(draft.reservation_date),
            reservation_time: wire::format_time(draft.reservation_time),
            people: draft.party_size.to_string(),
        }
    }
}
