use std::fmt;

use chrono::NaiveDate;

use crate::models::{wire, ReservationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard { date: Option<NaiveDate> },
    NewReservation,
    EditReservation(ReservationId),
    SeatReservation(ReservationId),
    NewTable,
    Search,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard { date: Some(date) } => {
                format!("/dashboard?date={}", wire::format_date(*date))
            }
            Route::Dashboard { date: None } => "/dashboard".to_string(),
            Route::NewReservation => "/reservations/new".to_string(),
            Route::EditReservation(id) => format!("/reservations/{id}/edit"),
            Route::SeatReservation(id) => format!("/reservations/{id}/seat"),
            Route::NewTable => "/tables/new".to_string(),
            Route::Search => "/search".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
