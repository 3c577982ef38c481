pub mod ids;
pub mod reservation;
pub mod table;
pub mod wire;

pub use ids::{ReservationId, TableId};
pub use reservation::{Reservation, ReservationDraft, ReservationForm, ReservationStatus};
pub use table::{Table, TableDraft, TableForm};
