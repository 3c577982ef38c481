use serde::{Deserialize, Serialize};

use super::ids::{ReservationId, TableId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub table_id: TableId,
    pub table_name: String,
    pub capacity: i32,
    #[serde(default)]
    pub reservation_id: Option<ReservationId>,
}

impl Table {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_occupied() {
            "Occupied"
        } else {
            "Free"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDraft {
    pub table_name: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableForm {
    pub table_name: String,
    pub capacity: String,
}
