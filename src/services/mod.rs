pub mod api;
pub mod formatting;
pub mod validation;
