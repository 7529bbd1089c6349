pub mod csv;
pub mod listing;
