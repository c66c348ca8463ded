pub mod attempt;
pub mod combined;
pub mod date_range;
pub mod instrument;
