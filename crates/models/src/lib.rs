pub mod phonetic;
pub mod schedule;
