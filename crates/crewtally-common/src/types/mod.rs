//! Core data types for CrewTally

pub mod call_record;
pub mod tokens;
pub mod usage;
