//! Declarative rule tables; adding a rule is a new table row.

pub mod recommendations;
pub mod risk;
