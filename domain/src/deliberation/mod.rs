//! Deliberation domain module
//!
//! Entities and value objects for the three-role deliberation pipeline.

pub mod entities;
pub mod persona;
pub mod value_objects;
pub mod verdict;
