//! Route definitions

pub mod courses;
