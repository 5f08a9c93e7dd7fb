//! External process execution
//!
//! The render tool is an opaque collaborator; these modules only build its
//! argument vector, spawn it, and report its exit status.

pub mod cookiecutter;
pub mod subprocess;
