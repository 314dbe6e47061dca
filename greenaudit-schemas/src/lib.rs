//! Plain data model shared by the GreenAudit calculator and its front ends.

pub mod consumption;
pub mod factors;
pub mod file_formats;
pub mod impact;
pub mod profile;
