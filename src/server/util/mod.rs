//! Small helpers shared by the service layer.

pub mod slug;
pub mod validate;
