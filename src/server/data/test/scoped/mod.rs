use super::*;
use crate::server::data::{category, section, tag};

mod assign;
mod ensure_unique;
mod is_taken;
mod translate_violation;
