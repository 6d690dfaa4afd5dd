use super::*;

mod create;
mod get_all;
