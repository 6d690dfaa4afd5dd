use super::*;

mod create;
mod get_by_post;
mod update;
