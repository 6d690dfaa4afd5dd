use super::*;

mod get_all;
mod set_posts;
