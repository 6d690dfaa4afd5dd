use super::*;

mod find_by_token;
