use super::*;

mod create;
mod delete;
mod get_paginated;
