#![allow(dead_code)]

pub mod http_stub;
pub mod fixtures;
