#![allow(clippy::unwrap_used)]

mod console;
mod replay;
mod support;
