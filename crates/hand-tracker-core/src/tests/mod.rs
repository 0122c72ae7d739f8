#![allow(clippy::unwrap_used)]

mod renderer;
mod support;
