mod canvas;
mod renderer;

pub use {
    canvas::{Canvas, Color, Point},
    renderer::{HandRenderer, SkeletonStyle},
};
