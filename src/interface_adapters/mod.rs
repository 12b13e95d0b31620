// Interface adapters: camera, clock source, input parsing and render outputs.

pub mod camera;
pub mod input;
pub mod protocol;
pub mod render;
pub mod time;
