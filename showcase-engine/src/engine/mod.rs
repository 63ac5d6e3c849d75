pub mod animation;
pub mod assets;
pub mod camera;
pub mod core;
pub mod events;
pub mod input;
pub mod layout;
pub mod loading;
pub mod project;
pub mod render;
pub mod state;
