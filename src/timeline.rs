pub mod film;
pub mod node;
pub mod screen;
pub mod sound;
pub mod tape;
