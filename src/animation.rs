pub mod descriptor;
pub mod ease;
pub mod motion;
