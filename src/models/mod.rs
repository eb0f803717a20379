pub mod events;
pub mod overlay;
pub mod settings;
pub mod video;
