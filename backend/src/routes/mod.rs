pub mod bar;
pub mod boundaries;
pub mod controls;
pub mod heatmap;
pub mod layout;
pub mod map;
pub mod pie;
pub mod selections;
pub mod settings;
