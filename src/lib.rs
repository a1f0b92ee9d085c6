pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod movement;
pub mod pool;
pub mod progression;
pub mod spawner;
