//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod collision;
pub mod components;
pub mod input;
pub mod player;
pub mod render;
pub mod respawn;
pub mod wander;

pub use self::collision::*;
pub use self::components::*;
pub use self::input::*;
pub use self::player::*;
pub use self::render::*;
pub use self::respawn::*;
pub use self::wander::*;
