use std::collections::{HashMap, HashSet};

use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use strum_macros::{AsRefStr, EnumString};

use crate::direction::Direction;

/// Physical keys the game understands, named the way browsers and terminals report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

bitflags! {
    /// The set of directions currently held, after key bindings are applied.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldDirections: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for HeldDirections {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeldDirections::UP,
            Direction::Down => HeldDirections::DOWN,
            Direction::Left => HeldDirections::LEFT,
            Direction::Right => HeldDirections::RIGHT,
        }
    }
}

impl HeldDirections {
    /// Collapses the held set to a single direction: up, then down, then left, then right.
    pub fn resolve(self) -> Option<Direction> {
        Direction::DIRECTIONS
            .into_iter()
            .find(|direction| self.contains(HeldDirections::from(*direction)))
    }
}

/// Maps physical keys to movement directions.
#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Key, Direction>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Key::W, Direction::Up),
            (Key::ArrowUp, Direction::Up),
            (Key::S, Direction::Down),
            (Key::ArrowDown, Direction::Down),
            (Key::A, Direction::Left),
            (Key::ArrowLeft, Direction::Left),
            (Key::D, Direction::Right),
            (Key::ArrowRight, Direction::Right),
        ]);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn direction(&self, key: Key) -> Option<Direction> {
        self.key_bindings.get(&key).copied()
    }

    /// Returns a key bound to `direction`, preferring the letter keys.
    pub fn key_for(&self, direction: Direction) -> Option<Key> {
        [Key::W, Key::S, Key::A, Key::D, Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight]
            .into_iter()
            .find(|key| self.direction(*key) == Some(direction))
    }
}

/// Snapshot of the keys currently held down.
#[derive(Debug, Clone, Default, Resource)]
pub struct InputState {
    pressed: HashSet<Key>,
}

impl InputState {
    /// Marks `key` as held. Returns true if it was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.pressed.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn held(&self, bindings: &Bindings) -> HeldDirections {
        self.pressed
            .iter()
            .filter_map(|key| bindings.direction(*key))
            .fold(HeldDirections::empty(), |held, direction| held | HeldDirections::from(direction))
    }

    /// The single direction the player should move in this frame, if any.
    pub fn held_direction(&self, bindings: &Bindings) -> Option<Direction> {
        self.held(bindings).resolve()
    }
}
