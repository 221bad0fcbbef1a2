use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

impl Vec2D {
    pub fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, a: Action) -> Vec2D {
        self + a.into()
    }

    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Manhattan distance between two points.
    pub fn distance(self, other: Vec2D) -> u64 {
        (self - other).manhattan()
    }
}

impl From<Action> for Vec2D {
    fn from(a: Action) -> Self {
        match a {
            Action::North => Vec2D::new(0, 1),
            Action::East => Vec2D::new(1, 0),
            Action::South => Vec2D::new(0, -1),
            Action::West => Vec2D::new(-1, 0),
            Action::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// The moves an agent can make. `Stop` is the no-op an agent may take
/// instead of moving.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Action {
    North,
    East,
    South,
    West,
    Stop,
}

impl Action {
    pub fn iter() -> impl Iterator<Item = Action> {
        [
            Action::North,
            Action::East,
            Action::South,
            Action::West,
            Action::Stop,
        ]
        .iter()
        .copied()
    }

    pub fn is_stop(self) -> bool {
        self == Action::Stop
    }
}

impl From<Vec2D> for Action {
    fn from(p: Vec2D) -> Action {
        if p.x < 0 {
            Action::West
        } else if p.x > 0 {
            Action::East
        } else if p.y < 0 {
            Action::South
        } else if p.y > 0 {
            Action::North
        } else {
            Action::Stop
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "north",
            Action::East => "east",
            Action::South => "south",
            Action::West => "west",
            Action::Stop => "stop",
        };
        f.pad(name)
    }
}
