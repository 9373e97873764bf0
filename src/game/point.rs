use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg};

/// A coordinate (or velocity) on the playing field, in field units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same vector pointing the other way
    pub fn reverse(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Wrap into `[0, max_x) x [0, max_y)`
    pub fn wrapped(self, max_x: i32, max_y: i32) -> Self {
        Self {
            x: self.x.rem_euclid(max_x),
            y: self.y.rem_euclid(max_y),
        }
    }

    /// Scale a field position down to a grid cell index
    pub fn to_cell(self, cell_size: i32) -> (i32, i32) {
        (self.x.div_euclid(cell_size), self.y.div_euclid(cell_size))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.reverse()
    }
}
