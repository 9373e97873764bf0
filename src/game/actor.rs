use serde::{Deserialize, Serialize};

use super::point::Point;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anything that can be placed on the field and drawn
pub trait Actor {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn text(&self) -> &str;
}

/// A piece of free-standing text on the field, e.g. the game over message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    position: Point,
    color: Color,
    text: String,
}

impl Banner {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            position,
            color: Color::WHITE,
            text: text.into(),
        }
    }
}

impl Actor for Banner {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn text(&self) -> &str {
        &self.text
    }
}
