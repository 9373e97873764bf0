use super::actor::{Actor, Color};
use super::point::Point;

/// Running score for the round, drawn as "Score: n"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    points: u32,
    position: Point,
    color: Color,
    text: String,
}

impl Score {
    pub fn new() -> Self {
        Self {
            points: 0,
            position: Point::default(),
            color: Color::WHITE,
            text: Self::label(0),
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
        self.text = Self::label(self.points);
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    fn label(points: u32) -> String {
        format!("Score: {points}")
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Score {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_points() {
        let mut score = Score::new();
        assert_eq!(score.points(), 0);
        assert_eq!(score.text(), "Score: 0");

        score.add_points(1);
        score.add_points(4);
        assert_eq!(score.points(), 5);
        assert_eq!(score.text(), "Score: 5");
    }
}
