use super::point::Point;

/// Direction a cycle can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the head velocity for this direction on a grid of `cell_size`
    pub fn velocity(&self, cell_size: i32) -> Point {
        match self {
            Direction::Up => Point::new(0, -cell_size),
            Direction::Down => Point::new(0, cell_size),
            Direction::Left => Point::new(-cell_size, 0),
            Direction::Right => Point::new(cell_size, 0),
        }
    }
}

/// One of the two seats in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Position of this player's cycle in the cast
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A steering command for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub direction: Direction,
}

impl Turn {
    pub fn new(player: Player, direction: Direction) -> Self {
        Self { player, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_velocity() {
        assert_eq!(Direction::Up.velocity(15), Point::new(0, -15));
        assert_eq!(Direction::Down.velocity(15), Point::new(0, 15));
        assert_eq!(Direction::Left.velocity(15), Point::new(-15, 0));
        assert_eq!(Direction::Right.velocity(15), Point::new(15, 0));
    }

    #[test]
    fn test_player_index() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
    }
}
