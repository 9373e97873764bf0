use super::actor::{Actor, Color};
use super::config::GameConfig;
use super::point::Point;

pub const HEAD_GLYPH: &str = "8";
pub const BODY_GLYPH: &str = "#";

/// One link of a cycle's trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    position: Point,
    velocity: Point,
    color: Color,
    text: &'static str,
}

impl Segment {
    fn new(position: Point, velocity: Point, color: Color, text: &'static str) -> Self {
        Self {
            position,
            velocity,
            color,
            text,
        }
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn is_head(&self) -> bool {
        self.text == HEAD_GLYPH
    }
}

impl Actor for Segment {
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
        self.text
    }
}

/// A light cycle: a head followed by an ever-growing trail
///
/// Segment 0 is always the head. Every tick each segment moves by its own
/// velocity, one segment is appended behind the tail, and velocities are
/// handed one step down the chain, so a turn of the head reaches segment
/// `i` exactly `i` ticks later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    segments: Vec<Segment>,
    default_color: Color,
    dead_color: Color,
    is_dead: bool,
    /// Field size to wrap positions into, if wrapping is enabled
    field: Option<(i32, i32)>,
}

impl Cycle {
    /// Build a cycle whose head sits at `start` with the body trailing to
    /// the left.
    ///
    /// # Panics
    ///
    /// Panics if `config.initial_cycle_length` is zero; a cycle without a
    /// head has no meaning.
    pub fn new(start: Point, color: Color, config: &GameConfig) -> Self {
        assert!(
            config.initial_cycle_length > 0,
            "a cycle needs at least one segment"
        );

        let velocity = Point::new(config.cell_size, 1);
        let segments = (0..config.initial_cycle_length)
            .map(|i| {
                let position = Point::new(start.x - i as i32 * config.cell_size, start.y);
                let text = if i == 0 { HEAD_GLYPH } else { BODY_GLYPH };
                Segment::new(position, velocity, color, text)
            })
            .collect();

        Self {
            segments,
            default_color: color,
            dead_color: config.dead_color,
            is_dead: false,
            field: config.wrap_field.then_some((config.max_x, config.max_y)),
        }
    }

    /// Advance one tick: move, grow, then propagate velocities backwards
    pub fn move_next(&mut self) {
        for i in 0..self.segments.len() {
            let segment = &self.segments[i];
            let next = self.place(segment.position + segment.velocity);
            self.segments[i].position = next;
        }

        self.grow_tail(1);

        for i in (1..self.segments.len()).rev() {
            let velocity = self.segments[i - 1].velocity;
            self.segments[i].velocity = velocity;
        }
    }

    /// Append `count` segments directly behind the current tail, wrapped
    /// into the field like any other position
    pub fn grow_tail(&mut self, count: usize) {
        for _ in 0..count {
            let tail = self
                .segments
                .last()
                .expect("cycle is constructed with at least one segment");
            let velocity = tail.velocity;
            let position = self.place(tail.position + velocity.reverse());
            let color = self.color();
            self.segments
                .push(Segment::new(position, velocity, color, BODY_GLYPH));
        }
    }

    /// Steer the head; applied on the next `move_next`
    pub fn turn_head(&mut self, velocity: Point) {
        self.segments[0].velocity = velocity;
    }

    pub fn set_is_dead(&mut self) {
        self.is_dead = true;
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Current color of the cycle: the dead color once it has crashed
    pub fn color(&self) -> Color {
        if self.is_dead {
            self.dead_color
        } else {
            self.default_color
        }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every segment except the head
    pub fn tail(&self) -> &[Segment] {
        &self.segments[1..]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any trail segment (head excluded) sits at `position`
    pub fn trail_contains(&self, position: Point) -> bool {
        self.tail().iter().any(|s| s.position == position)
    }

    fn place(&self, position: Point) -> Point {
        match self.field {
            Some((max_x, max_y)) => position.wrapped(max_x, max_y),
            None => position,
        }
    }
}
