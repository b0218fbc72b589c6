use std::fmt;

use itertools::Itertools;

use crate::error::Error;

/// Number of knots in the puzzle's rope, head included.
pub const KNOTS: usize = 10;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    pub fn step(self, command: Command) -> Point {
        let (dx, dy) = command.delta();
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn chebyshev_distance(self, other: Point) -> i64 {
        i64::max((other.x - self.x).abs(), (other.y - self.y).abs())
    }

    pub fn manhattan_distance(self, other: Point) -> i64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Where this knot ends up after its leader has moved to `leader`.
    ///
    /// Alignment is checked before distance: a Manhattan distance of 2 is a
    /// move when the knots share a row or column, and a no-op when they are
    /// diagonal neighbours. Returns `None` for any separation that a single
    /// head step can't produce.
    pub fn follow(self, leader: Point) -> Option<Point> {
        let dx = leader.x - self.x;
        let dy = leader.y - self.y;

        if dy == 0 {
            return match dx {
                2 => Some(Point::new(self.x + 1, self.y)),
                -2 => Some(Point::new(self.x - 1, self.y)),
                -1..=1 => Some(self),
                _ => None,
            };
        }

        if dx == 0 {
            return match dy {
                2 => Some(Point::new(self.x, self.y + 1)),
                -2 => Some(Point::new(self.x, self.y - 1)),
                -1..=1 => Some(self),
                _ => None,
            };
        }

        match self.manhattan_distance(leader) {
            2 => Some(self),
            3 | 4 => {
                let (sx, sy) = (dx.signum(), dy.signum());
                if sx == 0 || sy == 0 {
                    return None;
                }
                Some(Point::new(self.x + sx, self.y + sy))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub fn delta(self) -> (i64, i64) {
        use Command::*;

        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// One input line: a direction repeated `count` times.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub command: Command,
    pub count: u64,
}

impl Move {
    pub fn steps(self) -> impl Iterator<Item = Command> {
        (0..self.count).map(move |_| self.command)
    }
}

/// Flattens moves into unit commands, in input order.
pub fn expand(moves: &[Move]) -> Vec<Command> {
    moves.iter().flat_map(|m| m.steps()).collect()
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Rope<const N: usize> {
    knots: [Point; N],
}

impl<const N: usize> Rope<N> {
    pub fn new() -> Rope<N> {
        Rope::from_knots([Point::ORIGIN; N])
    }

    pub fn from_knots(knots: [Point; N]) -> Rope<N> {
        assert!(N >= 1);
        Rope { knots }
    }

    pub fn knots(&self) -> &[Point; N] {
        &self.knots
    }

    pub fn head(&self) -> Point {
        self.knots[0]
    }

    pub fn tail(&self) -> Point {
        self.knots[N - 1]
    }

    /// Moves the head one lattice step. The rest of the rope is untouched
    /// until `propagate` runs.
    pub fn step_head(&mut self, command: Command) {
        self.knots[0] = self.knots[0].step(command);
    }

    /// Drags every knot after the head toward its leader, front to back, so
    /// each knot sees its leader's already updated position.
    pub fn propagate(&mut self) -> Result<(), Error> {
        for i in 1..N {
            let leader = self.knots[i - 1];
            let follower = self.knots[i];

            self.knots[i] = follower
                .follow(leader)
                .ok_or(Error::InvariantViolation {
                    knot: i,
                    leader,
                    follower,
                })?;
        }

        Ok(())
    }

    /// True when every knot touches its leader.
    pub fn is_taut(&self) -> bool {
        self.knots
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.chebyshev_distance(*b) <= 1)
    }
}

impl<const N: usize> Default for Rope<N> {
    fn default() -> Rope<N> {
        Rope::new()
    }
}

impl<const N: usize> fmt::Display for Rope<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.knots.iter().join(" "))
    }
}
