use std::collections::HashSet;

use log::{error, info};

use crate::error::Error;
use crate::rope::{Command, Point, Rope, KNOTS};

/// A rope together with every position its tail has occupied.
#[derive(Debug)]
pub struct Simulator<const N: usize = KNOTS> {
    rope: Rope<N>,
    visited: HashSet<Point>,
}

impl<const N: usize> Simulator<N> {
    pub fn new() -> Simulator<N> {
        Simulator::with_rope(Rope::new())
    }

    pub fn with_rope(rope: Rope<N>) -> Simulator<N> {
        Simulator {
            rope,
            visited: HashSet::default(),
        }
    }

    pub fn rope(&self) -> &Rope<N> {
        &self.rope
    }

    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn apply_head_step(&mut self, command: Command) {
        self.rope.step_head(command);
    }

    pub fn propagate_follow(&mut self) -> Result<(), Error> {
        self.rope.propagate()
    }

    pub fn record_tail(&mut self) {
        self.visited.insert(self.rope.tail());
    }

    pub fn step(&mut self, command: Command) -> Result<(), Error> {
        self.apply_head_step(command);
        self.propagate_follow()?;
        self.record_tail();
        Ok(())
    }

    /// Runs every command in order and returns the number of distinct tail
    /// positions, the starting one included.
    ///
    /// `observe` sees the simulator once before the first command and again
    /// after each command.
    pub fn run<I, F>(&mut self, commands: I, mut observe: F) -> Result<usize, Error>
    where
        I: IntoIterator<Item = Command>,
        F: FnMut(&Simulator<N>),
    {
        self.record_tail();
        observe(&*self);

        let mut steps = 0usize;
        for command in commands {
            if let Err(e) = self.step(command) {
                error!("step {} ({:?}) failed: {}", steps + 1, command, e);
                return Err(e);
            }
            steps += 1;
            observe(&*self);
        }

        info!(
            "{} steps, tail visited {} positions",
            steps,
            self.visited_count()
        );

        Ok(self.visited_count())
    }
}

impl<const N: usize> Default for Simulator<N> {
    fn default() -> Simulator<N> {
        Simulator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::commands::read_commands;

    const SMALL_EXAMPLE: &str = "\
        R 4\n\
        U 4\n\
        L 3\n\
        D 1\n\
        R 4\n\
        D 1\n\
        L 5\n\
        R 2\n\
    ";

    const LARGE_EXAMPLE: &str = "\
        R 5\n\
        U 8\n\
        L 8\n\
        D 3\n\
        R 17\n\
        D 10\n\
        L 25\n\
        U 20\n\
    ";

    fn commands(input: &str) -> Vec<Command> {
        read_commands(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_small_example() {
        let mut short: Simulator<2> = Simulator::new();
        assert_eq!(short.run(commands(SMALL_EXAMPLE), |_| {}).unwrap(), 13);

        let mut long: Simulator = Simulator::new();
        assert_eq!(long.run(commands(SMALL_EXAMPLE), |_| {}).unwrap(), 1);
    }

    #[test]
    fn test_large_example() {
        let mut sim: Simulator = Simulator::new();

        assert_eq!(sim.run(commands(LARGE_EXAMPLE), |_| {}).unwrap(), 36);
    }

    #[test]
    fn test_origin_is_recorded_before_any_command() {
        let mut sim: Simulator = Simulator::new();

        assert_eq!(sim.run(Vec::new(), |_| {}).unwrap(), 1);
        assert!(sim.visited().contains(&Point::ORIGIN));
    }

    #[test]
    fn test_rope_stays_taut() {
        let mut sim: Simulator = Simulator::new();
        let mut observed = 0;

        sim.run(commands(LARGE_EXAMPLE), |s| {
            assert!(s.rope().is_taut(), "slack rope: {}", s.rope());
            observed += 1;
        })
        .unwrap();

        // Initial state plus one observation per step.
        assert_eq!(observed, 1 + commands(LARGE_EXAMPLE).len());
    }

    #[test]
    fn test_visited_is_monotonic() {
        let mut sim: Simulator = Simulator::new();
        let mut sizes = vec![];

        sim.run(commands(LARGE_EXAMPLE), |s| sizes.push(s.visited_count()))
            .unwrap();

        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sizes.last(), Some(&36));
    }

    #[test]
    fn test_record_tail_is_idempotent() {
        let mut sim: Simulator<2> = Simulator::new();

        sim.record_tail();
        sim.record_tail();

        assert_eq!(sim.visited_count(), 1);
    }

    #[test]
    fn test_deterministic() {
        let runs = (0..3)
            .map(|_| {
                let mut sim: Simulator = Simulator::new();
                let count = sim.run(commands(LARGE_EXAMPLE), |_| {}).unwrap();
                (count, sim.rope().clone())
            })
            .collect::<Vec<_>>();

        assert!(runs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_run_surfaces_violation() {
        let rope = Rope::from_knots([Point::new(0, 0), Point::new(5, 0)]);
        let mut sim = Simulator::with_rope(rope);

        let result = sim.run(vec![Command::Right], |_| {});

        assert!(matches!(
            result,
            Err(Error::InvariantViolation { knot: 1, .. })
        ));
    }
}
