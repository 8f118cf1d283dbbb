/// Outcome of advancing a [`CountAnimation`] by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u64),
    Finished(u64),
}

impl Tick {
    pub fn value(self) -> u64 {
        match self {
            Tick::Running(value) | Tick::Finished(value) => value,
        }
    }
}

/// Discrete interpolation from 0 up to a target over a fixed number of steps.
///
/// Holds no clock. The owner decides when each step happens.
#[derive(Debug, Clone)]
pub struct CountAnimation {
    target: u64,
    steps: u32,
    elapsed: u32,
    increment: f64,
    current: u64,
}

impl CountAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            steps,
            elapsed: 0,
            increment: target as f64 / f64::from(steps),
            current: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.steps
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_finished() {
            return Tick::Finished(self.target);
        }

        self.elapsed += 1;
        let value = ((self.increment * f64::from(self.elapsed)).floor() as u64).min(self.target);
        self.current = self.current.max(value);

        if self.is_finished() {
            // Float steps can land short of the target.
            self.current = self.target;
            Tick::Finished(self.target)
        } else {
            Tick::Running(self.current)
        }
    }
}
