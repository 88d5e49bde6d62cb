pub const MAX_MULTIPLIER: i32 = 8;

/// Transition fed to a [`MultiplierState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierStep {
    Increase,
    Decrease,
}

/// The game's combo multiplier counter.
///
/// The multiplier doubles after `threshold` consecutive increases
/// (2, then 4, then 8 steps) and halves on any decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierState {
    pub multiplier: i32,
    pub progress: i32,
    pub threshold: i32,
}

impl Default for MultiplierState {
    fn default() -> Self {
        Self {
            multiplier: 1,
            progress: 0,
            threshold: 2,
        }
    }
}

impl MultiplierState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn apply(self, step: MultiplierStep) -> Self {
        match step {
            MultiplierStep::Increase => self.increase(),
            MultiplierStep::Decrease => self.decrease(),
        }
    }

    #[inline(always)]
    pub fn increase(self) -> Self {
        if self.multiplier >= MAX_MULTIPLIER {
            return self;
        }

        let progress = (self.progress + 1).min(self.threshold);
        if progress >= self.threshold {
            let multiplier = self.multiplier * 2;
            Self {
                multiplier,
                progress: 0,
                threshold: multiplier * 2,
            }
        } else {
            Self { progress, ..self }
        }
    }

    #[inline(always)]
    pub fn decrease(self) -> Self {
        if self.multiplier > 1 {
            let multiplier = self.multiplier / 2;
            Self {
                multiplier,
                progress: 0,
                threshold: multiplier * 2,
            }
        } else {
            Self {
                progress: 0,
                ..self
            }
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }
}
