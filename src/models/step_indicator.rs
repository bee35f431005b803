#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Current,
    Completed,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMark {
    pub number: usize,
    pub state: StepState,
    /// Whether a connector follows this mark.
    pub has_next: bool,
}

impl StepMark {
    pub fn class(&self) -> &'static str {
        match self.state {
            StepState::Current => "step current",
            StepState::Completed => "step completed",
            StepState::Upcoming => "step upcoming",
        }
    }
}

/// Progress marks for a linear wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    pub current: usize,
    pub total: usize,
}

impl StepIndicator {
    pub const WIZARD_STEPS: usize = 2;

    pub fn wizard(current: usize) -> Self {
        Self { current, total: Self::WIZARD_STEPS }
    }

    pub fn marks(&self) -> Vec<StepMark> {
        (1..=self.total)
            .map(|number| StepMark {
                number,
                state: if number == self.current {
                    StepState::Current
                } else if number < self.current {
                    StepState::Completed
                } else {
                    StepState::Upcoming
                },
                has_next: number < self.total,
            })
            .collect()
    }
}
