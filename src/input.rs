use crate::rig::Hand;

/// The four workspace controls, primary/secondary per hand. Primary drives
/// resize grips, secondary drives whole-panel moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PrimaryLeft,
    PrimaryRight,
    SecondaryLeft,
    SecondaryRight,
}

impl Control {
    pub const ALL: [Control; 4] =
        [Control::PrimaryLeft, Control::PrimaryRight, Control::SecondaryLeft, Control::SecondaryRight];

    pub fn primary(hand: Hand) -> Control {
        match hand {
            Hand::Left => Control::PrimaryLeft,
            Hand::Right => Control::PrimaryRight,
        }
    }

    pub fn secondary(hand: Hand) -> Control {
        match hand {
            Hand::Left => Control::SecondaryLeft,
            Hand::Right => Control::SecondaryRight,
        }
    }

    fn index(self) -> usize {
        match self {
            Control::PrimaryLeft => 0,
            Control::PrimaryRight => 1,
            Control::SecondaryLeft => 2,
            Control::SecondaryRight => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ControlState {
    just_pressed: bool,
    just_released: bool,
    consumed: bool,
}

/// Per-frame input snapshot. The host fills in edge transitions before each
/// tick; consumers mark controls handled so nothing else reacts to the same
/// physical press this frame.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceInput {
    controls: [ControlState; 4],
}

impl WorkspaceInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.controls[control.index()].just_pressed = true;
    }

    pub fn release(&mut self, control: Control) {
        self.controls[control.index()].just_released = true;
    }

    pub fn just_pressed(&self, control: Control) -> bool {
        let state = self.controls[control.index()];
        state.just_pressed && !state.consumed
    }

    pub fn just_released(&self, control: Control) -> bool {
        let state = self.controls[control.index()];
        state.just_released && !state.consumed
    }

    pub fn consume(&mut self, control: Control) {
        self.controls[control.index()].consumed = true;
    }

    pub fn clear_frame(&mut self) {
        self.controls = Default::default();
    }
}
