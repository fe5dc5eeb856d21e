use crate::bounds::Bounds;
use crate::rig::Hand;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    Resized(Bounds),
    CloseClicked,
    ResetSizeClicked,
    HoverStarted { hand: Hand },
    HoverEnded { hand: Hand },
    DragStarted { hand: Hand, resizing: bool },
    DragEnded { hand: Hand, resizing: bool },
}

impl fmt::Display for WidgetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetEvent::Resized(bounds) => {
                write!(
                    f,
                    "Resized size=({:.3}, {:.3}, {:.3})",
                    bounds.size.x, bounds.size.y, bounds.size.z
                )
            }
            WidgetEvent::CloseClicked => write!(f, "CloseClicked"),
            WidgetEvent::ResetSizeClicked => write!(f, "ResetSizeClicked"),
            WidgetEvent::HoverStarted { hand } => write!(f, "HoverStarted hand={}", hand.label()),
            WidgetEvent::HoverEnded { hand } => write!(f, "HoverEnded hand={}", hand.label()),
            WidgetEvent::DragStarted { hand, resizing } => {
                write!(f, "DragStarted hand={} resizing={}", hand.label(), resizing)
            }
            WidgetEvent::DragEnded { hand, resizing } => {
                write!(f, "DragEnded hand={} resizing={}", hand.label(), resizing)
            }
        }
    }
}

/// Accumulates events until the host drains them; an undrained bus is not an
/// error, just an absent listener.
#[derive(Default)]
pub struct EventBus {
    events: Vec<WidgetEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<WidgetEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
