use crate::math::Pose;
use glam::Vec3;
use serde::Deserialize;

/// Stable per-device index for the two tracked ray origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

/// Host-provided access to the tracked ray origins. The pointer position is
/// the ray origin pushed along its forward axis by the pointer length.
pub trait PointerResolver {
    fn ray_origin(&self, hand: Hand) -> Pose;
    fn pointer_length(&self, hand: Hand) -> f32;

    fn pointer_position(&self, hand: Hand) -> Vec3 {
        let origin = self.ray_origin(hand);
        origin.position + origin.forward() * self.pointer_length(hand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HapticPulse {
    pub duration: f32,
    pub intensity: f32,
}

impl HapticPulse {
    pub fn new(duration: f32, intensity: f32) -> Self {
        Self { duration, intensity }
    }
}

/// Fire-and-forget haptic feedback sink.
pub trait HapticSink {
    fn pulse(&mut self, hand: Hand, pulse: &HapticPulse);
}
