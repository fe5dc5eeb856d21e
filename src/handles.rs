use crate::math::Pose;
use crate::rig::Hand;
use glam::Vec3;
use smallvec::SmallVec;

const DOUBLE_CLICK_MIN_INTERVAL: f32 = 0.15;
const DOUBLE_CLICK_MAX_INTERVAL: f32 = 0.3;

const INITIAL_SCROLL_RATE: f32 = 2.0;
const SCROLL_ACCELERATION: f32 = 14.0;
const SCROLL_DEADZONE: f32 = 0.5;

/// Capability tag for handle geometry; dispatch is explicit rather than
/// through a virtual hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleShape {
    Box,
    Sphere,
    Cone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleEvent {
    HoverStarted { hand: Hand },
    HoverEnded { hand: Hand },
    DragBegun { hand: Hand },
    Dragged { hand: Hand, delta: Vec3 },
    DragEnded { hand: Hand },
    DoubleClicked { hand: Hand },
}

/// Shared hover/drag behavior for the 3D handles: event hooks, start-drag
/// capture and double-click detection from successive begin-drags.
#[derive(Debug)]
pub struct BaseHandle {
    shape: HandleShape,
    hovering: SmallVec<[Hand; 2]>,
    dragging: bool,
    start_drag_position: Vec3,
    last_click_time: Option<f32>,
    events: Vec<HandleEvent>,
}

impl BaseHandle {
    pub fn new(shape: HandleShape) -> Self {
        Self {
            shape,
            hovering: SmallVec::new(),
            dragging: false,
            start_drag_position: Vec3::ZERO,
            last_click_time: None,
            events: Vec::new(),
        }
    }

    pub fn shape(&self) -> HandleShape {
        self.shape
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn hovered(&self) -> bool {
        !self.hovering.is_empty()
    }

    pub fn start_drag_position(&self) -> Vec3 {
        self.start_drag_position
    }

    pub fn drain_events(&mut self) -> Vec<HandleEvent> {
        self.events.drain(..).collect()
    }

    pub fn hover_enter(&mut self, hand: Hand) {
        self.hovering.push(hand);
        self.events.push(HandleEvent::HoverStarted { hand });
    }

    pub fn hover_exit(&mut self, hand: Hand) {
        if let Some(index) = self.hovering.iter().position(|&h| h == hand) {
            self.hovering.remove(index);
            self.events.push(HandleEvent::HoverEnded { hand });
        }
    }

    /// `now` is the host clock in seconds; successive begin-drags within the
    /// double-click window fire `DoubleClicked` alongside `DragBegun`.
    pub fn begin_drag(&mut self, hand: Hand, raycast_position: Vec3, now: f32) {
        self.dragging = true;
        self.start_drag_position = raycast_position;
        self.events.push(HandleEvent::DragBegun { hand });

        if let Some(last) = self.last_click_time {
            let interval = now - last;
            if interval >= DOUBLE_CLICK_MIN_INTERVAL && interval <= DOUBLE_CLICK_MAX_INTERVAL {
                self.events.push(HandleEvent::DoubleClicked { hand });
            }
        }
        self.last_click_time = Some(now);
    }

    pub fn end_drag(&mut self, hand: Hand) {
        self.dragging = false;
        self.events.push(HandleEvent::DragEnded { hand });
    }

    fn push_drag(&mut self, hand: Hand, delta: Vec3) {
        self.events.push(HandleEvent::Dragged { hand, delta });
    }
}

/// A handle dragged along the surface of a sphere around the ray origin; the
/// sphere radius is captured from the raycast at drag start and scrolled
/// in or out while dragging.
#[derive(Debug)]
pub struct SphereHandle {
    base: BaseHandle,
    scroll_rate: f32,
    last_position: Vec3,
    current_radius: f32,
}

impl SphereHandle {
    pub fn new() -> Self {
        Self {
            base: BaseHandle::new(HandleShape::Sphere),
            scroll_rate: INITIAL_SCROLL_RATE,
            last_position: Vec3::ZERO,
            current_radius: 0.0,
        }
    }

    pub fn base(&self) -> &BaseHandle {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseHandle {
        &mut self.base
    }

    pub fn radius(&self) -> f32 {
        self.current_radius
    }

    pub fn begin_drag(&mut self, hand: Hand, raycast_position: Vec3, raycast_distance: f32, now: f32) {
        self.base.begin_drag(hand, raycast_position, now);
        self.last_position = raycast_position;
        self.current_radius = raycast_distance;
        self.scroll_rate = INITIAL_SCROLL_RATE;
    }

    /// Per-frame drag: the handle sits at the ray pushed out by the current
    /// radius; emits the world-space delta since the previous frame.
    pub fn drag(&mut self, hand: Hand, ray_origin: &Pose) {
        let world_position = ray_origin.position + ray_origin.forward() * self.current_radius;
        let delta = world_position - self.last_position;
        self.last_position = world_position;
        self.base.push_drag(hand, delta);
    }

    pub fn end_drag(&mut self, hand: Hand) {
        self.base.end_drag(hand);
    }

    pub fn change_radius(&mut self, delta: f32) {
        self.current_radius = (self.current_radius + delta).max(0.0);
    }

    /// Scrolling changes the sphere radius while dragging, accelerating the
    /// longer the scroll is held past the deadzone.
    pub fn scroll(&mut self, scroll_delta: f32, dt: f32) {
        if !self.base.dragging {
            return;
        }

        if scroll_delta.abs() > SCROLL_DEADZONE {
            self.scroll_rate += scroll_delta.abs() * SCROLL_ACCELERATION * dt;
        } else {
            self.scroll_rate = INITIAL_SCROLL_RATE;
        }

        self.change_radius(self.scroll_rate * scroll_delta * dt);
    }
}

impl Default for SphereHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn double_click_fires_only_inside_window() {
        let mut handle = BaseHandle::new(HandleShape::Box);
        handle.begin_drag(Hand::Left, Vec3::ZERO, 0.0);
        handle.end_drag(Hand::Left);
        handle.begin_drag(Hand::Left, Vec3::ZERO, 0.2);
        let events = handle.drain_events();
        assert!(events.contains(&HandleEvent::DoubleClicked { hand: Hand::Left }));

        handle.end_drag(Hand::Left);
        handle.begin_drag(Hand::Left, Vec3::ZERO, 1.5);
        let events = handle.drain_events();
        assert!(!events.iter().any(|e| matches!(e, HandleEvent::DoubleClicked { .. })));

        handle.end_drag(Hand::Left);
        handle.begin_drag(Hand::Left, Vec3::ZERO, 1.55);
        let events = handle.drain_events();
        assert!(
            !events.iter().any(|e| matches!(e, HandleEvent::DoubleClicked { .. })),
            "clicks repeated faster than the minimum interval do not count"
        );
    }

    #[test]
    fn sphere_drag_tracks_ray_at_captured_radius() {
        let mut handle = SphereHandle::new();
        let origin = Pose::new(Vec3::ZERO, Quat::IDENTITY);
        handle.begin_drag(Hand::Right, Vec3::new(0.0, 0.0, 2.0), 2.0, 0.0);

        let moved = Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
        handle.drag(Hand::Right, &moved);
        let events = handle.base_mut().drain_events();
        let delta = events
            .iter()
            .find_map(|e| match e {
                HandleEvent::Dragged { delta, .. } => Some(*delta),
                _ => None,
            })
            .expect("drag event");
        assert!(delta.distance(Vec3::new(1.0, 0.0, 0.0)) < 1e-6);

        handle.drag(Hand::Right, &origin);
        let events = handle.base_mut().drain_events();
        assert!(!events.is_empty());
    }

    #[test]
    fn scroll_accelerates_and_clamps_radius() {
        let mut handle = SphereHandle::new();
        handle.begin_drag(Hand::Left, Vec3::new(0.0, 0.0, 1.0), 1.0, 0.0);
        let dt = 1.0 / 60.0;

        handle.scroll(1.0, dt);
        let rate_after_one = handle.scroll_rate;
        assert!(rate_after_one > INITIAL_SCROLL_RATE);
        assert!(handle.radius() > 1.0);

        handle.scroll(0.1, dt);
        assert_eq!(handle.scroll_rate, INITIAL_SCROLL_RATE);

        handle.scroll(-10.0, 1.0);
        handle.scroll(-10.0, 1.0);
        assert_eq!(handle.radius(), 0.0, "radius never goes negative");
    }

    #[test]
    fn scroll_ignored_while_not_dragging() {
        let mut handle = SphereHandle::new();
        handle.scroll(1.0, 1.0 / 60.0);
        assert_eq!(handle.radius(), 0.0);
    }
}
