use crate::math::{self, Pose};
use glam::{Quat, Vec3};

/// A critically-damped scalar transition occupying one effect slot. Advanced
/// cooperatively by `update(dt)` each frame; self-terminates once elapsed
/// time reaches the target duration.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    current: f32,
    target: f32,
    velocity: f32,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    pub fn new(current: f32, target: f32, duration: f32) -> Self {
        Self { current, target, velocity: 0.0, elapsed: 0.0, duration }
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        if self.finished() {
            self.current = self.target;
        } else {
            self.current =
                math::smooth_damp(self.current, self.target, &mut self.velocity, self.duration, f32::INFINITY, dt);
        }
        self.current
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.current
    }
}

/// Linear alpha crossfade toward a target over a fixed duration. A zero
/// duration snaps immediately.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
}

impl Fade {
    pub fn new(start: f32, target: f32, duration: f32) -> Self {
        Self { start, target, elapsed: 0.0, duration }
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            self.target
        } else {
            math::lerp(self.start, self.target, self.elapsed / self.duration)
        }
    }

    pub fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

/// Local placement the host applies to a frame handle or icon node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Quat::IDENTITY, scale: Vec3::ONE }
    }
}

/// The nine frame handles around the panel rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHandle {
    Left,
    Right,
    Back,
    FrontTop,
    FrontBottom,
    FrontLeft,
    FrontRight,
    FrontLeftCorner,
    FrontRightCorner,
}

impl FrameHandle {
    pub const ALL: [FrameHandle; 9] = [
        FrameHandle::Left,
        FrameHandle::Right,
        FrameHandle::Back,
        FrameHandle::FrontTop,
        FrameHandle::FrontBottom,
        FrameHandle::FrontLeft,
        FrameHandle::FrontRight,
        FrameHandle::FrontLeftCorner,
        FrameHandle::FrontRightCorner,
    ];

    pub fn index(self) -> usize {
        match self {
            FrameHandle::Left => 0,
            FrameHandle::Right => 1,
            FrameHandle::Back => 2,
            FrameHandle::FrontTop => 3,
            FrameHandle::FrontBottom => 4,
            FrameHandle::FrontLeft => 5,
            FrameHandle::FrontRight => 6,
            FrameHandle::FrontLeftCorner => 7,
            FrameHandle::FrontRightCorner => 8,
        }
    }
}

/// Alpha and follow position of one directional resize icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconVisual {
    pub alpha: f32,
    pub position: Vec3,
}

/// Shader inputs for the frosted top face.
#[derive(Debug, Clone, Copy)]
pub struct TopFaceMaterial {
    pub blur: f32,
    pub vertical_offset: f32,
    pub alpha: f32,
}

impl Default for TopFaceMaterial {
    fn default() -> Self {
        Self { blur: 0.0, vertical_offset: 0.0, alpha: 1.0 }
    }
}

/// The construction-time blur reveal: the top face starts blurred, lifted
/// and translucent, then settles over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct BlurReveal {
    blur: f32,
    rest_blur: f32,
    velocity: f32,
    elapsed: f32,
    duration: f32,
}

impl BlurReveal {
    pub const MAX_BLUR: f32 = 10.0;
    pub const DURATION: f32 = 1.25;

    pub fn new(rest_blur: f32) -> Self {
        Self {
            blur: Self::MAX_BLUR,
            rest_blur,
            velocity: 0.0,
            elapsed: 0.0,
            duration: Self::DURATION,
        }
    }

    pub fn start_material(&self) -> TopFaceMaterial {
        TopFaceMaterial { blur: Self::MAX_BLUR, vertical_offset: 1.0, alpha: 0.5 }
    }

    pub fn update(&mut self, dt: f32) -> TopFaceMaterial {
        self.elapsed += dt;
        if self.finished() {
            return TopFaceMaterial { blur: self.rest_blur, vertical_offset: 0.0, alpha: 1.0 };
        }
        self.blur =
            math::smooth_damp(self.blur, self.rest_blur, &mut self.velocity, self.duration, f32::INFINITY, dt);
        let complete = self.elapsed / self.duration;
        TopFaceMaterial {
            blur: self.blur,
            vertical_offset: 1.0 - complete,
            alpha: complete * 0.5 + 0.5,
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Everything the host render layer reads back from the workspace: blend
/// weights, handle/icon placements, container scales, top-face shader state.
/// Plain data; recomputed from bounds, classifier output and drag state.
#[derive(Debug, Clone)]
pub struct WorkspaceVisuals {
    pub width_blend: f32,
    pub depth_blend: f32,
    pub thin_frame_blend: f32,
    pub angled_face_blend: f32,
    pub reveal_compensation_blend: f32,
    pub front_panel_rotation: Quat,
    pub front_panel_position: Vec3,
    pub content_container_width: f32,
    pub content_container_z: f32,
    pub front_face_scale: Vec3,
    pub front_face_highlight_scale: Vec3,
    pub top_face_scale: Vec3,
    pub top_highlight_scale: Vec3,
    pub top_panel_divider: Option<Placement>,
    pub top_highlight_visible: bool,
    pub front_highlight_visible: bool,
    pub handles: [Placement; 9],
    pub icons: [IconVisual; 8],
    pub top_face: TopFaceMaterial,
}

impl Default for WorkspaceVisuals {
    fn default() -> Self {
        Self {
            width_blend: 0.0,
            depth_blend: 0.0,
            thin_frame_blend: 50.0,
            angled_face_blend: 0.0,
            reveal_compensation_blend: 0.0,
            front_panel_rotation: Quat::IDENTITY,
            front_panel_position: Vec3::ZERO,
            content_container_width: 0.0,
            content_container_z: 0.0,
            front_face_scale: Vec3::ONE,
            front_face_highlight_scale: Vec3::ONE,
            top_face_scale: Vec3::ONE,
            top_highlight_scale: Vec3::ONE,
            top_panel_divider: None,
            top_highlight_visible: false,
            front_highlight_visible: false,
            handles: [Placement::default(); 9],
            icons: [IconVisual::default(); 8],
            top_face: TopFaceMaterial::default(),
        }
    }
}

/// Critically-damped pose follower the host registers on the panel; the
/// panel suspends these while a drag is active so the panel tracks the hand
/// rigidly instead of lagging behind.
#[derive(Debug, Clone, Copy)]
pub struct SmoothMotion {
    pub smooth_position: bool,
    pub smooth_rotation: bool,
    pub enabled: bool,
    pose: Pose,
    velocity: Vec3,
    tightening: f32,
}

impl SmoothMotion {
    pub const DEFAULT_TIGHTENING: f32 = 20.0;

    pub fn new(pose: Pose) -> Self {
        Self {
            smooth_position: true,
            smooth_rotation: true,
            enabled: true,
            pose,
            velocity: Vec3::ZERO,
            tightening: Self::DEFAULT_TIGHTENING,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn snap_to(&mut self, target: Pose) {
        self.pose = target;
        self.velocity = Vec3::ZERO;
    }

    pub fn update(&mut self, target: Pose, dt: f32) -> Pose {
        if !self.enabled {
            return self.pose;
        }
        let t = math::clamp01(self.tightening * dt);
        if self.smooth_position {
            self.pose.position = math::smooth_damp_vec3(
                self.pose.position,
                target.position,
                &mut self.velocity,
                1.0 / self.tightening,
                f32::INFINITY,
                dt,
            );
        } else {
            self.pose.position = target.position;
        }
        if self.smooth_rotation {
            self.pose.rotation = self.pose.rotation.slerp(target.rotation, t);
        } else {
            self.pose.rotation = target.rotation;
        }
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_reaches_target_within_duration() {
        let mut transition = Transition::new(50.0, 0.0, 0.25);
        let dt = 1.0 / 90.0;
        let mut steps = 0;
        while !transition.finished() {
            transition.update(dt);
            steps += 1;
            assert!(steps < 60, "transition failed to terminate");
        }
        assert!((transition.update(dt) - 0.0).abs() < 1e-3);
    }

    #[test]
    fn fade_is_linear_and_snaps_on_zero_duration() {
        let mut fade = Fade::new(0.0, 0.75, 0.2);
        let half = fade.update(0.1);
        assert!((half - 0.375).abs() < 1e-4);
        fade.update(0.1);
        assert!(fade.finished());
        assert!((fade.value() - 0.75).abs() < 1e-5);

        let instant = Fade::new(1.0, 0.0, 0.0);
        assert!(instant.finished());
        assert_eq!(instant.value(), 0.0);
    }

    #[test]
    fn blur_reveal_settles_to_rest_values() {
        let mut reveal = BlurReveal::new(1.5);
        let dt = 1.0 / 60.0;
        let mut material = reveal.start_material();
        assert_eq!(material.blur, BlurReveal::MAX_BLUR);
        while !reveal.finished() {
            material = reveal.update(dt);
        }
        assert!((material.blur - 1.5).abs() < 1e-3);
        assert!((material.vertical_offset).abs() < 1e-5);
        assert!((material.alpha - 1.0).abs() < 1e-5);
    }

    #[test]
    fn suspended_follower_holds_position() {
        let mut motion = SmoothMotion::new(Pose::IDENTITY);
        motion.enabled = false;
        let target = Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
        let pose = motion.update(target, 0.1);
        assert_eq!(pose.position, Vec3::ZERO);

        motion.enabled = true;
        let pose = motion.update(target, 0.1);
        assert!(pose.position.x > 0.0);
    }
}
