use glam::{Quat, Vec3};

pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * clamp01(t)
}

/// Shortest signed angular distance from `current` to `target`, in degrees.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Triangle-wave oscillation of `t` between 0 and `length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let t = t.rem_euclid(length * 2.0);
    length - (t - length).abs()
}

/// Critically-damped spring toward `target`. Tracks velocity across calls so
/// repeated updates converge without overshoot, even under large `dt` spikes.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, max_speed: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let mut change = current - target;
    let original_target = target;
    let max_change = max_speed * smooth_time;
    change = change.clamp(-max_change, max_change);
    let target = current - change;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;
    // Overshoot clamp
    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = (output - original_target) / dt.max(0.0001);
    }
    output
}

pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    Vec3::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, max_speed, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, max_speed, dt),
        smooth_damp(current.z, target.z, &mut velocity.z, smooth_time, max_speed, dt),
    )
}

/// A rigid world-space pose. `forward` is the rotated +Z axis; the panel's
/// front edge lies toward local -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose { position: Vec3::ZERO, rotation: Quat::IDENTITY };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position)
    }

    /// Rigid offset of `other` expressed in this pose's frame, such that
    /// `apply_offset` reproduces `other` from this pose.
    pub fn offset_to(&self, other: &Pose) -> (Vec3, Quat) {
        let inverse = self.rotation.inverse();
        (inverse * (other.position - self.position), inverse * other.rotation)
    }

    pub fn apply_offset(&self, position_offset: Vec3, rotation_offset: Quat) -> Pose {
        Pose {
            position: self.position + self.rotation * position_offset,
            rotation: self.rotation * rotation_offset,
        }
    }

    /// Rotation about the world X axis, in degrees normalized to [0, 360).
    pub fn x_rotation_degrees(&self) -> f32 {
        let (_, x, _) = self.rotation.to_euler(glam::EulerRot::YXZ);
        let degrees = x.to_degrees();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }
}
