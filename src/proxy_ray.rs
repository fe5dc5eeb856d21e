use crate::config::ProxyRayConfig;
use crate::math::Pose;
use crate::visuals::Transition;
use glam::Vec3;

/// Opaque token identifying the current lock owner of a proxy ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockToken(pub u64);

/// Visual state of one hand's pointer ray: an animated line plus a cone at
/// the origin and a tip at the far end. Show/hide are animated through one
/// transition slot each; a lock owner can pin the current visibility.
pub struct ProxyRay {
    config: ProxyRayConfig,
    ray_visible: bool,
    cone_visible: bool,
    // Unscaled width the transitions animate; the rendered pair picks up
    // viewer scale and the taper toward the tip.
    width: f32,
    rendered_width: (f32, f32),
    cone_scale: f32,
    tip_scale: f32,
    tip_position: Vec3,
    color: [f32; 4],
    lock_owner: Option<LockToken>,
    ray_transition: Option<Transition>,
    cone_transition: Option<Transition>,
}

impl ProxyRay {
    pub fn new(config: ProxyRayConfig) -> Self {
        Self {
            width: config.line_width,
            rendered_width: (config.line_width, config.line_width),
            ray_visible: true,
            cone_visible: true,
            cone_scale: 1.0,
            tip_scale: 1.0,
            tip_position: Vec3::ZERO,
            color: [1.0, 1.0, 1.0, 1.0],
            lock_owner: None,
            ray_transition: None,
            cone_transition: None,
            config,
        }
    }

    pub fn ray_visible(&self) -> bool {
        self.ray_visible
    }

    pub fn cone_visible(&self) -> bool {
        self.cone_visible
    }

    pub fn line_width(&self) -> (f32, f32) {
        self.rendered_width
    }

    pub fn cone_scale(&self) -> f32 {
        self.cone_scale
    }

    pub fn tip_scale(&self) -> f32 {
        self.tip_scale
    }

    pub fn tip_position(&self) -> Vec3 {
        self.tip_position
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Length of the direct selection pointer, following the cone as it
    /// animates in and out.
    pub fn pointer_length(&self) -> f32 {
        self.config.cone_length * self.cone_scale
    }

    /// Take show/hide ownership. Succeeds only while unowned; a non-owning
    /// caller's later show/hide calls become no-ops.
    pub fn lock(&mut self, caller: LockToken) -> bool {
        if self.lock_owner.is_none() {
            self.lock_owner = Some(caller);
            true
        } else {
            false
        }
    }

    /// Release ownership; only the locking caller may unlock.
    pub fn unlock(&mut self, caller: LockToken) -> bool {
        if self.lock_owner == Some(caller) {
            self.lock_owner = None;
            true
        } else {
            false
        }
    }

    pub fn hide(&mut self, ray_only: bool) {
        if self.lock_owner.is_some() {
            return;
        }

        if self.ray_visible {
            self.ray_visible = false;
            self.tip_scale = 0.0;
            self.ray_transition = Some(Transition::new(self.width, 0.0, self.config.hide_smooth_time));
        }

        if !ray_only && self.cone_visible {
            self.cone_visible = false;
            self.cone_transition = Some(Transition::new(self.cone_scale, 0.0, self.config.hide_smooth_time));
        }
    }

    pub fn show(&mut self, ray_only: bool) {
        if self.lock_owner.is_some() {
            return;
        }

        if !self.ray_visible {
            self.ray_visible = true;
            self.tip_scale = 1.0;
            self.ray_transition =
                Some(Transition::new(self.width, self.config.line_width, self.config.show_smooth_time));
        }

        if !ray_only && !self.cone_visible {
            self.cone_visible = true;
            self.cone_transition = Some(Transition::new(self.cone_scale, 1.0, self.config.show_smooth_time));
        }
    }

    /// Point the ray at a target `length` away. Width is scaled up with the
    /// viewer and the rendered length down by it, so the ray reads the same
    /// at any working scale. Ignored while hidden.
    pub fn set_length(&mut self, origin: &Pose, length: f32, viewer_scale: f32) {
        if !self.ray_visible {
            return;
        }

        let scaled_width = self.width * viewer_scale;
        let scaled_length = length / viewer_scale;
        self.rendered_width = (scaled_width, scaled_width * scaled_length);
        self.tip_position = origin.position + origin.forward() * length;
        self.tip_scale = scaled_length;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(mut transition) = self.ray_transition.take() {
            self.width = transition.update(dt);
            self.rendered_width = (self.width, self.width);
            if !transition.finished() {
                self.ray_transition = Some(transition);
            }
        }

        if let Some(mut transition) = self.cone_transition.take() {
            self.cone_scale = transition.update(dt);
            if !transition.finished() {
                self.cone_transition = Some(transition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxyRayConfig;

    fn ray() -> ProxyRay {
        ProxyRay::new(ProxyRayConfig::default())
    }

    #[test]
    fn hide_and_show_animate_the_line_width() {
        let mut ray = ray();
        let rest_width = ProxyRayConfig::default().line_width;
        ray.hide(false);
        assert!(!ray.ray_visible());
        assert!(!ray.cone_visible());
        assert_eq!(ray.tip_scale(), 0.0);
        for _ in 0..30 {
            ray.update(1.0 / 60.0);
        }
        assert!(ray.line_width().0 < 1e-6);
        assert!(ray.cone_scale() < 1e-5);

        ray.show(true);
        assert!(ray.ray_visible());
        assert!(!ray.cone_visible(), "ray-only show leaves the cone hidden");
        for _ in 0..60 {
            ray.update(1.0 / 60.0);
        }
        assert!((ray.line_width().0 - rest_width).abs() < 1e-6);
    }

    #[test]
    fn repeated_show_does_not_restart_the_slot() {
        let mut ray = ray();
        ray.hide(false);
        ray.show(false);
        ray.update(1.0 / 60.0);
        let mid = ray.cone_scale();
        ray.show(false);
        ray.update(1.0 / 60.0);
        assert!(ray.cone_scale() >= mid, "second show is a no-op while already visible");
    }

    #[test]
    fn pointer_length_follows_cone_scale() {
        let mut ray = ray();
        let full = ray.pointer_length();
        assert!((full - ProxyRayConfig::default().cone_length).abs() < 1e-6);
        ray.hide(false);
        for _ in 0..30 {
            ray.update(1.0 / 60.0);
        }
        assert!(ray.pointer_length() < full * 0.01);
    }
}
