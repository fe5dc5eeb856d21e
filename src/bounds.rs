use glam::Vec3;

/// Axis-aligned box in panel-local space; the single source of truth for the
/// workspace panel's footprint and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub size: Vec3,
}

impl Bounds {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    pub fn extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let delta = point - self.center;
        let extents = self.extents();
        delta.x.abs() <= extents.x && delta.y.abs() <= extents.y && delta.z.abs() <= extents.z
    }

    /// Copy grown toward the front (-Z) by `offset`, covering the sloped
    /// front face when the panel is pitched.
    pub fn expanded_front(&self, offset: f32) -> Bounds {
        Bounds {
            center: self.center - Vec3::Z * offset * 0.5,
            size: self.size + Vec3::Z * offset,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { center: Vec3::ZERO, size: Vec3::ZERO }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_extents() {
        let bounds = Bounds::new(Vec3::ZERO, Vec3::new(1.0, 0.5, 2.0));
        assert!(bounds.contains(Vec3::new(0.49, 0.0, -0.99)));
        assert!(!bounds.contains(Vec3::new(0.51, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.3, 0.0)));
    }

    #[test]
    fn front_expansion_only_grows_toward_front() {
        let bounds = Bounds::new(Vec3::ZERO, Vec3::new(1.0, 0.5, 1.0));
        let expanded = bounds.expanded_front(0.2);
        assert!(expanded.contains(Vec3::new(0.0, 0.0, -0.65)));
        assert!(!expanded.contains(Vec3::new(0.0, 0.0, 0.55)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.0, -0.65)));
    }
}
