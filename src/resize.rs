use crate::bounds::Bounds;
use bitflags::bitflags;
use glam::Vec3;

bitflags! {
    /// Which edge or corner of the panel a pointer is nearest. Valid values
    /// are single edges or adjacent pairs forming a corner; the classifier
    /// never produces FRONT|BACK or LEFT|RIGHT.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeDirection: u8 {
        const FRONT = 1;
        const BACK = 2;
        const LEFT = 4;
        const RIGHT = 8;
    }
}

impl ResizeDirection {
    pub fn label(self) -> &'static str {
        match self {
            d if d == ResizeDirection::BACK => "back",
            d if d == ResizeDirection::LEFT => "left",
            d if d == ResizeDirection::RIGHT => "right",
            d if d == ResizeDirection::FRONT | ResizeDirection::LEFT => "front-left",
            d if d == ResizeDirection::FRONT | ResizeDirection::RIGHT => "front-right",
            d if d == ResizeDirection::BACK | ResizeDirection::LEFT => "back-left",
            d if d == ResizeDirection::BACK | ResizeDirection::RIGHT => "back-right",
            _ => "front",
        }
    }
}

/// Classify a panel-local pointer position into a resize direction.
///
/// `front_z_offset` is the extra reach of the sloped front face while the
/// panel is pitched; it widens the front margin only. The corner collapse is
/// deliberately asymmetric: a near X edge alone collapses to left/right,
/// while a near Z edge alone keeps the primary front/back direction.
pub fn classify(bounds: &Bounds, front_z_offset: f32, corner_size: f32, local: Vec3) -> ResizeDirection {
    let primary = if local.z > 0.0 { ResizeDirection::BACK } else { ResizeDirection::FRONT };
    let secondary = if local.x > 0.0 { ResizeDirection::RIGHT } else { ResizeDirection::LEFT };

    let extents = bounds.extents();
    let mut z_distance = extents.z - local.z.abs();
    if local.z < 0.0 {
        z_distance += front_z_offset;
    }
    let corner_z = z_distance < corner_size;
    let corner_x = extents.x - local.x.abs() < corner_size;

    if corner_z && corner_x {
        primary | secondary
    } else if corner_x {
        secondary
    } else {
        primary
    }
}

/// The eight directional feedback icons around the panel rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeIcon {
    Front,
    Back,
    Left,
    Right,
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl ResizeIcon {
    pub const ALL: [ResizeIcon; 8] = [
        ResizeIcon::Front,
        ResizeIcon::Back,
        ResizeIcon::Left,
        ResizeIcon::Right,
        ResizeIcon::FrontLeft,
        ResizeIcon::FrontRight,
        ResizeIcon::BackLeft,
        ResizeIcon::BackRight,
    ];

    pub fn index(self) -> usize {
        match self {
            ResizeIcon::Front => 0,
            ResizeIcon::Back => 1,
            ResizeIcon::Left => 2,
            ResizeIcon::Right => 3,
            ResizeIcon::FrontLeft => 4,
            ResizeIcon::FrontRight => 5,
            ResizeIcon::BackLeft => 6,
            ResizeIcon::BackRight => 7,
        }
    }

    pub fn for_direction(direction: ResizeDirection) -> ResizeIcon {
        match direction {
            d if d == ResizeDirection::BACK => ResizeIcon::Back,
            d if d == ResizeDirection::LEFT => ResizeIcon::Left,
            d if d == ResizeDirection::RIGHT => ResizeIcon::Right,
            d if d == ResizeDirection::FRONT | ResizeDirection::LEFT => ResizeIcon::FrontLeft,
            d if d == ResizeDirection::FRONT | ResizeDirection::RIGHT => ResizeIcon::FrontRight,
            d if d == ResizeDirection::BACK | ResizeDirection::LEFT => ResizeIcon::BackLeft,
            d if d == ResizeDirection::BACK | ResizeDirection::RIGHT => ResizeIcon::BackRight,
            _ => ResizeIcon::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_bounds() -> Bounds {
        Bounds::new(Vec3::ZERO, Vec3::new(1.0, 0.1, 1.0))
    }

    #[test]
    fn interior_positions_classify_as_front_or_back() {
        let bounds = panel_bounds();
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(0.0, 0.0, -0.1)), ResizeDirection::FRONT);
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(0.0, 0.0, 0.1)), ResizeDirection::BACK);
    }

    #[test]
    fn near_x_edge_collapses_to_secondary_axis() {
        let bounds = panel_bounds();
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(0.48, 0.0, 0.1)), ResizeDirection::RIGHT);
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(-0.48, 0.0, -0.1)), ResizeDirection::LEFT);
    }

    #[test]
    fn near_both_edges_forms_a_corner() {
        let bounds = panel_bounds();
        assert_eq!(
            classify(&bounds, 0.0, 0.05, Vec3::new(0.48, 0.0, -0.48)),
            ResizeDirection::FRONT | ResizeDirection::RIGHT
        );
        assert_eq!(
            classify(&bounds, 0.0, 0.05, Vec3::new(-0.48, 0.0, 0.48)),
            ResizeDirection::BACK | ResizeDirection::LEFT
        );
    }

    #[test]
    fn near_z_edge_alone_keeps_primary_axis() {
        // Asymmetric on purpose: a lone Z-margin hit stays front/back.
        let bounds = panel_bounds();
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(0.0, 0.0, 0.48)), ResizeDirection::BACK);
        assert_eq!(classify(&bounds, 0.0, 0.05, Vec3::new(0.0, 0.0, -0.48)), ResizeDirection::FRONT);
    }

    #[test]
    fn front_offset_moves_front_corner_band_outward() {
        let bounds = panel_bounds();
        // A plain front-right corner stops being one once the sloped face
        // pushes the effective front edge outward...
        let local = Vec3::new(0.48, 0.0, -0.48);
        assert_eq!(
            classify(&bounds, 0.0, 0.05, local),
            ResizeDirection::FRONT | ResizeDirection::RIGHT
        );
        assert_eq!(classify(&bounds, 0.1, 0.05, local), ResizeDirection::RIGHT);
        // ...and the corner band follows the extended edge.
        assert_eq!(
            classify(&bounds, 0.1, 0.05, Vec3::new(0.48, 0.0, -0.57)),
            ResizeDirection::FRONT | ResizeDirection::RIGHT
        );
        // The back margin is unaffected.
        assert_eq!(
            classify(&bounds, 0.1, 0.05, Vec3::new(0.48, 0.0, 0.48)),
            ResizeDirection::BACK | ResizeDirection::RIGHT
        );
    }

    #[test]
    fn icon_lookup_defaults_to_front() {
        assert_eq!(ResizeIcon::for_direction(ResizeDirection::FRONT), ResizeIcon::Front);
        assert_eq!(ResizeIcon::for_direction(ResizeDirection::empty()), ResizeIcon::Front);
        assert_eq!(
            ResizeIcon::for_direction(ResizeDirection::BACK | ResizeDirection::RIGHT),
            ResizeIcon::BackRight
        );
    }
}
