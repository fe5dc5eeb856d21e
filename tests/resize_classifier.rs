use glam::Vec3;
use spatial_widgets::bounds::Bounds;
use spatial_widgets::resize::{classify, ResizeDirection, ResizeIcon};

const CORNER: f32 = 0.05;

fn bounds() -> Bounds {
    Bounds::new(Vec3::new(0.0, -0.05, 0.0), Vec3::new(1.2, 0.1, 0.8))
}

#[test]
fn interior_away_from_margins_is_a_single_cardinal() {
    let bounds = bounds();
    let extents = bounds.extents();
    let mut x = -extents.x + CORNER + 0.01;
    while x < extents.x - CORNER {
        let mut z = -extents.z + CORNER + 0.01;
        while z < extents.z - CORNER {
            let direction = classify(&bounds, 0.0, CORNER, Vec3::new(x, 0.0, z));
            let expected = if z > 0.0 { ResizeDirection::BACK } else { ResizeDirection::FRONT };
            assert_eq!(direction, expected, "at ({x}, {z})");
            z += 0.03;
        }
        x += 0.03;
    }
}

#[test]
fn both_margins_give_the_matching_corner() {
    let bounds = bounds();
    let extents = bounds.extents();
    let inset = CORNER * 0.5;
    let cases = [
        (extents.x - inset, -extents.z + inset, ResizeDirection::FRONT | ResizeDirection::RIGHT),
        (-extents.x + inset, -extents.z + inset, ResizeDirection::FRONT | ResizeDirection::LEFT),
        (extents.x - inset, extents.z - inset, ResizeDirection::BACK | ResizeDirection::RIGHT),
        (-extents.x + inset, extents.z - inset, ResizeDirection::BACK | ResizeDirection::LEFT),
    ];
    for (x, z, expected) in cases {
        assert_eq!(classify(&bounds, 0.0, CORNER, Vec3::new(x, 0.0, z)), expected);
    }
}

#[test]
fn opposite_edges_never_combine() {
    let bounds = bounds();
    let extents = bounds.extents();
    for front_offset in [0.0, 0.05, 0.1] {
        let mut x = -extents.x - 0.1;
        while x <= extents.x + 0.1 {
            let mut z = -extents.z - 0.2;
            while z <= extents.z + 0.1 {
                let direction = classify(&bounds, front_offset, CORNER, Vec3::new(x, 0.0, z));
                assert!(
                    !direction.contains(ResizeDirection::FRONT | ResizeDirection::BACK),
                    "front+back at ({x}, {z}) offset {front_offset}"
                );
                assert!(
                    !direction.contains(ResizeDirection::LEFT | ResizeDirection::RIGHT),
                    "left+right at ({x}, {z}) offset {front_offset}"
                );
                assert!(!direction.is_empty());
                z += 0.017;
            }
            x += 0.017;
        }
    }
}

// The collapse is asymmetric on purpose: a lone X-margin hit becomes a pure
// left/right edge, a lone Z-margin hit stays front/back.
#[test]
fn x_margin_collapse_beats_z_primary() {
    let bounds = bounds();
    let extents = bounds.extents();
    let near_x = extents.x - CORNER * 0.5;
    let mid_z = 0.1;
    assert_eq!(classify(&bounds, 0.0, CORNER, Vec3::new(near_x, 0.0, mid_z)), ResizeDirection::RIGHT);
    assert_eq!(classify(&bounds, 0.0, CORNER, Vec3::new(-near_x, 0.0, mid_z)), ResizeDirection::LEFT);

    let near_z = extents.z - CORNER * 0.5;
    let mid_x = 0.1;
    assert_eq!(classify(&bounds, 0.0, CORNER, Vec3::new(mid_x, 0.0, near_z)), ResizeDirection::BACK);
    assert_eq!(classify(&bounds, 0.0, CORNER, Vec3::new(mid_x, 0.0, -near_z)), ResizeDirection::FRONT);
}

#[test]
fn every_valid_direction_has_an_icon() {
    let directions = [
        ResizeDirection::FRONT,
        ResizeDirection::BACK,
        ResizeDirection::LEFT,
        ResizeDirection::RIGHT,
        ResizeDirection::FRONT | ResizeDirection::LEFT,
        ResizeDirection::FRONT | ResizeDirection::RIGHT,
        ResizeDirection::BACK | ResizeDirection::LEFT,
        ResizeDirection::BACK | ResizeDirection::RIGHT,
    ];
    let mut icons: Vec<ResizeIcon> = directions.iter().map(|&d| ResizeIcon::for_direction(d)).collect();
    icons.sort_by_key(|icon| icon.index());
    icons.dedup();
    assert_eq!(icons.len(), 8, "each direction maps to a distinct icon");
}
