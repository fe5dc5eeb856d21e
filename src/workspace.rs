use crate::bounds::Bounds;
use crate::config::WorkspaceConfig;
use crate::events::{EventBus, WidgetEvent};
use crate::input::{Control, WorkspaceInput};
use crate::math::{self, Pose};
use crate::resize::{self, ResizeDirection, ResizeIcon};
use crate::rig::{Hand, PointerResolver};
use crate::visuals::{
    BlurReveal, Fade, FrameHandle, Placement, SmoothMotion, Transition, WorkspaceVisuals,
};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

const VISIBLE_ICON_OPACITY: f32 = 0.75;

const FACE_MARGIN: f32 = 0.025;
const HIGHLIGHT_MARGIN: f32 = 0.001;
const FRONT_FACE_HIGHLIGHT_MARGIN: f32 = 0.0008;
const TOP_HIGHLIGHT_MARGIN: f32 = 0.0005;

const THICK_FRAME_BLEND: f32 = 0.0;
const THIN_FRAME_BLEND: f32 = 50.0;
const FRAME_THICKNESS_DURATION: f32 = 0.25;
const TOP_FACE_SHOW_DURATION: f32 = 0.35;
const TOP_FACE_HIDE_DURATION: f32 = 0.2;

// Blend shapes cap at 100, so the frame maxes out around 100m wide.
const WIDTH_BLEND_MULTIPLIER: f32 = 0.9616;
const DEPTH_BLEND_MULTIPLIER: f32 = 0.99385;
const WIDTH_BLEND_OFFSET: f32 = -0.165;
const DEPTH_BLEND_OFFSET: f32 = -0.038;

// Lerp values are padded so the front face reveal reaches its target sooner.
const LERP_PADDING: f32 = 1.2;
const CORRECTIVE_REVEAL_MULTIPLIER: f32 = 1.85;
const FRONT_PANEL_LERP_PADDING: f32 = 1.1;
const FRONT_PANEL_Y_OFFSET: f32 = 0.03;
const FRONT_PANEL_Z_START_OFFSET: f32 = 0.0084;
const FRONT_PANEL_Z_END_OFFSET: f32 = -0.05;
const FRONT_HANDLE_LERP_SCALE: f32 = 1.15;

#[derive(Debug, Clone, Copy)]
enum DragKind {
    Resize {
        pointer_start: Vec3,
        position_start: Vec3,
        size_start: Vec3,
        direction: ResizeDirection,
    },
    Move {
        position_offset: Vec3,
        rotation_offset: Quat,
    },
}

/// One in-progress move or resize, tied to exactly one hand. Snapshots are
/// taken at drag start; the resize direction never re-classifies mid-drag.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    hand: Hand,
    kind: DragKind,
}

impl DragState {
    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn resizing(&self) -> bool {
        matches!(self.kind, DragKind::Resize { .. })
    }

    pub fn direction(&self) -> Option<ResizeDirection> {
        match self.kind {
            DragKind::Resize { direction, .. } => Some(direction),
            DragKind::Move { .. } => None,
        }
    }
}

/// The resizable workspace panel: bounds model, drag state machine, input
/// arbitration and the visual state the host render layer consumes.
pub struct WorkspacePanel {
    config: WorkspaceConfig,
    pose: Pose,
    bounds: Bounds,
    prevent_resize: bool,
    dynamic_face_adjustment: bool,
    lerp_amount: f32,
    front_z_offset: f32,
    previous_x_rotation: f32,
    drag: Option<DragState>,
    hovering: SmallVec<[Hand; 2]>,
    last_icons: [Option<ResizeIcon>; 2],
    top_panel_divider_offset: Option<f32>,
    visuals: WorkspaceVisuals,
    frame_thickness: Option<Transition>,
    top_face_alpha: Option<Transition>,
    blur_reveal: Option<BlurReveal>,
    icon_fades: [Option<Fade>; 8],
    smooth_motions: Vec<SmoothMotion>,
    events: EventBus,
}

impl WorkspacePanel {
    pub fn new(config: WorkspaceConfig) -> Self {
        let reveal = BlurReveal::new(0.0);
        let mut visuals = WorkspaceVisuals::default();
        visuals.top_face = reveal.start_material();
        let mut panel = Self {
            pose: Pose::IDENTITY,
            bounds: Bounds::default(),
            prevent_resize: false,
            dynamic_face_adjustment: config.dynamic_face_adjustment,
            lerp_amount: 0.0,
            front_z_offset: 0.0,
            previous_x_rotation: 0.0,
            drag: None,
            hovering: SmallVec::new(),
            last_icons: [None; 2],
            top_panel_divider_offset: None,
            visuals,
            frame_thickness: None,
            top_face_alpha: None,
            blur_reveal: Some(reveal),
            icon_fades: [None; 8],
            smooth_motions: Vec::new(),
            events: EventBus::default(),
            config,
        };
        let initial = Bounds::new(
            Vec3::ZERO,
            Vec3::new(panel.config.min_panel_width, 0.0, panel.config.min_panel_depth),
        );
        panel.set_bounds(initial);
        panel
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn visuals(&self) -> &WorkspaceVisuals {
        &self.visuals
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn hovering(&self) -> &[Hand] {
        &self.hovering
    }

    pub fn front_z_offset(&self) -> f32 {
        self.front_z_offset
    }

    pub fn set_prevent_resize(&mut self, prevent: bool) {
        self.prevent_resize = prevent;
    }

    pub fn set_dynamic_face_adjustment(&mut self, enabled: bool) {
        self.dynamic_face_adjustment = enabled;
    }

    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.events.drain()
    }

    /// Assign new bounds. The center and height are pinned: the panel's frame
    /// height never follows width/depth edits, and width/depth are clamped to
    /// the configured minimum.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.bounds.center = Vec3::NEG_Y * self.config.frame_height * 0.5;

        let mut size = self.bounds.size;
        size.x = size.x.max(self.config.min_panel_width);
        size.z = size.z.max(self.config.min_panel_depth);
        size.y = self.config.frame_height + self.config.frame_handle_size;
        self.bounds.size = size;

        self.visuals.width_blend = size.x * WIDTH_BLEND_MULTIPLIER + WIDTH_BLEND_OFFSET;
        self.visuals.depth_blend = size.z * DEPTH_BLEND_MULTIPLIER + DEPTH_BLEND_OFFSET;

        let face_width = size.x - FACE_MARGIN;
        let face_depth = size.z - FACE_MARGIN;

        self.visuals.content_container_width = face_width;
        self.visuals.content_container_z = -self.bounds.extents().z;

        self.visuals.front_face_scale = Vec3::new(face_width, 1.0, 1.0);
        self.visuals.front_face_highlight_scale =
            Vec3::new(face_width + FRONT_FACE_HIGHLIGHT_MARGIN, 1.0, 1.0);

        self.visuals.top_panel_divider = self.top_panel_divider_offset.map(|offset| Placement {
            position: Vec3::new(size.x * 0.5 * offset, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(1.0, 1.0, face_depth + HIGHLIGHT_MARGIN),
        });

        self.visuals.top_highlight_scale =
            Vec3::new(face_width + TOP_HIGHLIGHT_MARGIN, 1.0, face_depth + TOP_HIGHLIGHT_MARGIN);
        self.visuals.top_face_scale = Vec3::new(face_width, 1.0, face_depth);

        self.adjust_handles_and_icons();
    }

    /// (-1 to 1) ranged X placement of the top panel's separator mask; unset
    /// leaves the divider hidden.
    pub fn set_top_panel_divider_offset(&mut self, offset: f32) {
        self.top_panel_divider_offset = Some(offset);
        let bounds = self.bounds;
        self.set_bounds(bounds);
    }

    pub fn set_highlights_visible(&mut self, visible: bool) {
        if self.visuals.top_highlight_visible == visible && self.visuals.front_highlight_visible == visible {
            return;
        }
        self.visuals.top_highlight_visible = visible;
        self.visuals.front_highlight_visible = visible;
        if visible {
            self.increase_frame_thickness();
        } else {
            self.reset_frame_thickness();
        }
    }

    pub fn set_front_highlight_visible(&mut self, visible: bool) {
        if self.visuals.front_highlight_visible == visible {
            return;
        }
        self.visuals.front_highlight_visible = visible;
        if visible {
            self.increase_frame_thickness();
        } else {
            self.reset_frame_thickness();
        }
    }

    /// Amplifying the top highlight hides the top face so the highlight reads
    /// through it; clearing brings the face back.
    pub fn set_amplify_top_highlight(&mut self, amplify: bool) {
        let (target, duration) = if amplify {
            (0.0, TOP_FACE_HIDE_DURATION)
        } else {
            (1.0, TOP_FACE_SHOW_DURATION)
        };
        self.top_face_alpha = Some(Transition::new(self.visuals.top_face.alpha, target, duration));
    }

    pub fn register_smooth_motion(&mut self, motion: SmoothMotion) -> usize {
        self.smooth_motions.push(motion);
        self.smooth_motions.len() - 1
    }

    pub fn smooth_motions(&self) -> &[SmoothMotion] {
        &self.smooth_motions
    }

    pub fn smooth_motion_mut(&mut self, index: usize) -> Option<&mut SmoothMotion> {
        self.smooth_motions.get_mut(index)
    }

    pub fn close_click(&mut self) {
        self.events.push(WidgetEvent::CloseClicked);
    }

    pub fn reset_size_click(&mut self) {
        self.events.push(WidgetEvent::ResetSizeClicked);
    }

    pub fn handle_hover_started(&mut self, hand: Hand) {
        if self.hovering.is_empty() && self.drag.is_none() {
            self.increase_frame_thickness();
        }
        self.hovering.push(hand);
        self.events.push(WidgetEvent::HoverStarted { hand });
    }

    pub fn handle_hover_ended(&mut self, hand: Hand) {
        if let Some(index) = self.hovering.iter().position(|&h| h == hand) {
            self.hovering.remove(index);
            if let Some(icon) = self.last_icons[hand.index()].take() {
                self.start_icon_fade(icon, 0.0);
            }
            self.events.push(WidgetEvent::HoverEnded { hand });
        }
        if self.hovering.is_empty() {
            self.reset_frame_thickness();
        }
    }

    pub fn resize_direction(&self, local: Vec3) -> ResizeDirection {
        resize::classify(&self.bounds, self.front_z_offset, self.config.resize_corner_size, local)
    }

    /// Per-frame tick: dynamic face adjustment plus every in-flight transition
    /// slot. Independent slots advance in no particular order; the latest
    /// start for a slot always wins.
    pub fn update(&mut self, dt: f32) {
        self.update_dynamic_face();

        if let Some(mut reveal) = self.blur_reveal.take() {
            self.visuals.top_face = reveal.update(dt);
            if !reveal.finished() {
                self.blur_reveal = Some(reveal);
            }
        }

        if let Some(mut transition) = self.frame_thickness.take() {
            self.visuals.thin_frame_blend = transition.update(dt);
            if !transition.finished() {
                self.frame_thickness = Some(transition);
            }
        }

        if let Some(mut transition) = self.top_face_alpha.take() {
            self.visuals.top_face.alpha = transition.update(dt);
            if !transition.finished() {
                self.top_face_alpha = Some(transition);
            }
        }

        for index in 0..self.icon_fades.len() {
            if let Some(mut fade) = self.icon_fades[index].take() {
                self.visuals.icons[index].alpha = fade.update(dt);
                if !fade.finished() {
                    self.icon_fades[index] = Some(fade);
                }
            }
        }
    }

    /// Arbitrate move/resize input for this frame. With no active drag, the
    /// first matching control wins in fixed scan order: left secondary, right
    /// secondary, then the hovering list for primary presses.
    pub fn process_input(
        &mut self,
        input: &mut WorkspaceInput,
        rig: &impl PointerResolver,
        viewer_scale: f32,
        dt: f32,
    ) {
        if self.drag.is_none() {
            let adjusted = self.bounds.expanded_front(self.front_z_offset);
            let mut claim: Option<(Hand, bool)> = None;

            for hand in Hand::BOTH {
                let control = Control::secondary(hand);
                if !input.just_pressed(control) {
                    continue;
                }
                let local = self.pose.inverse_transform_point(rig.pointer_position(hand));
                if adjusted.contains(local) {
                    input.consume(control);
                    claim = Some((hand, false));
                    break;
                }
            }

            if claim.is_none() {
                for index in 0..self.hovering.len() {
                    let hand = self.hovering[index];
                    if claim.is_none() && !self.prevent_resize && input.just_pressed(Control::primary(hand))
                    {
                        input.consume(Control::primary(hand));
                        claim = Some((hand, true));
                    }
                    if !self.prevent_resize {
                        self.update_icon_feedback(hand, rig, dt);
                    }
                }
            }

            if let Some((hand, resizing)) = claim {
                if let Some(icon) = self.last_icons[hand.index()] {
                    self.start_icon_fade(icon, 0.0);
                }
                self.reset_frame_thickness();
                for motion in &mut self.smooth_motions {
                    motion.enabled = false;
                }
                self.drag = Some(self.begin_drag(hand, resizing, rig));
                self.events.push(WidgetEvent::DragStarted { hand, resizing });
            }
        }

        if let Some(drag) = self.drag {
            let hand = drag.hand;
            let ended = match drag.kind {
                DragKind::Resize { .. } => input.just_released(Control::primary(hand)),
                DragKind::Move { .. } => input.just_released(Control::secondary(hand)),
            };
            if ended {
                self.drag = None;
                for motion in &mut self.smooth_motions {
                    motion.enabled = true;
                }
                if self.hovering.contains(&hand) {
                    let local = self.pose.inverse_transform_point(rig.pointer_position(hand));
                    let direction = self.resize_direction(local);
                    self.last_icons[hand.index()] = Some(ResizeIcon::for_direction(direction));
                }
                self.events.push(WidgetEvent::DragEnded { hand, resizing: drag.resizing() });
            } else {
                self.update_drag(drag, rig, viewer_scale);
            }
        }
    }

    fn begin_drag(&self, hand: Hand, resizing: bool, rig: &impl PointerResolver) -> DragState {
        if resizing {
            let pointer = rig.pointer_position(hand);
            let local = self.pose.inverse_transform_point(pointer);
            DragState {
                hand,
                kind: DragKind::Resize {
                    pointer_start: pointer,
                    position_start: self.pose.position,
                    size_start: self.bounds.size,
                    direction: self.resize_direction(local),
                },
            }
        } else {
            let origin = rig.ray_origin(hand);
            let (position_offset, rotation_offset) = origin.offset_to(&self.pose);
            DragState { hand, kind: DragKind::Move { position_offset, rotation_offset } }
        }
    }

    fn update_drag(&mut self, drag: DragState, rig: &impl PointerResolver, viewer_scale: f32) {
        match drag.kind {
            DragKind::Move { position_offset, rotation_offset } => {
                let origin = rig.ray_origin(drag.hand);
                self.pose = origin.apply_offset(position_offset, rotation_offset);
            }
            DragKind::Resize { pointer_start, position_start, size_start, direction } => {
                let pointer = rig.pointer_position(drag.hand);
                let drag_vector = (pointer - pointer_start) / viewer_scale;
                let forward = self.pose.forward();
                let right = self.pose.right();
                let forward_delta = drag_vector.dot(forward);
                let right_delta = drag_vector.dot(right);

                let mut offset_forward = forward_delta * 0.5;
                let mut offset_right = right_delta * 0.5;

                let mut size = size_start;
                match direction {
                    d if d == ResizeDirection::BACK => {
                        size.z += forward_delta;
                        offset_right = 0.0;
                    }
                    d if d == ResizeDirection::LEFT => {
                        size.x -= right_delta;
                        offset_forward = 0.0;
                    }
                    d if d == ResizeDirection::RIGHT => {
                        size.x += right_delta;
                        offset_forward = 0.0;
                    }
                    d if d == ResizeDirection::FRONT | ResizeDirection::LEFT => {
                        size.x -= right_delta;
                        size.z -= forward_delta;
                    }
                    d if d == ResizeDirection::FRONT | ResizeDirection::RIGHT => {
                        size.x += right_delta;
                        size.z -= forward_delta;
                    }
                    d if d == ResizeDirection::BACK | ResizeDirection::LEFT => {
                        size.x -= right_delta;
                        size.z += forward_delta;
                    }
                    d if d == ResizeDirection::BACK | ResizeDirection::RIGHT => {
                        size.x += right_delta;
                        size.z += forward_delta;
                    }
                    _ => {
                        size.z -= forward_delta;
                        offset_right = 0.0;
                    }
                }

                let requested = Bounds::new(self.bounds.center, size);
                self.set_bounds(requested);
                self.events.push(WidgetEvent::Resized(self.bounds));

                // Keep the edge opposite the drag direction stationary. The
                // applied-vs-requested extent terms absorb minimum-size
                // clamping so a clamped edge still pins the opposite one.
                let applied = self.bounds.extents();
                let requested_extents = requested.extents();
                let position_offset = right
                    * (offset_right.abs() - (applied.x - requested_extents.x))
                    * offset_right.signum()
                    + forward
                        * (offset_forward.abs() - (applied.z - requested_extents.z))
                        * offset_forward.signum();
                self.pose.position = position_start + position_offset * viewer_scale;
            }
        }
    }

    fn update_icon_feedback(&mut self, hand: Hand, rig: &impl PointerResolver, dt: f32) {
        let local = self.pose.inverse_transform_point(rig.pointer_position(hand));
        let direction = self.resize_direction(local);
        let icon = ResizeIcon::for_direction(direction);
        let last = self.last_icons[hand.index()];

        match last {
            Some(previous) if previous != icon => {
                self.start_icon_fade(icon, VISIBLE_ICON_OPACITY);
                self.start_icon_fade(previous, 0.0);
            }
            None => self.start_icon_fade(icon, VISIBLE_ICON_OPACITY),
            _ => {}
        }
        self.last_icons[hand.index()] = Some(icon);

        // First appearance snaps; afterwards the icon follows at a fixed
        // rate. The margin offset keeps the icon to the side of the pointer
        // away from the ray origin, flipped inward near corners.
        let smooth = if last.is_none() { 1.0 } else { self.config.icon_smooth_follow * dt };
        let local_origin = self.pose.inverse_transform_point(rig.ray_origin(hand).position);
        let local_direction = local - local_origin;
        let extents = self.bounds.extents();
        let margin = self.config.resize_handle_margin;
        let index = icon.index();
        match direction {
            d if d == ResizeDirection::FRONT || d == ResizeDirection::BACK => {
                let offset_x = local_direction.x.signum() * margin;
                let mut target_x = local.x + offset_x;
                if target_x.abs() > extents.x - self.config.resize_corner_size {
                    target_x = local.x - offset_x;
                }
                let current = self.visuals.icons[index].position.x;
                self.visuals.icons[index].position.x = math::lerp(current, target_x, smooth);
            }
            d if d == ResizeDirection::LEFT || d == ResizeDirection::RIGHT => {
                let offset_z = local_direction.z.signum() * margin;
                let mut target_z = local.z + offset_z;
                if target_z.abs() > extents.z - self.config.resize_corner_size {
                    target_z = local.z - offset_z;
                }
                let current = self.visuals.icons[index].position.z;
                self.visuals.icons[index].position.z = math::lerp(current, target_z, smooth);
            }
            _ => {}
        }
    }

    fn start_icon_fade(&mut self, icon: ResizeIcon, target: f32) {
        let index = icon.index();
        self.icon_fades[index] = Some(Fade::new(
            self.visuals.icons[index].alpha,
            target,
            self.config.icon_crossfade_duration,
        ));
    }

    fn increase_frame_thickness(&mut self) {
        self.frame_thickness =
            Some(Transition::new(self.visuals.thin_frame_blend, THICK_FRAME_BLEND, FRAME_THICKNESS_DURATION));
    }

    fn reset_frame_thickness(&mut self) {
        self.frame_thickness =
            Some(Transition::new(self.visuals.thin_frame_blend, THIN_FRAME_BLEND, FRAME_THICKNESS_DURATION));
    }

    fn update_dynamic_face(&mut self) {
        if !self.dynamic_face_adjustment {
            return;
        }

        let current_x_rotation = self.pose.x_rotation_degrees();
        if (current_x_rotation - self.previous_x_rotation).abs() < 1e-5 {
            return;
        }
        self.previous_x_rotation = current_x_rotation;

        let angled_amount = math::delta_angle(current_x_rotation, 0.0).clamp(0.0, 90.0);
        let mid_reveal_amount = math::ping_pong(angled_amount * CORRECTIVE_REVEAL_MULTIPLIER, 90.0);
        self.lerp_amount = angled_amount / 90.0;
        let padded_lerp = self.lerp_amount * LERP_PADDING;

        let front_panel_t = math::clamp01(padded_lerp * FRONT_PANEL_LERP_PADDING);
        self.visuals.front_panel_rotation = Quat::from_rotation_x((90.0 * front_panel_t).to_radians());
        self.visuals.front_panel_position = math::lerp_vec3(
            Vec3::Z * FRONT_PANEL_Z_START_OFFSET,
            Vec3::new(0.0, FRONT_PANEL_Y_OFFSET, FRONT_PANEL_Z_END_OFFSET),
            padded_lerp,
        );

        self.front_z_offset = self.config.handle_z_offset * front_panel_t;

        self.adjust_handles_and_icons();

        self.visuals.angled_face_blend = angled_amount * LERP_PADDING;
        self.visuals.reveal_compensation_blend = mid_reveal_amount;
    }

    fn adjust_handles_and_icons(&mut self) {
        let extents = self.bounds.extents();
        let size = self.bounds.size;
        let handle_size = self.config.frame_handle_size;
        let frame_height = self.config.frame_height;

        let half_width = extents.x;
        let half_depth = extents.z;
        let half_height = -frame_height * 0.5;
        let handle_scale_x = size.x - handle_size;
        let handle_scale_z = size.z + handle_size;
        let handle_height = frame_height + handle_size;

        let handles = &mut self.visuals.handles;
        handles[FrameHandle::Left.index()] = Placement {
            position: Vec3::new(-half_width, half_height, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(handle_size, handle_height, handle_scale_z),
        };
        handles[FrameHandle::Right.index()] = Placement {
            position: Vec3::new(half_width, half_height, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(handle_size, handle_height, handle_scale_z),
        };
        handles[FrameHandle::Back.index()] = Placement {
            position: Vec3::new(0.0, half_height, half_depth),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(handle_scale_x, handle_height, handle_size),
        };
        handles[FrameHandle::FrontTop.index()] = Placement {
            position: Vec3::new(0.0, 0.0, -half_depth),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(handle_scale_x, handle_size, handle_size),
        };

        let half_handle_size = handle_size * 0.5;
        let bottom_handle_y = frame_height * (self.lerp_amount - 1.0);
        handles[FrameHandle::FrontBottom.index()] = Placement {
            position: Vec3::new(0.0, bottom_handle_y, -half_depth - self.front_z_offset),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(handle_scale_x + handle_size * 2.0, handle_size, handle_size),
        };

        let half_front_z_offset = self.front_z_offset * 0.5;
        let front_rotation = Quat::from_rotation_x(
            (math::clamp01(self.lerp_amount * FRONT_HANDLE_LERP_SCALE) * 90.0).to_radians(),
        );
        let front_left = Placement {
            position: Vec3::new(-half_width, bottom_handle_y * 0.5, -half_depth - half_front_z_offset),
            rotation: front_rotation,
            scale: Vec3::new(handle_size, frame_height, handle_size),
        };
        handles[FrameHandle::FrontLeft.index()] = front_left;
        handles[FrameHandle::FrontRight.index()] = Placement {
            position: Vec3::new(half_width, front_left.position.y, front_left.position.z),
            ..front_left
        };

        let corner_scale = frame_height + handle_size;
        let corner_z_offset = self.front_z_offset - self.config.handle_z_offset * 0.5;
        let corner_left = Placement {
            position: Vec3::new(
                -half_width,
                -corner_scale * (1.0 - self.lerp_amount * 0.5)
                    + handle_size * (1.0 - self.lerp_amount) * 0.5,
                -half_depth - corner_z_offset - half_handle_size,
            ),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(
                handle_size,
                (corner_scale - handle_size) * self.lerp_amount,
                corner_scale - handle_size * 0.75,
            ),
        };
        handles[FrameHandle::FrontLeftCorner.index()] = corner_left;
        handles[FrameHandle::FrontRightCorner.index()] = Placement {
            position: Vec3::new(half_width, corner_left.position.y, corner_left.position.z),
            ..corner_left
        };

        // Resize icons: corner icons get fixed positions, edge icons keep
        // their pointer-follow axis untouched.
        let icons = &mut self.visuals.icons;
        let margin = self.config.resize_handle_margin;
        let edge_x = half_width + margin;
        let edge_z = half_depth + margin;
        icons[ResizeIcon::Front.index()].position.z = -edge_z - self.front_z_offset;
        icons[ResizeIcon::Back.index()].position.z = edge_z;
        icons[ResizeIcon::Left.index()].position.x = -edge_x;
        icons[ResizeIcon::Right.index()].position.x = edge_x;

        let corner_x = half_width + margin * std::f32::consts::FRAC_1_SQRT_2;
        let corner_z = half_depth + margin * std::f32::consts::FRAC_1_SQRT_2;
        icons[ResizeIcon::FrontLeft.index()].position.x = -corner_x;
        icons[ResizeIcon::FrontLeft.index()].position.z = -corner_z - self.front_z_offset;
        icons[ResizeIcon::FrontRight.index()].position.x = corner_x;
        icons[ResizeIcon::FrontRight.index()].position.z = -corner_z - self.front_z_offset;
        icons[ResizeIcon::BackLeft.index()].position.x = -corner_x;
        icons[ResizeIcon::BackLeft.index()].position.z = corner_z;
        icons[ResizeIcon::BackRight.index()].position.x = corner_x;
        icons[ResizeIcon::BackRight.index()].position.z = corner_z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::WidgetEvent;

    #[test]
    fn bounds_setter_pins_height_and_minimums() {
        let mut panel = WorkspacePanel::new(WorkspaceConfig::default());
        panel.set_bounds(Bounds::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(0.1, 3.0, 0.1)));
        let bounds = panel.bounds();
        assert!((bounds.size.x - 0.25).abs() < 1e-6);
        assert!((bounds.size.z - 0.25).abs() < 1e-6);
        assert!((bounds.size.y - (0.09275 + 0.01)).abs() < 1e-6);
        assert!((bounds.center.y + 0.09275 * 0.5).abs() < 1e-6);
        assert_eq!(bounds.center.x, 0.0);
    }

    #[test]
    fn hover_start_and_end_drive_frame_thickness() {
        let mut panel = WorkspacePanel::new(WorkspaceConfig::default());
        panel.handle_hover_started(Hand::Left);
        for _ in 0..40 {
            panel.update(1.0 / 60.0);
        }
        assert!(panel.visuals().thin_frame_blend < 1.0, "frame thickens toward 0 on hover");

        panel.handle_hover_ended(Hand::Left);
        for _ in 0..40 {
            panel.update(1.0 / 60.0);
        }
        assert!(
            (panel.visuals().thin_frame_blend - 50.0).abs() < 1.0,
            "frame thins back to 50 once nothing hovers"
        );

        let events = panel.drain_events();
        assert!(events.contains(&WidgetEvent::HoverStarted { hand: Hand::Left }));
        assert!(events.contains(&WidgetEvent::HoverEnded { hand: Hand::Left }));
    }

    #[test]
    fn divider_hidden_until_offset_assigned() {
        let mut panel = WorkspacePanel::new(WorkspaceConfig::default());
        assert!(panel.visuals().top_panel_divider.is_none());
        panel.set_top_panel_divider_offset(0.5);
        let divider = panel.visuals().top_panel_divider.expect("divider placed");
        assert!((divider.position.x - panel.bounds().size.x * 0.25).abs() < 1e-6);
    }

    #[test]
    fn pitching_the_panel_extends_the_front_offset() {
        let mut panel = WorkspacePanel::new(WorkspaceConfig::default());
        assert_eq!(panel.front_z_offset(), 0.0);
        panel.set_pose(Pose::new(Vec3::ZERO, Quat::from_rotation_x(-90.0_f32.to_radians())));
        panel.update(1.0 / 60.0);
        assert!((panel.front_z_offset() - 0.1).abs() < 1e-4);
        assert!((panel.visuals().angled_face_blend - 108.0).abs() < 0.1);

        panel.set_dynamic_face_adjustment(false);
        panel.set_pose(Pose::IDENTITY);
        panel.update(1.0 / 60.0);
        assert!((panel.front_z_offset() - 0.1).abs() < 1e-4, "toggle off freezes the offset");
    }

    #[test]
    fn close_and_reset_clicks_emit_events() {
        let mut panel = WorkspacePanel::new(WorkspaceConfig::default());
        panel.close_click();
        panel.reset_size_click();
        let events = panel.drain_events();
        assert!(events.contains(&WidgetEvent::CloseClicked));
        assert!(events.contains(&WidgetEvent::ResetSizeClicked));
    }
}
