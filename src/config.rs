use crate::rig::HapticPulse;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "WorkspaceConfig::default_frame_handle_size")]
    pub frame_handle_size: f32,
    #[serde(default = "WorkspaceConfig::default_frame_height")]
    pub frame_height: f32,
    #[serde(default = "WorkspaceConfig::default_resize_handle_margin")]
    pub resize_handle_margin: f32,
    #[serde(default = "WorkspaceConfig::default_resize_corner_size")]
    pub resize_corner_size: f32,
    #[serde(default = "WorkspaceConfig::default_min_panel_width")]
    pub min_panel_width: f32,
    #[serde(default = "WorkspaceConfig::default_min_panel_depth")]
    pub min_panel_depth: f32,
    #[serde(default = "WorkspaceConfig::default_icon_crossfade_duration")]
    pub icon_crossfade_duration: f32,
    #[serde(default = "WorkspaceConfig::default_icon_smooth_follow")]
    pub icon_smooth_follow: f32,
    #[serde(default = "WorkspaceConfig::default_handle_z_offset")]
    pub handle_z_offset: f32,
    #[serde(default = "WorkspaceConfig::default_dynamic_face_adjustment")]
    pub dynamic_face_adjustment: bool,
}

impl WorkspaceConfig {
    const fn default_frame_handle_size() -> f32 {
        0.01
    }

    const fn default_frame_height() -> f32 {
        0.09275
    }

    const fn default_resize_handle_margin() -> f32 {
        0.01
    }

    const fn default_resize_corner_size() -> f32 {
        0.05
    }

    const fn default_min_panel_width() -> f32 {
        0.25
    }

    const fn default_min_panel_depth() -> f32 {
        0.25
    }

    const fn default_icon_crossfade_duration() -> f32 {
        0.2
    }

    const fn default_icon_smooth_follow() -> f32 {
        10.0
    }

    const fn default_handle_z_offset() -> f32 {
        0.1
    }

    const fn default_dynamic_face_adjustment() -> bool {
        true
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            frame_handle_size: Self::default_frame_handle_size(),
            frame_height: Self::default_frame_height(),
            resize_handle_margin: Self::default_resize_handle_margin(),
            resize_corner_size: Self::default_resize_corner_size(),
            min_panel_width: Self::default_min_panel_width(),
            min_panel_depth: Self::default_min_panel_depth(),
            icon_crossfade_duration: Self::default_icon_crossfade_duration(),
            icon_smooth_follow: Self::default_icon_smooth_follow(),
            handle_z_offset: Self::default_handle_z_offset(),
            dynamic_face_adjustment: Self::default_dynamic_face_adjustment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxyRayConfig {
    #[serde(default = "ProxyRayConfig::default_line_width")]
    pub line_width: f32,
    #[serde(default = "ProxyRayConfig::default_cone_length")]
    pub cone_length: f32,
    #[serde(default = "ProxyRayConfig::default_show_smooth_time")]
    pub show_smooth_time: f32,
    #[serde(default = "ProxyRayConfig::default_hide_smooth_time")]
    pub hide_smooth_time: f32,
}

impl ProxyRayConfig {
    const fn default_line_width() -> f32 {
        0.0005
    }

    const fn default_cone_length() -> f32 {
        0.045
    }

    const fn default_show_smooth_time() -> f32 {
        0.3125
    }

    const fn default_hide_smooth_time() -> f32 {
        0.1875
    }
}

impl Default for ProxyRayConfig {
    fn default() -> Self {
        Self {
            line_width: Self::default_line_width(),
            cone_length: Self::default_cone_length(),
            show_smooth_time: Self::default_show_smooth_time(),
            hide_smooth_time: Self::default_hide_smooth_time(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HapticsConfig {
    #[serde(default = "HapticsConfig::default_hover_pulse")]
    pub hover: HapticPulse,
    #[serde(default = "HapticsConfig::default_click_pulse")]
    pub click: HapticPulse,
}

impl HapticsConfig {
    const fn default_hover_pulse() -> HapticPulse {
        HapticPulse { duration: 0.005, intensity: 0.175 }
    }

    const fn default_click_pulse() -> HapticPulse {
        HapticPulse { duration: 0.005, intensity: 0.85 }
    }
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self { hover: Self::default_hover_pulse(), click: Self::default_click_pulse() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub proxy_ray: ProxyRayConfig,
    #[serde(default)]
    pub haptics: HapticsConfig,
}

impl WidgetsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[widgets] config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}
