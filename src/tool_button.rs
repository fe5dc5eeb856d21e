use crate::color::{GradientPair, SessionColorScheme};
use crate::config::HapticsConfig;
use crate::rig::{Hand, HapticSink};

/// Periodic-table-style abbreviation of a tool type name: the first
/// uppercase letter kept as-is, the next one lowercased, at most two
/// characters ("TransformTool" becomes "Tt").
pub fn type_abbreviation(type_name: &str) -> String {
    let mut abbreviation = String::new();
    for ch in type_name.chars() {
        if ch.is_uppercase() {
            if abbreviation.is_empty() {
                abbreviation.push(ch);
            } else {
                abbreviation.extend(ch.to_lowercase());
            }
        }
        if abbreviation.len() >= 2 {
            break;
        }
    }
    abbreviation
}

/// A tool shortcut pinned next to a hand: hidden until a tool type is
/// assigned, with the gradient pair swapped between active and inactive.
pub struct PinnedToolButton {
    hand: Hand,
    colors: SessionColorScheme,
    haptics: HapticsConfig,
    tool_type: Option<String>,
    label: String,
    active: bool,
    visible: bool,
    normal_gradient: GradientPair,
    highlight_gradient: GradientPair,
}

impl PinnedToolButton {
    pub fn new(hand: Hand, colors: SessionColorScheme, haptics: HapticsConfig) -> Self {
        Self {
            hand,
            haptics,
            tool_type: None,
            label: String::new(),
            active: false,
            visible: false,
            normal_gradient: colors.grayscale_session_gradient(),
            highlight_gradient: colors.session_gradient(),
            colors,
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tool_type(&self) -> Option<&str> {
        self.tool_type.as_deref()
    }

    pub fn normal_gradient(&self) -> GradientPair {
        self.normal_gradient
    }

    pub fn highlight_gradient(&self) -> GradientPair {
        self.highlight_gradient
    }

    pub fn set_tool_type(&mut self, type_name: Option<&str>, active: bool) {
        match type_name {
            Some(name) => {
                self.tool_type = Some(name.to_string());
                self.label = type_abbreviation(name);
                self.visible = true;
                self.set_gradients(active);
            }
            None => {
                self.tool_type = None;
                self.label.clear();
                self.visible = false;
            }
        }
    }

    /// Pointer entered the button; fires the hover pulse.
    pub fn pointer_enter(&mut self, haptics: &mut impl HapticSink) {
        haptics.pulse(self.hand, &self.haptics.hover);
    }

    /// Click routes through the host's tool selection; the returned flag is
    /// the button's new active state.
    pub fn click(
        &mut self,
        haptics: &mut impl HapticSink,
        select_tool: impl FnOnce(Hand, &str) -> bool,
    ) {
        if let Some(tool) = self.tool_type.clone() {
            let active = select_tool(self.hand, &tool);
            self.set_gradients(active);
        }
        haptics.pulse(self.hand, &self.haptics.click);
    }

    fn set_gradients(&mut self, active: bool) {
        self.active = active;
        if active {
            self.normal_gradient = self.colors.session_gradient();
            self.highlight_gradient = self.colors.grayscale_session_gradient();
        } else {
            self.normal_gradient = self.colors.grayscale_session_gradient();
            self.highlight_gradient = self.colors.session_gradient();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::HapticPulse;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct PulseLog {
        pulses: Vec<(Hand, f32)>,
    }

    impl HapticSink for PulseLog {
        fn pulse(&mut self, hand: Hand, pulse: &HapticPulse) {
            self.pulses.push((hand, pulse.intensity));
        }
    }

    fn button() -> PinnedToolButton {
        let mut rng = StdRng::seed_from_u64(3);
        PinnedToolButton::new(Hand::Right, SessionColorScheme::random(&mut rng), HapticsConfig::default())
    }

    #[test]
    fn abbreviations_read_like_element_symbols() {
        assert_eq!(type_abbreviation("TransformTool"), "Tt");
        assert_eq!(type_abbreviation("SelectionTool"), "St");
        assert_eq!(type_abbreviation("Eraser"), "E");
        assert_eq!(type_abbreviation("lowercase"), "");
    }

    #[test]
    fn hidden_until_tool_assigned() {
        let mut button = button();
        assert!(!button.visible());
        button.set_tool_type(Some("AnnotationTool"), false);
        assert!(button.visible());
        assert_eq!(button.label(), "At");
        button.set_tool_type(None, false);
        assert!(!button.visible());
        assert_eq!(button.label(), "");
    }

    #[test]
    fn click_swaps_gradients_with_active_state() {
        let mut button = button();
        button.set_tool_type(Some("TransformTool"), false);
        let inactive_normal = button.normal_gradient();

        let mut log = PulseLog::default();
        button.click(&mut log, |_, _| true);
        assert!(button.active());
        assert_ne!(button.normal_gradient(), inactive_normal);
        assert_eq!(button.normal_gradient(), button.colors.session_gradient());
        assert_eq!(log.pulses.len(), 1);
        assert!((log.pulses[0].1 - 0.85).abs() < 1e-6);

        button.click(&mut log, |_, _| false);
        assert!(!button.active());
        assert_eq!(button.normal_gradient(), inactive_normal);
    }

    #[test]
    fn hover_fires_the_soft_pulse() {
        let mut button = button();
        let mut log = PulseLog::default();
        button.pointer_enter(&mut log);
        assert_eq!(log.pulses.len(), 1);
        assert!((log.pulses[0].1 - 0.175).abs() < 1e-6);
        assert_eq!(log.pulses[0].0, Hand::Right);
    }
}
