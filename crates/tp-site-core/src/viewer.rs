//! Placeholder "3D viewer": which model is shown and whether it spins.
//!
//! Rotation is a CSS animation; this module only tracks the play state and
//! the label of the toggle button.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelKind {
    #[default]
    Cube,
    Gear,
    Vase,
    Other(String),
}

impl ModelKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "cube" => ModelKind::Cube,
            "gear" => ModelKind::Gear,
            "vase" => ModelKind::Vase,
            other => ModelKind::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ModelKind::Cube => "cube",
            ModelKind::Gear => "gear",
            ModelKind::Vase => "vase",
            ModelKind::Other(id) => id,
        }
    }

    pub fn element_id(&self) -> String {
        format!("model-{}", self.as_str())
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ModelKind {
    fn from(raw: String) -> Self {
        ModelKind::parse(&raw)
    }
}

impl From<ModelKind> for String {
    fn from(kind: ModelKind) -> Self {
        kind.as_str().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    /// Value for the CSS `animation-play-state` property.
    pub fn as_css(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

/// Markup for the rotation toggle button.
///
/// The button offers the opposite of the current state: pause while
/// spinning, resume while paused.
pub fn rotation_button_html(state: PlayState) -> &'static str {
    match state {
        PlayState::Running => r#"<i class="fas fa-pause mr-2"></i>Pausar Rotación"#,
        PlayState::Paused => r#"<i class="fas fa-play mr-2"></i>Reanudar Rotación"#,
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    current: ModelKind,
    rotating: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current: ModelKind::Cube,
            rotating: true,
        }
    }
}

impl ViewerState {
    pub fn current(&self) -> &ModelKind {
        &self.current
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn play_state(&self) -> PlayState {
        if self.rotating {
            PlayState::Running
        } else {
            PlayState::Paused
        }
    }

    /// Switch to `kind` if the markup has a display for it.
    pub fn load_model(&mut self, kind: ModelKind, present: &[ModelKind]) -> Option<&ModelKind> {
        if !present.contains(&kind) {
            return None;
        }
        self.current = kind;
        Some(&self.current)
    }

    pub fn toggle_rotation(&mut self) -> PlayState {
        self.rotating = !self.rotating;
        self.play_state()
    }

    pub fn button_html(&self) -> &'static str {
        rotation_button_html(self.play_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present() -> Vec<ModelKind> {
        vec![ModelKind::Cube, ModelKind::Gear, ModelKind::Vase]
    }

    #[test]
    fn starts_on_a_spinning_cube() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.current(), &ModelKind::Cube);
        assert_eq!(viewer.play_state(), PlayState::Running);
        assert!(viewer.button_html().contains("Pausar"));
    }

    #[test]
    fn toggling_twice_restores_state_and_label() {
        let mut viewer = ViewerState::default();
        let before_state = viewer.play_state();
        let before_label = viewer.button_html();

        assert_eq!(viewer.toggle_rotation(), PlayState::Paused);
        assert_eq!(viewer.play_state().as_css(), "paused");
        assert!(viewer.button_html().contains("Reanudar"));

        viewer.toggle_rotation();
        assert_eq!(viewer.play_state(), before_state);
        assert_eq!(viewer.button_html(), before_label);
    }

    #[test]
    fn load_model_switches_only_to_present_models() {
        let mut viewer = ViewerState::default();
        let loaded = viewer.load_model(ModelKind::parse("gear"), &present()).cloned();
        assert_eq!(loaded, Some(ModelKind::Gear));
        assert_eq!(viewer.current().element_id(), "model-gear");

        assert!(viewer.load_model(ModelKind::parse("dragon"), &present()).is_none());
        assert_eq!(viewer.current(), &ModelKind::Gear);
    }

    #[test]
    fn load_model_keeps_rotation_flag() {
        let mut viewer = ViewerState::default();
        viewer.toggle_rotation();
        viewer.load_model(ModelKind::Vase, &present());
        assert!(!viewer.is_rotating());
    }
}
