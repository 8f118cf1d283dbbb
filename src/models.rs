use crate::types::RepositoryIdentity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cosmetic style bundle applied to the whole button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Minimal,
    Outline,
}

/// Caller-supplied inputs for one button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarButtonProps {
    pub owner: String,
    pub repo: String,
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    #[serde(rename = "showCount", default = "default_show_count")]
    pub show_count: bool,
    #[serde(default)]
    pub variant: Variant,
}

fn default_show_count() -> bool {
    true
}

impl StarButtonProps {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            class_name: None,
            show_count: true,
            variant: Variant::Default,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_show_count(mut self, show_count: bool) -> Self {
        self.show_count = show_count;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// Timing of the counting animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub steps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }
}

impl AnimationConfig {
    pub fn new(duration: Duration, steps: u32) -> Self {
        Self {
            duration,
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps.max(1)
    }

    pub fn step_interval(&self) -> Duration {
        self.duration / self.steps()
    }
}

/// Point-in-time copy of a mounted button's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSnapshot {
    pub repository: RepositoryIdentity,
    pub star_count: u64,
    pub display_count: u64,
    pub is_loading: bool,
    pub is_animating: bool,
    pub show_count: bool,
    pub variant: Variant,
}

impl ButtonSnapshot {
    /// Loading finished and the displayed value has caught up.
    pub fn is_settled(&self) -> bool {
        !self.is_loading && !self.is_animating && self.display_count == self.star_count
    }
}
