use crate::github::API_BASE_URL;
use crate::models::{AnimationConfig, StarButtonProps, Variant};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "github-star-button")]
#[command(about = "GitHub star button - Renders a repository star button with an animated star count")]
#[command(version)]
pub struct Cli {
    /// Repository owner
    #[arg(long, env = "GITHUB_OWNER")]
    pub owner: String,

    /// Repository name
    #[arg(long, env = "GITHUB_REPO")]
    pub repo: String,

    /// Cosmetic style of the button
    #[arg(long, env = "STAR_BUTTON_VARIANT", value_enum, default_value_t = Variant::Default)]
    pub variant: Variant,

    /// Extra CSS classes appended to the button
    #[arg(long, env = "STAR_BUTTON_CLASS")]
    pub class_name: Option<String>,

    /// Do not render the star count
    #[arg(long)]
    pub hide_count: bool,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_base_url: String,

    /// Total length of the counting animation in milliseconds
    #[arg(long, env = "STAR_BUTTON_ANIMATION_MS", default_value_t = 2000)]
    pub animation_duration_ms: u64,

    /// Number of steps in the counting animation
    #[arg(long, env = "STAR_BUTTON_ANIMATION_STEPS", default_value_t = 60)]
    pub animation_steps: u32,

    /// Serve a live preview page on this port instead of exiting
    #[arg(long, env = "STAR_BUTTON_PORT")]
    pub serve: Option<u16>,
}

impl Cli {
    pub fn props(&self) -> StarButtonProps {
        let mut props = StarButtonProps::new(&self.owner, &self.repo)
            .with_show_count(!self.hide_count)
            .with_variant(self.variant);
        if let Some(class_name) = &self.class_name {
            props = props.with_class_name(class_name);
        }
        props
    }

    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig::new(
            Duration::from_millis(self.animation_duration_ms),
            self.animation_steps,
        )
    }
}
