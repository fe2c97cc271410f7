//! Async helper functions for timers and settings persistence

use std::time::Duration;

use anyhow::Context;

use crate::features::Settings;

/// Wait out one cooldown
pub async fn cooldown(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Persist settings to the platform config directory
pub async fn save_settings(settings: Settings) -> anyhow::Result<()> {
    settings.save().context("failed to save settings")?;
    tracing::info!("Settings saved");
    Ok(())
}
