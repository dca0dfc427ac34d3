//! Async task helpers

use anyhow::Context;

/// Open an external link in the system browser or mail client
pub async fn open_link(url: String) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || {
        open::that(&url).with_context(|| format!("opening {url}"))
    })
    .await
    .context("link task panicked")?
}
