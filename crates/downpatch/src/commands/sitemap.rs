//! `downpatch sitemap` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use dp_config::{CliSettings, Config};
use dp_content_fs::FsContent;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    /// Path to configuration file (default: auto-discover downpatch.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Public base URL for sitemap locations (overrides config).
    #[arg(long, env = "DOWNPATCH_BASE_URL")]
    base_url: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SitemapArgs {
    /// Execute the sitemap command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, no base URL is known,
    /// content cannot be read, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base_url: self.base_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let base_url = config.base_url().ok_or_else(|| {
            CliError::Validation(
                "No base URL: pass --base-url or set site.base_url in downpatch.toml".to_owned(),
            )
        })?;

        let content = FsContent::new(config.content_resolved.source_dir.clone());
        let xml = dp_sitemap::generate(base_url, &content, &content)?;
        tracing::info!(
            base_url,
            source_dir = %content.source_dir().display(),
            bytes = xml.len(),
            "Sitemap generated"
        );

        if let Some(path) = &self.output {
            std::fs::write(path, &xml)?;
            output.success(&format!(
                "Wrote sitemap for {} to {}",
                content.source_dir().display(),
                path.display()
            ));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }

        Ok(())
    }
}
