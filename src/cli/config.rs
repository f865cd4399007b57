//! `dining config`: show paths and update app preferences

use clap::Args;
use tracing::info;

use crate::config::paths::DiningPaths;
use crate::config::settings::{OverspendPolicy, Settings, ViewMode};
use crate::error::DiningResult;

#[derive(Args)]
pub struct ConfigArgs {
    /// What to do when a spend exceeds the balance: allow, warn or block
    #[arg(long)]
    pub overspend: Option<OverspendPolicy>,

    /// Currency symbol used in reports
    #[arg(long)]
    pub currency: Option<String>,

    /// Default view for `dining status`: daily or weekly
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Note used for spends logged without one
    #[arg(long)]
    pub default_note: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.overspend.is_none()
            && self.currency.is_none()
            && self.view.is_none()
            && self.default_note.is_none()
    }
}

/// Handle `dining config`
pub fn handle_config_command(
    paths: &DiningPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> DiningResult<()> {
    if !args.is_empty() {
        if let Some(policy) = args.overspend {
            settings.overspend_policy = policy;
        }
        if let Some(symbol) = args.currency {
            settings.currency_symbol = symbol;
        }
        if let Some(view) = args.view {
            settings.default_view = view;
        }
        if let Some(note) = args.default_note {
            settings.default_spend_note = note;
        }
        settings.save(paths)?;
        info!(path = %paths.config_file().display(), "saved preferences");
        println!("Preferences saved.");
        println!();
    }

    println!("Configuration");
    println!("=============");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Config file:      {}", paths.config_file().display());
    println!();
    println!("Preferences");
    println!("-----------");
    println!("Overspend policy: {}", settings.overspend_policy);
    println!("Currency symbol:  {}", settings.currency_symbol);
    println!("Default view:     {}", settings.default_view);
    println!("Default note:     {}", settings.default_spend_note);
    println!("Schema version:   {}", settings.schema_version);

    Ok(())
}
