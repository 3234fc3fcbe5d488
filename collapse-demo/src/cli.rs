use std::path::PathBuf;

use clap::Parser;

/// Collapsible panels in the terminal. Tab moves focus, Enter/Space or a
/// click on a title toggles a panel, q quits.
#[derive(Debug, Parser)]
#[command(name = "collapse-demo", version)]
pub struct Args {
    /// Number of panels on the page.
    #[arg(long, default_value_t = 4)]
    pub panels: usize,

    /// JSON file with selector and trigger key overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file; the terminal itself is taken by the UI.
    #[arg(long, default_value = "collapse-demo.log")]
    pub log: PathBuf,
}
