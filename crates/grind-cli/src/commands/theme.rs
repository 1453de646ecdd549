use clap::Args;
use serde_json::{json, Value};

use grind_core::store::KEY_THEME;
use grind_core::Theme;

use super::BoardContext;

/// Arguments for the theme command
#[derive(Args)]
pub struct ThemeArgs {
    /// Theme to set
    #[arg(value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Flip between light and dark
    #[arg(long, conflicts_with = "theme")]
    pub toggle: bool,
}

pub fn run_theme(args: ThemeArgs, ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    let (mut store, _) = ctx.load()?;
    let current: Theme = store.get(KEY_THEME)?.unwrap_or_default();

    let next = match (args.theme.as_deref(), args.toggle) {
        (Some("dark"), _) => Theme::Dark,
        (Some(_), _) => Theme::Light,
        (None, true) => current.toggled(),
        (None, false) => return Ok(json!({ "theme": current })),
    };

    if next != current {
        store.set(KEY_THEME, &next)?;
        store.save()?;
    }

    Ok(json!({ "theme": next }))
}
