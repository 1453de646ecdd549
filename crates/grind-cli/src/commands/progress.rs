use clap::Args;
use serde_json::{json, Value};

use grind_core::store::KEY_COMPLETED_LINKS;

use super::BoardContext;

/// Arguments for flipping a link's completion state
#[derive(Args)]
pub struct ToggleArgs {
    /// Link id to toggle
    pub id: String,
}

/// Arguments for clearing progress
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset (required; this clears all progress)
    #[arg(long)]
    pub yes: bool,
}

pub fn run_toggle(args: ToggleArgs, ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    let (mut store, mut progress) = ctx.load()?;

    let done = progress.toggle(&ctx.catalog, &args.id)?;
    let ids: Vec<&str> = progress.completed_ids().collect();
    store.set(KEY_COMPLETED_LINKS, &ids)?;
    store.save()?;

    let summary = progress.summary(&ctx.catalog);
    Ok(json!({
        "id": args.id,
        "done": done,
        "completed": summary.completed,
        "total": summary.total,
        "percent": summary.percent,
        "level": summary.level,
    }))
}

pub fn run_reset(args: ResetArgs, ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("reset clears all progress for the board; pass --yes to confirm".into());
    }

    let (mut store, progress) = ctx.load()?;
    let cleared = progress.completed_ids().count();

    store.remove(KEY_COMPLETED_LINKS);
    store.save()?;

    Ok(json!({ "reset": true, "cleared": cleared }))
}

pub fn run_stats(ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    let (store, progress) = ctx.load()?;
    let summary = progress.summary(&ctx.catalog);

    let mut value = serde_json::to_value(&summary)?;
    if let Value::Object(ref mut map) = value {
        map.insert("updated_at".into(), serde_json::to_value(store.updated_at())?);
    }
    Ok(value)
}
