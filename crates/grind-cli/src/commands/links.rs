use clap::Args;
use serde_json::{json, Value};

use grind_core::catalog::Catalog;

use super::BoardContext;

/// Arguments for listing the board
#[derive(Args)]
pub struct LinksArgs {
    /// Only show links carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only show "must do" links
    #[arg(long)]
    pub recommended: bool,
}

pub fn run_links(args: LinksArgs, ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    let (_, progress) = ctx.load()?;

    let mut filtered = ctx.catalog.filter_by_tag(args.tag.as_deref());
    if args.recommended {
        filtered.retain(|l| l.recommended);
    }

    let filtering = args.tag.is_some() || args.recommended;
    let groups: Vec<Value> = Catalog::group_by_category(&filtered)
        .into_iter()
        // Empty groups stay visible on the full board but drop out under a filter
        .filter(|(_, links)| !filtering || !links.is_empty())
        .map(|(category, links)| {
            json!({
                "category": category,
                "label": category.label(),
                "links": links
                    .iter()
                    .map(|l| {
                        json!({
                            "id": l.id,
                            "title": l.title,
                            "url": l.url,
                            "tags": l.tags,
                            "recommended": l.recommended,
                            "done": progress.is_complete(&l.id),
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    Ok(json!({
        "filter": args.tag,
        "shown": filtered.len(),
        "total": ctx.catalog.len(),
        "groups": groups,
    }))
}

pub fn run_tags(ctx: &BoardContext) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({ "tags": ctx.catalog.all_tags() }))
}
