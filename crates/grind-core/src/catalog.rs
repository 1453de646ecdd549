use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::GrindError;
use crate::GrindResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Fixed board categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    PassiveNodes,
    HourlyLoot,
    OgFaucets,
    MicroWork,
    AirdropOps,
    Web3Gaming,
    QuestBoard,
    Infrastructure,
}

impl LinkCategory {
    /// All categories in display order.
    pub const ALL: [LinkCategory; 8] = [
        LinkCategory::PassiveNodes,
        LinkCategory::HourlyLoot,
        LinkCategory::OgFaucets,
        LinkCategory::MicroWork,
        LinkCategory::AirdropOps,
        LinkCategory::Web3Gaming,
        LinkCategory::QuestBoard,
        LinkCategory::Infrastructure,
    ];

    /// Human-readable board label.
    pub fn label(&self) -> &'static str {
        match self {
            LinkCategory::PassiveNodes => "Passive Income (Set & Forget)",
            LinkCategory::HourlyLoot => "Hourly Loot (Pick Games)",
            LinkCategory::OgFaucets => "The Faucet OGs (Proven)",
            LinkCategory::MicroWork => "Micro-Work (PTC & Captcha)",
            LinkCategory::AirdropOps => "Airdrop Ops (Testnet & Spec)",
            LinkCategory::Web3Gaming => "GameFi Arcade",
            LinkCategory::QuestBoard => "Social Quests & XP",
            LinkCategory::Infrastructure => "Toolbox (Wallets & Exch)",
        }
    }
}

impl std::fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single board entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: LinkCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Highlight "must do" items.
    #[serde(default)]
    pub recommended: bool,
}

/// The full board: an ordered list of links with unique ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub links: Vec<LinkItem>,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(links: Vec<LinkItem>) -> GrindResult<Catalog> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for link in &links {
            if !seen.insert(link.id.as_str()) {
                return Err(GrindError::DuplicateLink(link.id.clone()));
            }
        }
        Ok(Catalog { links })
    }

    /// Load a custom board from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> GrindResult<Catalog> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| GrindError::Store {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        Catalog::new(catalog.links)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Lookup by id.
    pub fn get(&self, id: &str) -> Option<&LinkItem> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Sorted, de-duplicated list of every tag on the board.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .links
            .iter()
            .flat_map(|l| l.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(String::from).collect()
    }

    /// Links carrying `tag`; `None` selects the whole board.
    pub fn filter_by_tag(&self, tag: Option<&str>) -> Vec<&LinkItem> {
        match tag {
            None => self.links.iter().collect(),
            Some(t) => self
                .links
                .iter()
                .filter(|l| l.tags.iter().any(|lt| lt == t))
                .collect(),
        }
    }

    /// Every category in display order paired with its links, board order
    /// preserved within a group. Empty groups are included; skipping them
    /// under an active filter is a presentation decision.
    pub fn group_by_category<'a>(
        links: &[&'a LinkItem],
    ) -> Vec<(LinkCategory, Vec<&'a LinkItem>)> {
        LinkCategory::ALL
            .iter()
            .map(|cat| {
                let group: Vec<&LinkItem> =
                    links.iter().filter(|l| l.category == *cat).copied().collect();
                (*cat, group)
            })
            .collect()
    }

    /// The default board.
    pub fn builtin() -> Catalog {
        let link = |id: &str,
                    url: &str,
                    title: &str,
                    category: LinkCategory,
                    tags: &[&str],
                    recommended: bool| LinkItem {
            id: id.to_string(),
            url: url.to_string(),
            title: title.to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: None,
            recommended,
        };

        // Ids are stable: progress is stored against them.
        Catalog {
            links: vec![
                link(
                    "honeygain",
                    "https://www.honeygain.com",
                    "Honeygain",
                    LinkCategory::PassiveNodes,
                    &["Passive", "Bandwidth", "Top Tier"],
                    true,
                ),
                link(
                    "pawns",
                    "https://pawns.app",
                    "Pawns.app",
                    LinkCategory::PassiveNodes,
                    &["Passive", "Bandwidth"],
                    false,
                ),
                link(
                    "grass",
                    "https://www.getgrass.io",
                    "Grass",
                    LinkCategory::PassiveNodes,
                    &["Passive", "Bandwidth", "Testnet"],
                    true,
                ),
                link(
                    "rollercoin",
                    "https://rollercoin.com",
                    "RollerCoin",
                    LinkCategory::HourlyLoot,
                    &["Hourly", "Game"],
                    false,
                ),
                link(
                    "betfury",
                    "https://betfury.io",
                    "BetFury Box",
                    LinkCategory::HourlyLoot,
                    &["Hourly"],
                    false,
                ),
                link(
                    "freebitcoin",
                    "https://freebitco.in",
                    "FreeBitco.in",
                    LinkCategory::OgFaucets,
                    &["Hourly", "Top Tier"],
                    true,
                ),
                link(
                    "cointiply",
                    "https://cointiply.com",
                    "Cointiply",
                    LinkCategory::OgFaucets,
                    &["Hourly", "Top Tier"],
                    false,
                ),
                link(
                    "firefaucet",
                    "https://firefaucet.win",
                    "Fire Faucet",
                    LinkCategory::OgFaucets,
                    &["Hourly"],
                    false,
                ),
                link(
                    "timebucks",
                    "https://timebucks.com",
                    "TimeBucks",
                    LinkCategory::MicroWork,
                    &["Social"],
                    false,
                ),
                link(
                    "2captcha",
                    "https://2captcha.com",
                    "2Captcha Work",
                    LinkCategory::MicroWork,
                    &[],
                    false,
                ),
                link(
                    "galxe",
                    "https://galxe.com",
                    "Galxe Quests",
                    LinkCategory::AirdropOps,
                    &["Testnet", "Social", "Top Tier"],
                    true,
                ),
                link(
                    "layer3",
                    "https://layer3.xyz",
                    "Layer3",
                    LinkCategory::AirdropOps,
                    &["Testnet", "Social"],
                    false,
                ),
                link(
                    "axie",
                    "https://axieinfinity.com",
                    "Axie Origins",
                    LinkCategory::Web3Gaming,
                    &["Game"],
                    false,
                ),
                link(
                    "splinterlands",
                    "https://splinterlands.com",
                    "Splinterlands",
                    LinkCategory::Web3Gaming,
                    &["Game", "Hourly"],
                    false,
                ),
                link(
                    "zealy",
                    "https://zealy.io",
                    "Zealy XP",
                    LinkCategory::QuestBoard,
                    &["Social"],
                    false,
                ),
                link(
                    "rabby",
                    "https://rabby.io",
                    "Rabby Wallet",
                    LinkCategory::Infrastructure,
                    &["Top Tier"],
                    true,
                ),
            ],
        }
    }
}
