use std::path::Path;

use agstore_types::{Catalog, Creator, FeaturedAgent, StoreAgent};
use tracing::{debug, warn};

use crate::{Error, Result};

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::NotInitialized(format!(
            "no catalog at {} (run `agstore init` or pass --catalog)",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content).map_err(|source| Error::Catalog {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        featured = catalog.featured.len(),
        agents = catalog.agents.len(),
        creators = catalog.creators.len(),
        "catalog loaded"
    );
    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog has no listings");
    }
    Ok(catalog)
}

pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(catalog).map_err(|source| Error::Catalog {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Listings written by `agstore init`, matching the storefront's demo data.
pub fn sample_catalog() -> Catalog {
    Catalog {
        featured: vec![
            featured(
                "seo-optimizer-pro",
                "SEO Optimizer Pro",
                "WordCraft AI",
                "Rank higher with less effort",
                "Audits pages, rewrites meta descriptions and suggests internal links for any site.",
                Some(75_000),
                Some(4.7),
            ),
            featured(
                "inbox-zero",
                "Inbox Zero",
                "Mailwise Labs",
                "Triage email on autopilot",
                "Sorts, summarizes and drafts replies so your inbox stays empty.",
                Some(1_250_300),
                Some(4.9),
            ),
            featured(
                "data-viz-wizard",
                "Data Viz Wizard",
                "ChartSmith",
                "From spreadsheet to story",
                "Turns CSV files into annotated charts and short written insights.",
                Some(8_420),
                Some(4.2),
            ),
            featured(
                "meeting-scribe",
                "Meeting Scribe",
                "Notably",
                "Never take notes again",
                "Joins calls, records action items and posts summaries to your team channel.",
                None,
                None,
            ),
        ],
        agents: vec![
            store_agent(
                "code-reviewer",
                "Code Reviewer",
                "DevTools Co",
                "Catches bugs before your teammates do",
                Some(210_000),
                Some(4.8),
            ),
            store_agent(
                "blog-writer",
                "Blog Writer",
                "WordCraft AI",
                "Long-form drafts in your brand voice",
                Some(98_765),
                Some(4.5),
            ),
            store_agent(
                "lead-finder",
                "Lead Finder",
                "GrowthOps",
                "Builds prospect lists from public profiles",
                Some(12_003),
                Some(3.9),
            ),
            store_agent(
                "travel-planner",
                "Travel Planner",
                "Wanderly",
                "Day-by-day itineraries within budget",
                Some(640),
                None,
            ),
            store_agent(
                "invoice-chaser",
                "Invoice Chaser",
                "Ledgerly",
                "Polite reminders until invoices are paid",
                None,
                Some(4.1),
            ),
        ],
        creators: vec![
            creator("WordCraft AI", "wordcraft", "Writing tools for marketers.", 12),
            creator("DevTools Co", "devtools", "Agents that review, test and ship code.", 7),
            creator("ChartSmith", "chartsmith", "Data storytelling made simple.", 3),
            creator("Mailwise Labs", "mailwise", "Email that handles itself.", 5),
        ],
    }
}

fn featured(
    slug: &str,
    name: &str,
    creator: &str,
    sub_heading: &str,
    description: &str,
    runs: Option<u64>,
    rating: Option<f64>,
) -> FeaturedAgent {
    FeaturedAgent {
        slug: slug.to_string(),
        agent_name: name.to_string(),
        agent_image: format!("https://cdn.agstore.dev/agents/{}.png", slug),
        creator_name: creator.to_string(),
        creator_avatar: format!("https://cdn.agstore.dev/creators/{}.png", avatar_key(creator)),
        sub_heading: sub_heading.to_string(),
        description: description.to_string(),
        runs,
        rating,
    }
}

fn store_agent(
    slug: &str,
    name: &str,
    creator: &str,
    description: &str,
    runs: Option<u64>,
    rating: Option<f64>,
) -> StoreAgent {
    StoreAgent {
        slug: slug.to_string(),
        agent_name: name.to_string(),
        agent_image: format!("https://cdn.agstore.dev/agents/{}.png", slug),
        creator: creator.to_string(),
        creator_avatar: format!("https://cdn.agstore.dev/creators/{}.png", avatar_key(creator)),
        sub_heading: String::new(),
        description: description.to_string(),
        runs,
        rating,
    }
}

fn creator(name: &str, username: &str, description: &str, num_agents: u32) -> Creator {
    Creator {
        name: name.to_string(),
        username: username.to_string(),
        description: description.to_string(),
        avatar_url: format!("https://cdn.agstore.dev/creators/{}.png", username),
        num_agents,
    }
}

fn avatar_key(creator: &str) -> String {
    creator.to_lowercase().replace(' ', "-")
}
