//! Assertions on `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that featured output contains `expected` slides in index order.
pub fn assert_slide_count(json: &Value, expected: usize) -> Result<()> {
    let slides = json["content"]["slides"]
        .as_array()
        .context("Expected 'content.slides' array in JSON")?;

    if slides.len() != expected {
        anyhow::bail!("Expected {} slides, got {}", expected, slides.len());
    }

    for (i, slide) in slides.iter().enumerate() {
        let index = slide["index"]
            .as_u64()
            .with_context(|| format!("Slide {} missing index", i))?;
        if index != i as u64 {
            anyhow::bail!("Slide {} reports index {}", i, index);
        }
    }

    Ok(())
}

/// Assert the slide marked as current (`None` for an empty collection).
pub fn assert_current_index(json: &Value, expected: Option<usize>) -> Result<()> {
    let current = &json["content"]["current_index"];
    let actual = if current.is_null() {
        None
    } else {
        Some(current.as_u64().context("current_index is not a number")? as usize)
    };

    if actual != expected {
        anyhow::bail!("Expected current index {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Assert that every row carries a detail route under `/store/agent/`.
pub fn assert_paths_are_agent_routes(rows: &[Value]) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let path = row["path"]
            .as_str()
            .with_context(|| format!("Row {} missing path", i))?;
        if !path.starts_with("/store/agent/") {
            anyhow::bail!("Row {} has unexpected path {}", i, path);
        }
    }
    Ok(())
}
