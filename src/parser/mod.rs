pub mod blocks;
pub mod samples;

use tracing::{info, warn};

use crate::error::BuildError;
use crate::model::Sample;

/// Two-pass pipeline: page markup → blocks → samples.
pub fn parse_page(html: &str) -> Result<Vec<Sample>, BuildError> {
    let blocks = blocks::classify_nodes(html)?;
    let samples = samples::group_samples(&blocks);

    info!(
        "Parsed {} samples in {} categories",
        samples.len(),
        samples::categories(&samples).len()
    );
    for s in &samples {
        if s.image.is_none() {
            warn!("Sample {} ({}) has no image", s.index, s.title);
        }
        if s.zip_url.is_none() {
            warn!("Sample {} ({}) has no zip download", s.index, s.title);
        }
    }

    Ok(samples)
}

// ── Tests ──
