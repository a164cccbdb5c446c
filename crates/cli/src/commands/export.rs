//! `contextlens export` — print the normalized view as JSON.

use contextlens_compose::Normalizer;
use contextlens_core::NormalizedView;
use tracing::warn;

use crate::fetch;

pub async fn run(input: &str, style: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match fetch::acquire(input).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "snapshot acquisition failed");
            println!("{}", serde_json::to_string_pretty(&NormalizedView::default())?);
            return Ok(());
        }
    };

    let mut normalizer = Normalizer::new();
    let mut view = normalizer.load(snapshot);
    if let Some(style_id) = style {
        view = normalizer.select_output_style(style_id)?;
    }

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
