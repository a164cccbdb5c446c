//! `contextlens show` — render the normalized layer view.

use contextlens_compose::Normalizer;
use tracing::warn;

use crate::{fetch, render};

pub async fn run(input: &str, style: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match fetch::acquire(input).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "snapshot acquisition failed");
            println!("{}", render::EMPTY_STATE);
            return Ok(());
        }
    };

    let mut normalizer = Normalizer::new();
    let mut view = normalizer.load(snapshot);
    if let Some(style_id) = style {
        view = normalizer.select_output_style(style_id)?;
    }

    print!("{}", render::render_view(&view));
    Ok(())
}
