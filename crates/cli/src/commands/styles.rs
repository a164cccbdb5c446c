//! `contextlens styles` — list the output styles a snapshot declares.

use contextlens_compose::Normalizer;
use tracing::warn;

use crate::{fetch, render};

pub async fn run(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match fetch::acquire(input).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "snapshot acquisition failed");
            println!("{}", render::EMPTY_STATE);
            return Ok(());
        }
    };

    let mut normalizer = Normalizer::new();
    normalizer.load(snapshot);

    let styles = normalizer.available_output_styles();
    if styles.is_empty() {
        println!("No output styles declared.");
        return Ok(());
    }

    let active = normalizer.active_output_style_name();
    for descriptor in styles {
        let marker = if active
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&descriptor.id))
        {
            "*"
        } else {
            " "
        };
        println!("{marker} {} ({})", descriptor.name, descriptor.id);
    }

    Ok(())
}
