//! # Catalog Walk
//!
//! Demonstrates the relation engine on an inlined catalog document: every
//! relation in the demo is embedded, so the walk needs no network even though
//! the engine is wired with the production transport.

use hal_relations::{Relatable, Related};
use hal_sample::catalog;
use hal_sample::telemetry::setup_tracing;
use serde_json::json;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), hal_relations::Error> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("starting catalog walk");

    let engine = catalog::build_http_engine();
    let book = catalog::open_document(
        &engine,
        json!({
            "title": "Transport Phenomena",
            "_embedded": {
                "chapter": [
                    {
                        "title": "Viscosity and the Mechanism of Momentum Transport",
                        "_embedded": {
                            "section": [
                                { "title": "Newton's Law of Viscosity" },
                                { "title": "Generalized Newton's Law" },
                                { "title": "Pressure and Temperture Dependence" },
                            ]
                        }
                    },
                    { "title": "Shell Momentum Balances" },
                ]
            }
        }),
    );

    let span = info_span!("chapter_walk");
    async {
        let chapters = match book.relate("chapter", None).await? {
            Related::Many(chapters) => chapters,
            Related::One(only) => vec![only],
            Related::Empty => Vec::new(),
        };

        for chapter in &chapters {
            let title = chapter.value()["title"].as_str().unwrap_or("<untitled>");
            let sections = chapter.count("section", None);
            info!(title, sections, "chapter");

            if sections > 0 {
                if let Some(inner) = chapter.relate("section", None).await?.into_many() {
                    for section in &inner {
                        let title = section.value()["title"].as_str().unwrap_or("<untitled>");
                        info!(title, "section");
                    }
                }
            }
        }
        Ok::<(), hal_relations::Error>(())
    }
    .instrument(span)
    .await?;

    info!("catalog walk finished");
    Ok(())
}
