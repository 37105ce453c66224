use crate::configs::FadeInConfig;
use crate::platform::{ Document, Element };

/// One-shot reveal of cards as they scroll into view.
pub struct FadeIn {
    config: FadeInConfig,
}

impl FadeIn {
    pub fn new(config: FadeInConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FadeInConfig {
        &self.config
    }

    /// Hides every card and returns them for the intersection watcher.
    pub fn prepare<D: Document>(&self, document: &D) -> Vec<D::Element> {
        let transition = format!(
            "opacity {secs}s ease, transform {secs}s ease",
            secs = self.config.duration_secs
        );
        let hidden = format!("translateY({}px)", self.config.offset_px);

        let cards: Vec<_> = self.config.selectors
            .iter()
            .flat_map(|selector| document.query_all(selector))
            .collect();
        for card in &cards {
            card.set_style("opacity", "0");
            card.set_style("transform", &hidden);
            card.set_style("transition", &transition);
        }
        log::debug!("Prepared {} cards for fade-in", cards.len());
        cards
    }

    pub fn reveal<E: Element>(&self, card: &E) {
        card.set_style("opacity", "1");
        card.set_style("transform", "translateY(0)");
    }

    /// Leaving the viewport never hides a card again.
    pub fn on_intersection<E: Element>(&self, entries: impl IntoIterator<Item = (E, bool)>) {
        for (card, intersecting) in entries {
            if intersecting {
                self.reveal(&card);
            }
        }
    }
}
