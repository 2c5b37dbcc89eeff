//! HTML rendering of a single card.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::assets::CardAssets;
use crate::layout::Layout;

// The `.html` suffix turns on minijinja's HTML auto-escaping, so phrase
// text is always escaped.
const CARD_TEMPLATE: &str = "card.html";

#[derive(Error, Debug)]
#[error("failed to render card: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders layouts into complete HTML documents.
///
/// Title, round and assets are fixed for a run; each call to
/// [`CardRenderer::render`] is independent of the others.
pub struct CardRenderer {
    env: Environment<'static>,
    title: String,
    round: u8,
    assets: CardAssets,
}

impl CardRenderer {
    pub fn new(title: &str, round: u8, assets: CardAssets) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(CARD_TEMPLATE, include_str!("templates/card.html"))?;

        Ok(Self {
            env,
            title: title.to_string(),
            round,
            assets,
        })
    }

    /// Renders one card. `number` is printed in the footer.
    pub fn render(&self, layout: &Layout, number: usize) -> Result<String, RenderError> {
        let template = self.env.get_template(CARD_TEMPLATE)?;
        let rows: Vec<&[String]> = layout.rows().collect();

        let html = template.render(context! {
            title => &self.title,
            round => self.round,
            number => number,
            rows => rows,
            assets => &self.assets,
        })?;

        Ok(html)
    }
}
