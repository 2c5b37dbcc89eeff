//! Check command - validates input without writing any cards.

use owo_colors::OwoColorize;

use crate::layout::CELLS;
use crate::request::CardRequest;

/// Describe how layouts will be drawn from the pool.
pub fn pool_summary(request: &CardRequest) -> String {
    let draw = if request.pool.len() == CELLS {
        "every card uses all phrases".to_string()
    } else {
        format!("each card samples {} of them", CELLS)
    };
    format!(
        "{} phrases ({}), {} copies, round {}",
        request.pool.len(),
        draw,
        request.copies,
        request.round
    )
}

/// Report a request that passed validation.
pub fn check(request: &CardRequest) {
    println!("{}: {}", "ok".bright_green().bold(), pool_summary(request));
}
