//! Meme rendering into the output container
//!
//! Builds the container children for one meme: the template image followed by
//! the top and bottom caption overlays. Also owns the random template pick.

use rand::Rng;

use crate::data::MemeRecord;
use crate::page::{OutputElement, OverlayAnchor, OverlayStyle, Page};

/// Source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Unseeded draws from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same draw; for reproducible selection
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Index chosen by `floor(r * len)` for a draw `r`
///
/// Returns `None` for an empty list. Draws are clamped so that an
/// out-of-range source still yields a valid index.
pub fn pick_index(len: usize, random: &mut dyn RandomSource) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let r = random.next_unit();
    let index = (r * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

/// Picks one meme uniformly at random
pub fn pick_meme<'a>(
    memes: &'a [MemeRecord],
    random: &mut dyn RandomSource,
) -> Option<&'a MemeRecord> {
    pick_index(memes.len(), random).map(|i| &memes[i])
}

/// Removes everything from the output container
pub fn clear(page: &mut Page) {
    page.output.clear();
}

/// Replaces the output container contents with `meme` and both captions
///
/// Children are appended in order: image, top overlay, bottom overlay.
pub fn render_meme(page: &mut Page, meme: &MemeRecord, top_text: &str, bottom_text: &str) {
    clear(page);

    let output = &mut page.output;
    output.styled = true;

    output.children.push(OutputElement::Image {
        url: meme.url.clone(),
        alt: meme.name.clone(),
        width: meme.width,
        height: meme.height,
    });
    output.children.push(OutputElement::Overlay {
        anchor: OverlayAnchor::Top,
        text: top_text.to_string(),
        style: OverlayStyle::default(),
    });
    output.children.push(OutputElement::Overlay {
        anchor: OverlayAnchor::Bottom,
        text: bottom_text.to_string(),
        style: OverlayStyle::default(),
    });
}
