//! Keeping the reader's place while search results change size.
//!
//! Changing the search term grows or shrinks the list above whatever the
//! user is looking at. The correction is a two-phase operation: measure an
//! anchor element before the state change, then, once the UI has laid out
//! the new results, measure it again and scroll by the difference.

/// Something on screen whose vertical position can be measured.
pub trait ScrollAnchor {
    /// Distance from the top of the viewport, or `None` when the anchor is
    /// not currently laid out.
    fn top(&self) -> Option<f64>;
}

pub trait Viewport {
    fn scroll_by(&mut self, dy: f64);
}

/// A correction captured before a state change and applied after the next
/// layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use = "apply the correction after the next layout"]
pub struct PendingScroll {
    before: f64,
}

impl PendingScroll {
    pub fn capture<A: ScrollAnchor + ?Sized>(anchor: &A) -> Option<Self> {
        anchor.top().map(|before| Self { before })
    }

    pub fn before(&self) -> f64 {
        self.before
    }

    /// Measure the anchor again and scroll by how far it moved. Returns the
    /// applied delta, or `None` when the anchor has disappeared.
    pub fn apply<A, V>(self, anchor: &A, viewport: &mut V) -> Option<f64>
    where
        A: ScrollAnchor + ?Sized,
        V: Viewport + ?Sized,
    {
        let after = anchor.top()?;
        let delta = after - self.before;
        viewport.scroll_by(delta);
        Some(delta)
    }
}
