//! Outcome of a widget mutation, used by hosts to decide whether to repaint.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderImpact {
    pub requires_redraw: bool,
}

impl RenderImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_any_redraw() {
        assert!(!RenderImpact::none().combine(RenderImpact::none()).requires_redraw);
        assert!(RenderImpact::none().combine(RenderImpact::redraw()).requires_redraw);
        assert!(RenderImpact::redraw().combine(RenderImpact::none()).requires_redraw);
    }
}
