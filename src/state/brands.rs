/// Brands strip: a running marquee by default, a static grid when expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrandsView {
    expanded: bool,
}

impl BrandsView {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Collapse"
        } else {
            "Expand me"
        }
    }

    pub fn marquee_hidden(&self) -> bool {
        self.expanded
    }

    pub fn marquee_paused(&self) -> bool {
        self.expanded
    }

    pub fn grid_hidden(&self) -> bool {
        !self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_by_default() {
        let view = BrandsView::default();
        assert_eq!(view.label(), "Expand me");
        assert!(!view.marquee_hidden());
        assert!(!view.marquee_paused());
        assert!(view.grid_hidden());
    }

    #[test]
    fn test_expanded_shows_grid() {
        let view = BrandsView::default().toggled();
        assert!(view.is_expanded());
        assert_eq!(view.label(), "Collapse");
        assert!(view.marquee_hidden());
        assert!(view.marquee_paused());
        assert!(!view.grid_hidden());
    }
}
