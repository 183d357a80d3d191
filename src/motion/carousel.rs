use crate::config::NARROW_VIEWPORT_MAX_WIDTH;

/// Items in display order plus the index currently marked active.
///
/// Every tick moves the front item to the back and re-centres the active
/// mark on `len / 2`, so with at least one item exactly one is active.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    active_index: Option<usize>,
}

impl<T> CarouselState<T> {
    pub fn new(items: Vec<T>) -> Self {
        let active_index = middle_index(items.len());
        Self {
            items,
            active_index,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active(&self) -> Option<&T> {
        self.active_index.and_then(|i| self.items.get(i))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn tick(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.rotate_left(1);
        self.active_index = middle_index(self.items.len());
    }
}

/// Lower middle for even counts; `None` when there is nothing to centre.
pub fn middle_index(len: usize) -> Option<usize> {
    (len > 0).then(|| len / 2)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    pub fn is_narrow(&self) -> bool {
        self.width <= NARROW_VIEWPORT_MAX_WIDTH
    }
}

/// Horizontal track offset in percent. Wide viewports slide the track so the
/// middle item sits in view; narrow ones stack the cards and don't slide.
pub fn render<T>(state: &CarouselState<T>, viewport: &Viewport, items_per_row: f64) -> f64 {
    if viewport.is_narrow() || items_per_row <= 0.0 {
        return 0.0;
    }
    match state.active_index() {
        Some(middle) => -(middle as f64) * (100.0 / items_per_row),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Viewport = Viewport { width: 1280.0 };
    const NARROW: Viewport = Viewport { width: 390.0 };

    #[test]
    fn test_tick_rotates_front_to_back() {
        let mut state = CarouselState::new(vec!['A', 'B', 'C', 'D', 'E']);
        state.tick();
        assert_eq!(state.items(), &['B', 'C', 'D', 'E', 'A']);
        assert_eq!(state.active_index(), Some(2));
        assert_eq!(state.active(), Some(&'D'));
    }

    #[test]
    fn test_even_count_picks_lower_middle() {
        let mut state = CarouselState::new(vec![1, 2, 3, 4]);
        assert_eq!(state.active_index(), Some(2));
        state.tick();
        assert_eq!(state.items(), &[2, 3, 4, 1]);
        assert_eq!(state.active(), Some(&4));
    }

    #[test]
    fn test_single_item_stays_active() {
        let mut state = CarouselState::new(vec!["only"]);
        for _ in 0..3 {
            state.tick();
            assert_eq!(state.items(), &["only"]);
            assert_eq!(state.active_index(), Some(0));
        }
    }

    #[test]
    fn test_empty_carousel_is_a_no_op() {
        let mut state: CarouselState<u8> = CarouselState::new(Vec::new());
        state.tick();
        assert!(state.items().is_empty());
        assert_eq!(state.active_index(), None);
        assert_eq!(render(&state, &WIDE, 3.0), 0.0);
    }

    #[test]
    fn test_exactly_one_active_after_every_tick() {
        let mut state = CarouselState::new((0..7).collect::<Vec<_>>());
        for _ in 0..10 {
            state.tick();
            let active = (0..state.items().len()).filter(|i| state.is_active(*i)).count();
            assert_eq!(active, 1);
            assert_eq!(state.active_index(), Some(3));
        }
    }

    #[test]
    fn test_full_cycle_restores_order() {
        let mut state = CarouselState::new(vec![1, 2, 3]);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_render_offsets_wide_viewport() {
        let state = CarouselState::new(vec![0; 5]);
        let offset = render(&state, &WIDE, 3.0);
        assert!((offset - (-200.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_render_narrow_viewport_has_no_offset() {
        let state = CarouselState::new(vec![0; 5]);
        assert_eq!(render(&state, &NARROW, 3.0), 0.0);
    }
}
