/// Sections fade in once this share of them is on screen
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.08;
/// Activity cards fade in once this share of them is on screen
pub const CARD_REVEAL_THRESHOLD: f64 = 0.15;
/// Gap between neighbouring activity cards fading in
pub const CARD_STAGGER_MS: u32 = 80;
/// The stats block starts its counters once half of it is on screen
pub const COUNTER_START_THRESHOLD: f64 = 0.5;

/// Fires once, the first time the visible ratio reaches the threshold, and
/// stays fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnceVisible {
    threshold: f64,
    fired: bool,
}

impl OnceVisible {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// `true` only for the ratio that crosses the threshold first.
    pub fn update(&mut self, ratio: f64) -> bool {
        if self.fired || ratio < self.threshold || ratio <= 0.0 {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Fade-in delay of the `index`-th card of a row revealed together
pub fn card_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_STAGGER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut latch = OnceVisible::new(SECTION_REVEAL_THRESHOLD);
        assert!(!latch.update(0.0));
        assert!(!latch.update(0.05));
        assert!(!latch.fired());

        assert!(latch.update(0.08));
        assert!(latch.fired());
        assert!(!latch.update(0.9));
    }

    #[test]
    fn leaving_the_viewport_does_not_reset() {
        let mut latch = OnceVisible::new(COUNTER_START_THRESHOLD);
        assert!(latch.update(0.75));
        assert!(!latch.update(0.0));
        assert!(!latch.update(0.6));
        assert!(latch.fired());
    }

    #[test]
    fn zero_threshold_still_needs_the_element_on_screen() {
        let mut latch = OnceVisible::new(0.0);
        assert!(!latch.update(0.0));
        assert!(latch.update(0.01));
    }

    #[test]
    fn cards_fade_in_one_after_another() {
        assert_eq!(card_delay_ms(0), 0);
        assert_eq!(card_delay_ms(1), 80);
        assert_eq!(card_delay_ms(3), 240);
    }
}
