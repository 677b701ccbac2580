//! Hero headline that types and deletes a rotating set of phrases.

pub const PHRASES: [&str; 6] = ["CAN", "Code.", "Algo.", "Hack.", "Build.", "Win."];

pub const TYPE_DELAY_MS: u32 = 120;
pub const DELETE_DELAY_MS: u32 = 80;
pub const HOLD_DELAY_MS: u32 = 1800;
pub const NEXT_PHRASE_DELAY_MS: u32 = 300;

#[derive(Clone, Debug)]
pub struct TypingEffect {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self::new(PHRASES.iter().map(|p| p.to_string()).collect())
    }
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advances by one character. Returns the text to show and how long to
    /// wait before the next tick.
    pub fn tick(&mut self) -> (String, u32) {
        let Some(current) = self.phrases.get(self.phrase) else {
            return (String::new(), HOLD_DELAY_MS);
        };
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.chars().take(self.chars).collect();

        let mut delay = if self.deleting { DELETE_DELAY_MS } else { TYPE_DELAY_MS };
        if !self.deleting && self.chars == len {
            delay = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = NEXT_PHRASE_DELAY_MS;
        }
        (text, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut effect = TypingEffect::new(vec!["AB".into(), "C".into()]);

        assert_eq!(effect.tick(), ("A".to_string(), TYPE_DELAY_MS));
        assert_eq!(effect.tick(), ("AB".to_string(), HOLD_DELAY_MS));
        assert_eq!(effect.tick(), ("A".to_string(), DELETE_DELAY_MS));
        assert_eq!(effect.tick(), ("".to_string(), NEXT_PHRASE_DELAY_MS));
        assert_eq!(effect.tick(), ("C".to_string(), HOLD_DELAY_MS));
        assert_eq!(effect.tick(), ("".to_string(), NEXT_PHRASE_DELAY_MS));
        // wraps back to the first phrase
        assert_eq!(effect.tick(), ("A".to_string(), TYPE_DELAY_MS));
    }

    #[test]
    fn multibyte_phrases_are_typed_per_character() {
        let mut effect = TypingEffect::new(vec!["캔".into()]);
        assert_eq!(effect.tick(), ("캔".to_string(), HOLD_DELAY_MS));
    }

    #[test]
    fn default_cycles_club_phrases() {
        let mut effect = TypingEffect::default();
        let mut shown = Vec::new();
        for _ in 0..40 {
            let (text, delay) = effect.tick();
            if delay == HOLD_DELAY_MS {
                shown.push(text);
            }
        }
        assert_eq!(&shown[..3], &["CAN", "Code.", "Algo."]);
    }

    #[test]
    fn no_phrases_shows_nothing() {
        let mut effect = TypingEffect::new(Vec::new());
        assert_eq!(effect.tick().0, "");
    }
}
