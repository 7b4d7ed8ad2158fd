/// Reveals a piece of text one character per tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    end: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end: 0,
        }
    }

    /// Reveal the next character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        match self.text[self.end..].chars().next() {
            Some(c) => {
                self.end += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.end]
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.end == self.text.len()
    }

    pub fn reset(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.end = 0;
    }

    pub fn finish(&mut self) {
        self.end = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_in_order() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        assert!(tw.tick());
        assert_eq!(tw.visible(), "a");
        assert!(tw.tick());
        assert!(tw.tick());
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_done());
        assert!(!tw.tick());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("héllo 👋");
        let mut steps = 0;
        while tw.tick() {
            steps += 1;
            // slicing must stay on char boundaries
            assert!(tw.text().starts_with(tw.visible()));
        }
        assert_eq!(steps, "héllo 👋".chars().count());
        assert_eq!(tw.visible(), "héllo 👋");
    }

    #[test]
    fn test_reset_and_finish() {
        let mut tw = Typewriter::new("first");
        tw.tick();
        tw.reset("second");
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_done());
        tw.finish();
        assert_eq!(tw.visible(), "second");

        let mut empty = Typewriter::default();
        assert!(empty.is_done());
        assert!(!empty.tick());
    }
}
