use crate::entities::Background;

impl Background {
    /// The first update after construction switches slides immediately.
    pub fn new(slide_count: usize, rate: u32) -> Self {
        Background {
            slide_count,
            current: 0,
            rate,
            shown_for: rate,
        }
    }

    pub fn update(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        if self.shown_for >= self.rate {
            self.current = (self.current + 1) % self.slide_count;
            self.shown_for = 1;
        } else {
            self.shown_for += 1;
        }
    }
}
