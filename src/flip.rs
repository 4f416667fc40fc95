//! Split-flap digit board.
//!
//! The board tracks the 7 digits currently shown and a per-position flip
//! counter (0 = at rest). A new value produces a [`FlipPlan`]: a list of
//! timed `Begin`/`End` events for the positions whose digit changed, each
//! tagged with the generation of that value change. Events from an older
//! generation are ignored when applied, so timers that outlive a value
//! change can never leave a digit stuck mid-flip.

use crate::config::{ANIMATION_DURATION_MS, DIGIT_COUNT, DIGIT_DELAY_MS};
use crate::utils::{normalize_display_value, pad_digits};
use log::debug;

pub type Digits = [u8; DIGIT_COUNT];

/// A state transition for one digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipEvent {
    /// REST -> FLIPPING
    Begin { position: usize, generation: u64 },
    /// FLIPPING -> REST
    End { position: usize, generation: u64 },
}

impl FlipEvent {
    pub fn position(&self) -> usize {
        match *self {
            FlipEvent::Begin { position, .. } | FlipEvent::End { position, .. } => position,
        }
    }

    pub fn generation(&self) -> u64 {
        match *self {
            FlipEvent::Begin { generation, .. } | FlipEvent::End { generation, .. } => generation,
        }
    }
}

/// An event to fire `delay_ms` after the value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFlip {
    pub delay_ms: u32,
    pub event: FlipEvent,
}

/// Everything the host has to schedule for one value change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipPlan {
    pub generation: u64,
    pub steps: Vec<ScheduledFlip>,
}

impl FlipPlan {
    /// Positions that will animate, left to right.
    pub fn positions(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter_map(|s| match s.event {
                FlipEvent::Begin { position, .. } => Some(position),
                FlipEvent::End { .. } => None,
            })
            .collect()
    }
}

/// Immutable view of the board handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipFrame {
    pub digits: Digits,
    pub counters: [u32; DIGIT_COUNT],
}

impl FlipFrame {
    pub fn is_flipping(&self, position: usize) -> bool {
        self.counters.get(position).is_some_and(|&c| c > 0)
    }
}

#[derive(Debug, Default)]
pub struct FlipBoard {
    digits: Digits,
    counters: [u32; DIGIT_COUNT],
    generation: u64,
}

/// Positions where the two padded digit sequences differ.
pub fn changed_positions(old: &Digits, new: &Digits) -> Vec<usize> {
    old.iter()
        .zip(new.iter())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

impl FlipBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> FlipFrame {
        FlipFrame {
            digits: self.digits,
            counters: self.counters,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show a new value. All counters reset immediately and the returned plan
    /// staggers each changed position by `DIGIT_DELAY_MS`.
    pub fn retarget(&mut self, value: f64) -> FlipPlan {
        let next = pad_digits(normalize_display_value(value));
        let changed = changed_positions(&self.digits, &next);

        self.generation = self.generation.wrapping_add(1);
        self.counters = [0; DIGIT_COUNT];
        self.digits = next;

        let generation = self.generation;
        let steps = changed
            .iter()
            .flat_map(|&position| {
                let start = position as u32 * DIGIT_DELAY_MS;
                [
                    ScheduledFlip {
                        delay_ms: start,
                        event: FlipEvent::Begin { position, generation },
                    },
                    ScheduledFlip {
                        delay_ms: start + ANIMATION_DURATION_MS,
                        event: FlipEvent::End { position, generation },
                    },
                ]
            })
            .collect();

        debug!(
            "flip board generation {} shows {:?}, flipping {:?}",
            generation, next, changed
        );
        FlipPlan { generation, steps }
    }

    /// Apply a scheduled event. Returns `false` and leaves the board untouched
    /// when the event belongs to a superseded generation.
    pub fn apply(&mut self, event: FlipEvent) -> bool {
        if event.generation() != self.generation {
            debug!("dropping stale {:?} (current generation {})", event, self.generation);
            return false;
        }
        let Some(counter) = self.counters.get_mut(event.position()) else {
            return false;
        };
        match event {
            FlipEvent::Begin { .. } => *counter += 1,
            FlipEvent::End { .. } => *counter = 0,
        }
        true
    }
}

/// A display glyph: either a digit cell or a decorative separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Digit { position: usize, digit: u8 },
    Separator,
}

impl Glyph {
    /// Stable list key for the glyph at `index` in a [`grouped_glyphs`] layout.
    pub fn key(&self, index: usize) -> String {
        match self {
            Glyph::Digit { position, .. } => format!("digit-{}", position),
            Glyph::Separator => format!("sep-{}", index),
        }
    }
}

/// Lay the digits out with a thousands separator every three places from the right.
pub fn grouped_glyphs(digits: &Digits) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(DIGIT_COUNT + DIGIT_COUNT / 3);
    for (position, &digit) in digits.iter().enumerate() {
        let from_right = DIGIT_COUNT - position;
        if position > 0 && from_right % 3 == 0 {
            glyphs.push(Glyph::Separator);
        }
        glyphs.push(Glyph::Digit { position, digit });
    }
    glyphs
}

/// Static text of a frame, e.g. `0,001,350`.
pub fn render_static(digits: &Digits) -> String {
    grouped_glyphs(digits)
        .into_iter()
        .map(|g| match g {
            Glyph::Digit { digit, .. } => char::from(b'0' + digit),
            Glyph::Separator => ',',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn replay(board: &mut FlipBoard, plan: &FlipPlan) {
        let mut steps = plan.steps.clone();
        steps.sort_by_key(|s| s.delay_ms);
        for s in steps {
            assert!(board.apply(s.event));
        }
    }

    #[test]
    fn settled_rendering_is_padded_and_grouped() {
        let mut board = FlipBoard::new();
        for (value, expected) in [
            (0.0, "0,000,000"),
            (7.0, "0,000,007"),
            (1350.0, "0,001,350"),
            (123_456.0, "0,123,456"),
            (9_999_999.0, "9,999,999"),
        ] {
            let plan = board.retarget(value);
            replay(&mut board, &plan);
            assert_eq!(render_static(&board.frame().digits), expected);
            assert_eq!(board.frame().counters, [0; DIGIT_COUNT]);
        }
    }

    #[test]
    fn only_changed_positions_flip() {
        let mut board = FlipBoard::new();
        let plan = board.retarget(1350.0);
        assert_eq!(plan.positions(), vec![3, 4, 5]);

        let plan = board.retarget(1390.0);
        assert_eq!(plan.positions(), vec![5]);

        let plan = board.retarget(1390.2);
        assert!(plan.steps.is_empty());
    }

    #[test]
    fn schedule_cascades_left_to_right() {
        let mut board = FlipBoard::new();
        let plan = board.retarget(9_999_999.0);
        assert_eq!(plan.steps.len(), DIGIT_COUNT * 2);
        for s in &plan.steps {
            let start = s.event.position() as u32 * DIGIT_DELAY_MS;
            match s.event {
                FlipEvent::Begin { .. } => assert_eq!(s.delay_ms, start),
                FlipEvent::End { .. } => assert_eq!(s.delay_ms, start + ANIMATION_DURATION_MS),
            }
            assert_eq!(s.event.generation(), plan.generation);
        }
    }

    #[test]
    fn begin_and_end_drive_the_counter() {
        let mut board = FlipBoard::new();
        let plan = board.retarget(5.0);
        let begin = plan.steps[0].event;
        let end = plan.steps[1].event;

        assert!(board.apply(begin));
        assert!(board.frame().is_flipping(6));
        assert!(!board.frame().is_flipping(0));
        assert!(board.apply(end));
        assert!(!board.frame().is_flipping(6));
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut board = FlipBoard::new();
        let first = board.retarget(1111111.0);
        let second = board.retarget(2222222.0);
        assert_ne!(first.generation, second.generation);

        for s in &first.steps {
            assert!(!board.apply(s.event));
        }
        assert_eq!(board.frame().counters, [0; DIGIT_COUNT]);

        // a stale Begin arriving after a fresh End must not re-open the flip
        assert!(board.apply(second.steps[0].event));
        assert!(board.apply(second.steps[1].event));
        assert!(!board.apply(first.steps[0].event));
        assert!(!board.frame().is_flipping(0));
    }

    #[test]
    fn invalid_inputs_are_sanitized() {
        let mut board = FlipBoard::new();
        assert!(board.retarget(-42.0).steps.is_empty());
        assert!(board.retarget(f64::NAN).steps.is_empty());
        board.retarget(50_000_000.0);
        assert_eq!(render_static(&board.frame().digits), "9,999,999");
    }

    #[test]
    fn separators_sit_before_positions_one_and_four() {
        let glyphs = grouped_glyphs(&[0, 0, 0, 1, 3, 5, 0]);
        let separators: Vec<usize> = glyphs
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == Glyph::Separator)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(separators, vec![1, 5]);
        assert_eq!(glyphs.len(), DIGIT_COUNT + 2);
    }

    #[test]
    fn every_glyph_gets_a_distinct_key() {
        let glyphs = grouped_glyphs(&[1, 2, 3, 4, 5, 6, 7]);
        let keys: std::collections::HashSet<String> =
            glyphs.iter().enumerate().map(|(i, g)| g.key(i)).collect();
        assert_eq!(keys.len(), glyphs.len());
        assert_eq!(glyphs[0].key(0), "digit-0");
        assert_eq!(glyphs[1].key(1), "sep-1");
    }
}
