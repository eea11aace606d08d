use crate::engine::timer::{Region, TimerHandle, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing,
    Complete,
}

/// Progressive character reveal for one region.
///
/// The only timer a session may own is the one in `timer`; every path that
/// replaces or stops the session cancels it first, so a superseded session
/// can never append into the region again.
#[derive(Debug)]
pub struct TypewriterReveal {
    region: Region,
    full_text: String,
    // Byte offset of the first unrevealed char.
    cursor: usize,
    revealed_count: usize,
    interval_ms: u64,
    timer: Option<TimerHandle>,
    state: RevealState,
}

impl TypewriterReveal {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            full_text: String::new(),
            cursor: 0,
            revealed_count: 0,
            interval_ms: 0,
            timer: None,
            state: RevealState::Idle,
        }
    }

    /// Starts revealing `text`, dropping whatever session was running.
    ///
    /// The first character is scheduled with no delay; each following one
    /// `interval_ms` after its predecessor.
    pub fn start(&mut self, text: impl Into<String>, interval_ms: u64, timers: &mut TimerQueue) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
            tracing::debug!(region = ?self.region, "superseded unfinished reveal");
        }

        self.full_text = text.into();
        self.cursor = 0;
        self.revealed_count = 0;
        self.interval_ms = interval_ms;

        if self.full_text.is_empty() {
            self.state = RevealState::Complete;
            return;
        }

        self.state = RevealState::Revealing;
        self.timer = Some(timers.schedule(self.region, 0));
        tracing::debug!(
            region = ?self.region,
            chars = self.full_text.chars().count(),
            interval_ms,
            "reveal started"
        );
    }

    /// Stops the session where it is. Revealed text stays visible.
    pub fn cancel(&mut self, timers: &mut TimerQueue) {
        if self.state != RevealState::Revealing {
            return;
        }
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
        self.state = RevealState::Idle;
        tracing::debug!(
            region = ?self.region,
            revealed = self.revealed_count,
            "reveal cancelled"
        );
    }

    /// Timer callback. Handles that do not belong to the live session are
    /// ignored. Returns whether a character was appended.
    pub fn on_timer(&mut self, handle: TimerHandle, timers: &mut TimerQueue) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        self.timer = None;
        self.tick(timers)
    }

    /// Appends the next character. A no-op unless revealing.
    pub fn tick(&mut self, timers: &mut TimerQueue) -> bool {
        if self.state != RevealState::Revealing {
            return false;
        }
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }

        let Some(ch) = self.full_text[self.cursor..].chars().next() else {
            self.state = RevealState::Complete;
            return false;
        };
        self.cursor += ch.len_utf8();
        self.revealed_count += 1;

        if self.cursor < self.full_text.len() {
            self.timer = Some(timers.schedule(self.region, self.interval_ms));
        } else {
            self.state = RevealState::Complete;
            tracing::debug!(region = ?self.region, chars = self.revealed_count, "reveal complete");
        }
        true
    }

    pub fn revealed(&self) -> &str {
        &self.full_text[..self.cursor]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == RevealState::Complete
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(reveal: &mut TypewriterReveal, timers: &mut TimerQueue) -> bool {
        match timers.fire_next() {
            Some(fired) => reveal.on_timer(fired.handle, timers),
            None => false,
        }
    }

    #[test]
    fn reveals_one_char_per_tick() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Detail);
        reveal.start("abc", 15, &mut timers);
        assert_eq!(reveal.state(), RevealState::Revealing);
        assert_eq!(reveal.revealed(), "");

        assert!(fire(&mut reveal, &mut timers));
        assert_eq!(reveal.revealed(), "a");

        assert!(fire(&mut reveal, &mut timers));
        assert!(fire(&mut reveal, &mut timers));
        assert_eq!(reveal.revealed(), "abc");
        assert_eq!(reveal.revealed_count(), 3);
        assert!(reveal.is_complete());
        assert!(timers.is_empty());

        assert!(!fire(&mut reveal, &mut timers));
        assert!(!reveal.tick(&mut timers));
        assert_eq!(reveal.revealed(), "abc");
    }

    #[test]
    fn ticks_are_spaced_by_interval() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Detail);
        reveal.start("abc", 15, &mut timers);

        let deadlines: Vec<u64> = std::iter::from_fn(|| {
            let fired = timers.fire_next()?;
            reveal.on_timer(fired.handle, &mut timers);
            Some(fired.due_ms)
        })
        .collect();

        assert_eq!(deadlines, vec![0, 15, 30]);
    }

    #[test]
    fn empty_text_completes_without_timer() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Summary);
        reveal.start("", 15, &mut timers);

        assert!(reveal.is_complete());
        assert_eq!(reveal.revealed(), "");
        assert!(timers.is_empty());
    }

    #[test]
    fn restart_cancels_pending_tick_and_never_interleaves() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Detail);
        reveal.start("OLDTEXT", 15, &mut timers);
        fire(&mut reveal, &mut timers);
        fire(&mut reveal, &mut timers);
        assert_eq!(reveal.revealed(), "OL");
        assert_eq!(timers.len(), 1);

        reveal.start("new", 15, &mut timers);
        assert_eq!(timers.pending_for(Region::Detail), 1);

        let mut trace = vec![reveal.revealed().to_string()];
        while fire(&mut reveal, &mut timers) {
            trace.push(reveal.revealed().to_string());
        }

        assert_eq!(trace, vec!["", "n", "ne", "new"]);
        assert!(reveal.is_complete());
        assert!(timers.is_empty());
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Detail);
        reveal.start("first", 15, &mut timers);
        let stale = timers.fire_next().unwrap().handle;
        reveal.start("second", 15, &mut timers);

        assert!(!reveal.on_timer(stale, &mut timers));
        assert_eq!(reveal.revealed(), "");
    }

    #[test]
    fn cancel_keeps_partial_text_and_stops_timer() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Summary);
        reveal.start("abcdef", 15, &mut timers);
        fire(&mut reveal, &mut timers);
        fire(&mut reveal, &mut timers);

        reveal.cancel(&mut timers);

        assert_eq!(reveal.state(), RevealState::Idle);
        assert_eq!(reveal.revealed(), "ab");
        assert!(timers.is_empty());
        assert!(!reveal.tick(&mut timers));
    }

    #[test]
    fn multibyte_text_reveals_whole_chars() {
        let mut timers = TimerQueue::new();
        let mut reveal = TypewriterReveal::new(Region::Detail);
        reveal.start("é→x", 1, &mut timers);

        fire(&mut reveal, &mut timers);
        assert_eq!(reveal.revealed(), "é");
        fire(&mut reveal, &mut timers);
        assert_eq!(reveal.revealed(), "é→");
        fire(&mut reveal, &mut timers);
        assert_eq!(reveal.revealed_count(), 3);
        assert!(reveal.is_complete());
    }
}
