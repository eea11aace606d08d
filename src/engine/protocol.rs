/// Normalized user interaction, already detached from raw input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Thumbnail or grid cell activation.
    Pick { object: usize, stage: usize },
    AdvanceView,
    ReturnToStart,
}

/// What the presenter has to redraw after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    /// A different object became active: rebuild its thumbnail strip.
    ObjectSelected { object: usize, stage: usize },

    /// Same object, new stage: only the main image and text change.
    StageSelected { object: usize, stage: usize },

    SummaryShown,
}
