use crate::engine::protocol::ViewChange;

/// Which view is on screen: `0..object_count` is an object's detail view,
/// `object_count` is the summary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    object_count: usize,
    stage_count: usize,
    active_view: usize,
    selected_stage: usize,
}

impl ViewState {
    /// Starts on the first object at its first stage.
    pub fn new(object_count: usize, stage_count: usize) -> Self {
        assert!(object_count > 0 && stage_count > 0, "empty view space");
        Self {
            object_count,
            stage_count,
            active_view: 0,
            selected_stage: 0,
        }
    }

    pub fn active_view(&self) -> usize {
        self.active_view
    }

    pub fn selected_stage(&self) -> usize {
        self.selected_stage
    }

    pub fn view_count(&self) -> usize {
        self.object_count + 1
    }

    pub fn is_summary(&self) -> bool {
        self.active_view == self.object_count
    }

    /// The object being viewed, or `None` on the summary.
    pub fn active_object(&self) -> Option<usize> {
        (!self.is_summary()).then_some(self.active_view)
    }

    pub fn select_object(&mut self, object: usize) -> ViewChange {
        assert!(
            object < self.object_count,
            "object index {object} out of range 0..{}",
            self.object_count
        );
        self.active_view = object;
        self.selected_stage = 0;
        ViewChange::ObjectSelected { object, stage: 0 }
    }

    pub fn select_stage(&mut self, stage: usize) -> ViewChange {
        assert!(
            stage < self.stage_count,
            "stage index {stage} out of range 0..{}",
            self.stage_count
        );
        let object = self
            .active_object()
            .unwrap_or_else(|| panic!("stage {stage} selected while the summary is shown"));
        self.selected_stage = stage;
        ViewChange::StageSelected { object, stage }
    }

    pub fn show_summary(&mut self) -> ViewChange {
        self.active_view = self.object_count;
        ViewChange::SummaryShown
    }

    pub fn cycle_forward(&mut self) -> ViewChange {
        let next = (self.active_view + 1) % self.view_count();
        if next == self.object_count {
            self.show_summary()
        } else {
            self.select_object(next)
        }
    }

    pub fn reset_to_first_object(&mut self) -> ViewChange {
        self.select_object(0)
    }

    /// Thumbnail / grid cell activation. Re-picking within the active
    /// object keeps the view and only moves the stage.
    pub fn pick(&mut self, object: usize, stage: usize) -> ViewChange {
        if self.active_object() == Some(object) {
            return self.select_stage(stage);
        }
        self.select_object(object);
        match self.select_stage(stage) {
            ViewChange::StageSelected { object, stage } => {
                ViewChange::ObjectSelected { object, stage }
            }
            other => other,
        }
    }

    pub fn advance_view(&mut self) -> ViewChange {
        self.cycle_forward()
    }

    pub fn return_to_start(&mut self) -> ViewChange {
        self.reset_to_first_object()
    }
}
