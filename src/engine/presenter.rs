use crate::engine::file_name::{resolve, AssetId};
use crate::engine::protocol::{Gesture, ViewChange};
use crate::engine::timer::{Region, TimerQueue};
use crate::engine::typewriter::TypewriterReveal;
use crate::engine::view_state::ViewState;
use crate::model::catalog::Catalog;

/// Everything the detail view shows for the active (object, stage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord<'a> {
    pub object: usize,
    pub stage: usize,
    pub object_label: &'a str,
    pub stage_label: &'a str,
    pub time_range: &'a str,
    pub description: &'a str,
    pub asset: AssetId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub object: usize,
    pub stage: usize,
    pub object_label: &'a str,
    pub stage_label: &'a str,
    pub asset: AssetId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord<'a> {
    /// Row-major: object by object, stages left to right.
    pub cells: Vec<GridCell<'a>>,
    pub narrative: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Detail(DetailRecord<'a>),
    Summary(SummaryRecord<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub stage: usize,
    pub label: &'a str,
    pub asset: AssetId,
    pub active: bool,
}

/// Owns the view state and one reveal per region, and keeps them in step.
pub struct Presenter {
    catalog: Catalog,
    view: ViewState,
    timers: TimerQueue,
    detail_reveal: TypewriterReveal,
    summary_reveal: TypewriterReveal,
    char_interval_ms: u64,
}

impl Presenter {
    pub fn new(catalog: Catalog, char_interval_ms: u64) -> Self {
        let view = ViewState::new(catalog.object_count(), catalog.stage_count());
        let mut presenter = Self {
            catalog,
            view,
            timers: TimerQueue::new(),
            detail_reveal: TypewriterReveal::new(Region::Detail),
            summary_reveal: TypewriterReveal::new(Region::Summary),
            char_interval_ms: char_interval_ms.max(1),
        };
        let initial = presenter.view.select_object(0);
        presenter.apply(initial);
        presenter
    }

    /// Runs every timer due by `now_ms`. Returns whether any text changed.
    pub fn pump(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some(fired) = self.timers.pop_due(now_ms) {
            let reveal = match fired.region {
                Region::Detail => &mut self.detail_reveal,
                Region::Summary => &mut self.summary_reveal,
            };
            changed |= reveal.on_timer(fired.handle, &mut self.timers);
        }
        self.timers.settle(now_ms);
        changed
    }

    pub fn handle(&mut self, gesture: Gesture, now_ms: u64) -> ViewChange {
        self.pump(now_ms);

        let change = match gesture {
            Gesture::Pick { object, stage } => self.view.pick(object, stage),
            Gesture::AdvanceView => self.view.advance_view(),
            Gesture::ReturnToStart => self.view.return_to_start(),
        };
        tracing::info!(?gesture, ?change, "view changed");
        self.apply(change);
        change
    }

    fn apply(&mut self, change: ViewChange) {
        match change {
            ViewChange::ObjectSelected { object, stage }
            | ViewChange::StageSelected { object, stage } => {
                self.summary_reveal.cancel(&mut self.timers);
                let description = self.catalog.stage_info(stage).description.to_string();
                tracing::debug!(object, stage, "showing detail");
                self.detail_reveal
                    .start(description, self.char_interval_ms, &mut self.timers);
            }
            ViewChange::SummaryShown => {
                self.detail_reveal.cancel(&mut self.timers);
                let narrative = self.catalog.summary_narrative().to_string();
                self.summary_reveal
                    .start(narrative, self.char_interval_ms, &mut self.timers);
            }
        }
    }

    /// Applies to reveals started from now on.
    pub fn set_char_interval(&mut self, ms: u64) {
        self.char_interval_ms = ms.max(1);
    }

    pub fn char_interval_ms(&self) -> u64 {
        self.char_interval_ms
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn detail_reveal(&self) -> &TypewriterReveal {
        &self.detail_reveal
    }

    pub fn summary_reveal(&self) -> &TypewriterReveal {
        &self.summary_reveal
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.view.active_object() {
            Some(object) => Screen::Detail(self.detail(object, self.view.selected_stage())),
            None => Screen::Summary(self.summary()),
        }
    }

    /// Sidebar entries for the active object; empty on the summary.
    pub fn thumbnails(&self) -> Vec<Thumbnail<'_>> {
        let Some(object) = self.view.active_object() else {
            return Vec::new();
        };
        (0..self.catalog.stage_count())
            .map(|stage| Thumbnail {
                stage,
                label: self.catalog.stage_info(stage).label,
                asset: resolve(&self.catalog, object, stage),
                active: stage == self.view.selected_stage(),
            })
            .collect()
    }

    fn detail(&self, object: usize, stage: usize) -> DetailRecord<'_> {
        let info = self.catalog.stage_info(stage);
        DetailRecord {
            object,
            stage,
            object_label: self.catalog.object_label(object),
            stage_label: info.label,
            time_range: info.time_range,
            description: info.description,
            asset: resolve(&self.catalog, object, stage),
        }
    }

    fn summary(&self) -> SummaryRecord<'_> {
        let mut cells = Vec::with_capacity(self.catalog.object_count() * self.catalog.stage_count());
        for object in 0..self.catalog.object_count() {
            for stage in 0..self.catalog.stage_count() {
                cells.push(GridCell {
                    object,
                    stage,
                    object_label: self.catalog.object_label(object),
                    stage_label: self.catalog.stage_info(stage).label,
                    asset: resolve(&self.catalog, object, stage),
                });
            }
        }
        SummaryRecord {
            cells,
            narrative: self.catalog.summary_narrative(),
        }
    }
}
