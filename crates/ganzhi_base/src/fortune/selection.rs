//! Period selection cursor and the memoizing period arena.
//!
//! The cursor is a plain value owned by the caller; transitions return a new
//! cursor and never touch generated data. [`FortuneCache`] borrows one
//! timeline for its whole life and stores children keyed by decade index or
//! `(decade index, year)`. An entry is replaced wholesale every time its key
//! is selected, so a view never mixes children from two selections or two
//! timelines.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::relation::TenRelationResolver;

use super::decade::FortuneTimeline;
use super::types::{AnnualPeriod, DecadeChildren, FortunePeriod, MonthlyPeriod};

/// Which period, if any, the caller has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SelectionCursor {
    #[default]
    NoPeriodSelected,
    DecadePeriodSelected {
        decade: usize,
    },
    AnnualPeriodSelected {
        decade: usize,
        year: i32,
    },
}

impl SelectionCursor {
    /// Select decade `index`. Valid from every state.
    pub const fn select_decade(self, index: usize) -> Self {
        Self::DecadePeriodSelected { decade: index }
    }

    /// Select `year` inside the current decade.
    ///
    /// Without a selected decade the cursor is returned unchanged.
    pub const fn select_annual(self, year: i32) -> Self {
        match self {
            Self::NoPeriodSelected => self,
            Self::DecadePeriodSelected { decade } | Self::AnnualPeriodSelected { decade, .. } => {
                Self::AnnualPeriodSelected { decade, year }
            }
        }
    }

    /// Selected decade index, if any.
    pub const fn decade(&self) -> Option<usize> {
        match *self {
            Self::NoPeriodSelected => None,
            Self::DecadePeriodSelected { decade } | Self::AnnualPeriodSelected { decade, .. } => {
                Some(decade)
            }
        }
    }

    /// Selected year; set only in the annual state.
    pub const fn year(&self) -> Option<i32> {
        match *self {
            Self::AnnualPeriodSelected { year, .. } => Some(year),
            _ => None,
        }
    }
}

static NO_CHILDREN: DecadeChildren = DecadeChildren {
    annual: Vec::new(),
    minor: Vec::new(),
};

/// Everything visible under one cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionView<'a> {
    pub cursor: SelectionCursor,
    pub decade: Option<&'a FortunePeriod>,
    pub children: &'a DecadeChildren,
    pub annual: Option<&'a AnnualPeriod>,
    pub monthly: &'a [MonthlyPeriod],
}

/// Arena of children generated from one timeline, keyed by selection.
#[derive(Debug, Clone)]
pub struct FortuneCache<'t> {
    timeline: &'t FortuneTimeline,
    decades: HashMap<usize, DecadeChildren>,
    months: HashMap<(usize, i32), Vec<MonthlyPeriod>>,
}

impl<'t> FortuneCache<'t> {
    /// An empty cache over `timeline`.
    pub fn new(timeline: &'t FortuneTimeline) -> Self {
        Self {
            timeline,
            decades: HashMap::new(),
            months: HashMap::new(),
        }
    }

    /// The timeline every cached entry was generated from.
    pub fn timeline(&self) -> &'t FortuneTimeline {
        self.timeline
    }

    /// Number of cached decade and month entries.
    pub fn len(&self) -> usize {
        self.decades.len() + self.months.len()
    }

    /// True when nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.decades.clear();
        self.months.clear();
    }

    /// Regenerate the children named by `cursor` and return the view.
    ///
    /// Out-of-range keys are evicted instead of cached as empty entries.
    pub fn select<R>(&mut self, cursor: SelectionCursor, resolver: &R) -> SelectionView<'_>
    where
        R: TenRelationResolver + ?Sized,
    {
        debug!(?cursor, "fortune selection");
        if let Some(decade) = cursor.decade() {
            let children = self.timeline.decade_children(decade, resolver);
            if children.is_empty() {
                self.decades.remove(&decade);
            } else {
                self.decades.insert(decade, children);
            }
        }
        if let SelectionCursor::AnnualPeriodSelected { decade, year } = cursor {
            let months = self.timeline.monthly_children(decade, year, resolver);
            if months.is_empty() {
                self.months.remove(&(decade, year));
            } else {
                self.months.insert((decade, year), months);
            }
        }
        self.view(cursor)
    }

    /// View of what is already cached for `cursor`, without regenerating.
    pub fn view(&self, cursor: SelectionCursor) -> SelectionView<'_> {
        let decade_index = cursor.decade();
        let children = decade_index
            .and_then(|d| self.decades.get(&d))
            .unwrap_or(&NO_CHILDREN);
        let (annual, monthly) = match cursor {
            SelectionCursor::AnnualPeriodSelected { decade, year } => (
                children.annual.iter().find(|a| a.year == year),
                self.months
                    .get(&(decade, year))
                    .map_or(&[][..], Vec::as_slice),
            ),
            _ => (None, &[][..]),
        };
        SelectionView {
            cursor,
            decade: decade_index.and_then(|d| self.timeline.decade(d)),
            children,
            annual,
            monthly,
        }
    }
}
