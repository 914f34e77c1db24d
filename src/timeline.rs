//! Dispatch interval accumulator.
//!
//! The driver reports one interval per dispatch. Unit-slice policies (SRTF,
//! preemptive priority) report a run of one-tick intervals for an
//! uninterrupted burst; the accumulator merges contiguous same-process
//! intervals so the final timeline holds one segment per stretch of service.

use crate::core::{Task, Ticks};

/// Display colors cycled over tasks by input index. Purely cosmetic: no
/// engine decision reads them.
pub const PALETTE: [&str; 8] = [
    "#4299E1", // blue
    "#48BB78", // green
    "#F56565", // red
    "#ED8936", // orange
    "#9F7AEA", // purple
    "#38B2AC", // teal
    "#ED64A6", // pink
    "#ECC94B", // yellow
];

/// One compacted segment of CPU service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttInterval {
    pub process: String,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub color: &'static str,
}

#[derive(Debug, Default)]
pub struct Timeline {
    intervals: Vec<GanttInterval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Append the dispatch interval `[start, end)` for `task`, merging into
    /// the previous segment when it belongs to the same process and touches.
    pub fn record(&mut self, task: &Task, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "empty dispatch interval [{start}, {end})");
        debug_assert!(
            self.intervals.last().is_none_or(|last| last.end_time <= start),
            "interval [{start}, {end}) overlaps the previous segment"
        );

        if let Some(last) = self.intervals.last_mut() {
            if last.process == task.name && last.end_time == start {
                last.end_time = end;
                return;
            }
        }

        self.intervals.push(GanttInterval {
            process: task.name.clone(),
            start_time: start,
            end_time: end,
            color: task.color,
        });
    }

    pub fn intervals(&self) -> &[GanttInterval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<GanttInterval> {
        self.intervals
    }

    /// Total CPU time accounted for (idle gaps excluded).
    pub fn busy_time(&self) -> Ticks {
        self.intervals
            .iter()
            .map(|i| i.end_time - i.start_time)
            .sum()
    }
}
