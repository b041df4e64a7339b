//! Scroll spy - highlight the nav link of whichever section is on screen
//!
//! Entries in one observer batch are applied in order, so when several
//! sections qualify together the last one wins.

use crate::nav::{paint_links, LinkBar};

/// One intersection notification
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub intersecting: bool,
    /// Share of the section's area on screen, 0..=1
    pub ratio: f64,
}

pub struct SectionSpy {
    threshold: f64,
}

impl SectionSpy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Does this entry count as "the section on screen"?
    pub fn qualifies(&self, entry: &Intersection) -> bool {
        entry.intersecting && entry.ratio >= self.threshold
    }

    /// Paint links for every qualifying entry in order; returns the last id applied
    pub fn apply<'a, B: LinkBar + ?Sized>(
        &self,
        batch: &'a [Intersection],
        bar: &mut B,
    ) -> Option<&'a str> {
        let mut applied = None;
        for entry in batch.iter().filter(|e| self.qualifies(e)) {
            paint_links(bar, &entry.id);
            applied = Some(entry.id.as_str());
        }
        applied
    }
}
