//! Sequenced timelines with overlapping steps
//!
//! Each step starts `overlap` seconds before the timeline's current end
//! (the engine's `"-=x"` position). Start times are resolved here so the
//! bridge only ever hands absolute positions to the engine.

use super::props::{Props, Tween};
use crate::config::Selectors;

/// One tween inside a timeline
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStep {
    /// CSS selector for the targets
    pub target: String,
    /// Start state the targets animate from
    pub from: Props,
    /// End state; `None` means "animate back to the current style"
    pub to: Option<Props>,
    pub tween: Tween,
    /// Seconds to pull this step back over the previous ones
    pub overlap: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    pub steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Landing sequence for the first section: logo, nav links, hero copy, hero image
    pub fn entrance(selectors: &Selectors) -> Self {
        Self {
            steps: vec![
                TimelineStep {
                    target: selectors.logo.clone(),
                    from: Props::new().y(-30.0).opacity(0.0),
                    to: None,
                    tween: Tween::new(0.8).ease("power2.out"),
                    overlap: 0.0,
                },
                TimelineStep {
                    target: selectors.nav_links.clone(),
                    from: Props::new().y(-30.0).opacity(0.0),
                    to: None,
                    tween: Tween::new(0.8).stagger(0.1),
                    overlap: 0.6,
                },
                TimelineStep {
                    target: selectors.hero_content.clone(),
                    from: Props::new().y(20.0).opacity(0.0),
                    to: None,
                    tween: Tween::new(0.8).stagger(0.1),
                    overlap: 0.4,
                },
                TimelineStep {
                    target: selectors.hero_image.clone(),
                    from: Props::new().scale(0.9).opacity(0.0),
                    to: Some(Props::new().scale(1.0).opacity(1.0)),
                    tween: Tween::new(1.0).ease("power2.out"),
                    overlap: 0.6,
                },
            ],
        }
    }

    /// Absolute start time of every step, given how many elements each step matched
    ///
    /// Missing counts are treated as a single target.
    pub fn schedule(&self, counts: &[usize]) -> Vec<f64> {
        let mut end: f64 = 0.0;
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let targets = counts.get(i).copied().unwrap_or(1);
                let start = (end - step.overlap).max(0.0);
                end = end.max(start + step.tween.span(targets));
                start
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_entrance_schedule() {
        let timeline = Timeline::entrance(&Selectors::default());
        // 1 logo, 4 nav links, 3 hero children, 1 hero image
        let starts = timeline.schedule(&[1, 4, 3, 1]);
        assert_eq!(starts.len(), 4);
        assert!(close(starts[0], 0.0));
        assert!(close(starts[1], 0.2)); // 0.8 - 0.6
        assert!(close(starts[2], 0.9)); // nav ends at 0.2 + 1.1 = 1.3, minus 0.4
        assert!(close(starts[3], 1.3)); // hero copy ends at 0.9 + 1.0 = 1.9, minus 0.6
        // Hero image runs 1.3..2.3
        assert!(close(starts[3] + timeline.steps[3].tween.span(1), 2.3));
    }

    #[test]
    fn test_each_step_overlaps_previous() {
        let timeline = Timeline::entrance(&Selectors::default());
        let starts = timeline.schedule(&[1, 5, 2, 1]);
        for i in 1..starts.len() {
            let prev_end = starts[i - 1] + timeline.steps[i - 1].tween.span([1, 5, 2, 1][i - 1]);
            assert!(starts[i] < prev_end, "step {} does not overlap", i);
        }
    }

    #[test]
    fn test_overlap_clamped_at_zero() {
        let timeline = Timeline {
            steps: vec![TimelineStep {
                target: ".a".into(),
                from: Props::new().opacity(0.0),
                to: None,
                tween: Tween::new(0.5),
                overlap: 2.0,
            }],
        };
        assert_eq!(timeline.schedule(&[1]), vec![0.0]);
    }

    #[test]
    fn test_hero_image_is_from_to() {
        let timeline = Timeline::entrance(&Selectors::default());
        let last = timeline.steps.last().unwrap();
        assert_eq!(last.target, ".hero-img");
        assert_eq!(last.to, Some(Props::new().scale(1.0).opacity(1.0)));
    }
}
