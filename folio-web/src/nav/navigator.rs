//! Section navigator - current index, in-flight guard, fragment sync
//!
//! One `Navigator` exists per page session. It never drives the engine
//! itself: `goto_section` returns the plan to play plus a ticket, and the
//! engine's completion callback returns the ticket through `finish`.

use super::chrome::{paint_links, Chrome};
use super::direction::Direction;
use super::sections::SectionList;
use super::transition::{Transition, TransitionPlan, TransitionTicket};
use crate::anim::Props;
use crate::config::TransitionConfig;

/// Starting state of every section, applied without animation
#[derive(Clone, Debug, PartialEq)]
pub struct InitialLayout {
    pub start: usize,
    /// One pose per section, in section order
    pub poses: Vec<Props>,
    /// Landing on the first section plays the entrance sequence
    pub play_entrance: bool,
}

pub struct Navigator {
    sections: SectionList,
    config: TransitionConfig,
    current: usize,
    /// Serial of the outstanding ticket
    in_flight: Option<u64>,
    next_serial: u64,
}

impl Navigator {
    pub fn new(sections: SectionList, config: TransitionConfig) -> Self {
        Self {
            sections,
            config,
            current: 0,
            in_flight: None,
            next_serial: 0,
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_id(&self) -> Option<&str> {
        self.sections.id(self.current)
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Seed state from the URL fragment and sync the chrome
    pub fn init<C: Chrome + ?Sized>(&mut self, chrome: &mut C) -> InitialLayout {
        let start = self.sections.resolve_fragment(&chrome.fragment());
        self.current = start;

        let poses = (0..self.sections.len())
            .map(|i| if i == start { Props::shown() } else { Props::hidden() })
            .collect();

        self.update_navigation(start, chrome);

        InitialLayout {
            start,
            poses,
            play_entrance: start == 0 && !self.sections.is_empty(),
        }
    }

    /// Start a transition to `target`
    ///
    /// Returns `None` when `target` is out of range or another transition is
    /// still in flight. Highlighting and the fragment update immediately;
    /// `current_index` only moves once the ticket comes back.
    pub fn goto_section<C: Chrome + ?Sized>(
        &mut self,
        target: usize,
        direction: Direction,
        chrome: &mut C,
    ) -> Option<Transition> {
        if target >= self.sections.len() || self.in_flight.is_some() {
            return None;
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        self.in_flight = Some(serial);

        let plan = TransitionPlan::new(self.current, target, direction, &self.config);
        self.update_navigation(target, chrome);

        Some(Transition {
            plan,
            ticket: TransitionTicket { serial, target },
        })
    }

    /// Commit a finished transition; stale tickets are ignored
    pub fn finish(&mut self, ticket: TransitionTicket) -> bool {
        if self.in_flight != Some(ticket.serial) {
            return false;
        }
        self.in_flight = None;
        self.current = ticket.target;
        true
    }

    /// Push `#id` if the fragment differs, then repaint the nav links
    pub fn update_navigation<C: Chrome + ?Sized>(&self, index: usize, chrome: &mut C) {
        let Some(id) = self.sections.id(index) else {
            return;
        };
        if chrome.fragment() != id {
            chrome.push_fragment(id);
        }
        paint_links(chrome, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Visibility;
    use crate::testing::FakePage;

    fn navigator() -> Navigator {
        Navigator::new(
            SectionList::new(["home", "about", "work", "contact"]),
            TransitionConfig::default(),
        )
    }

    #[test]
    fn test_init_empty_fragment() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio();
        let layout = nav.init(&mut page);

        assert_eq!(layout.start, 0);
        assert!(layout.play_entrance);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(page.fragment, "home");
        assert_eq!(page.pushes, vec!["home"]);
        assert_eq!(page.active_link(), Some(0));
    }

    #[test]
    fn test_init_from_fragment_skips_entrance() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio().at("work");
        let layout = nav.init(&mut page);

        assert_eq!(layout.start, 2);
        assert!(!layout.play_entrance);
        assert!(page.pushes.is_empty());
        assert_eq!(page.active_link(), Some(2));

        assert_eq!(layout.poses.len(), 4);
        assert_eq!(layout.poses[2], Props::shown());
        for i in [0, 1, 3] {
            assert_eq!(layout.poses[i].visibility, Some(Visibility::Hidden));
            assert_eq!(layout.poses[i].opacity, Some(0.0));
        }
    }

    #[test]
    fn test_init_unknown_fragment_falls_back() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio().at("blog");
        let layout = nav.init(&mut page);
        assert_eq!(layout.start, 0);
        assert_eq!(page.fragment, "home");
    }

    #[test]
    fn test_goto_commits_on_finish_only() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio();
        nav.init(&mut page);

        let transition = nav.goto_section(2, Direction::Down, &mut page).unwrap();
        assert!(nav.is_animating());
        assert_eq!(nav.current_index(), 0);
        // Chrome runs ahead of the animation
        assert_eq!(page.fragment, "work");
        assert_eq!(page.active_link(), Some(2));

        assert!(nav.finish(transition.ticket));
        assert!(!nav.is_animating());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_goto_rejected_while_in_flight() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio();
        nav.init(&mut page);

        let first = nav.goto_section(1, Direction::Down, &mut page).unwrap();
        assert!(nav.goto_section(3, Direction::Down, &mut page).is_none());
        assert_eq!(page.fragment, "about");
        assert_eq!(page.pushes, vec!["home", "about"]);

        nav.finish(first.ticket);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_goto_out_of_range() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio();
        nav.init(&mut page);
        assert!(nav.goto_section(4, Direction::Down, &mut page).is_none());
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio();
        nav.init(&mut page);

        let first = nav.goto_section(1, Direction::Down, &mut page).unwrap();
        let forged = TransitionTicket { serial: 99, target: 3 };
        assert!(!nav.finish(forged));
        assert!(nav.is_animating());
        assert!(nav.finish(first.ticket));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_update_navigation_is_idempotent() {
        let nav = navigator();
        let mut page = FakePage::portfolio();
        nav.update_navigation(1, &mut page);
        nav.update_navigation(1, &mut page);
        assert_eq!(page.pushes, vec!["about"]);
        assert_eq!(page.active_link(), Some(1));
    }

    #[test]
    fn test_plan_starts_from_current() {
        let mut nav = navigator();
        let mut page = FakePage::portfolio().at("about");
        nav.init(&mut page);
        let transition = nav.goto_section(2, Direction::Down, &mut page).unwrap();
        assert_eq!(transition.plan.from, 1);
        assert_eq!(transition.plan.to, 2);
        assert_eq!(transition.ticket.target(), 2);
    }

    #[test]
    fn test_empty_page() {
        let mut nav = Navigator::new(SectionList::default(), TransitionConfig::default());
        let mut page = FakePage::default();
        let layout = nav.init(&mut page);
        assert!(layout.poses.is_empty());
        assert!(!layout.play_entrance);
        assert!(page.pushes.is_empty());
        assert!(nav.goto_section(0, Direction::Down, &mut page).is_none());
        assert_eq!(nav.current_id(), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::nav::Gesture;
    use crate::testing::FakePage;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Goto(usize, bool),
        Gesture(bool),
        Link(usize),
        History(usize),
        Finish,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..6, any::<bool>()).prop_map(|(i, d)| Op::Goto(i, d)),
            any::<bool>().prop_map(Op::Gesture),
            (0usize..5).prop_map(Op::Link),
            (0usize..5).prop_map(Op::History),
            Just(Op::Finish),
        ]
    }

    const IDS: [&str; 4] = ["home", "about", "work", "contact"];

    proptest! {
        /// At most one ticket is ever outstanding, and nothing moves the
        /// current index while it is
        #[test]
        fn single_transition_in_flight(ops in prop::collection::vec(op(), 1..60)) {
            let mut nav = Navigator::new(SectionList::new(IDS), TransitionConfig::default());
            let mut page = FakePage::portfolio();
            nav.init(&mut page);
            let mut pending: Option<TransitionTicket> = None;

            for op in ops {
                let before = nav.current_index();
                let animating = nav.is_animating();
                let finishing = matches!(op, Op::Finish);
                prop_assert_eq!(animating, pending.is_some());

                let started = match op {
                    Op::Goto(i, down) => {
                        let dir = if down { Direction::Down } else { Direction::Up };
                        nav.goto_section(i, dir, &mut page)
                    }
                    Op::Gesture(forward) => {
                        let g = if forward { Gesture::Forward } else { Gesture::Back };
                        nav.on_gesture(g, &mut page)
                    }
                    Op::Link(i) => {
                        let href = IDS.get(i).map(|id| format!("#{}", id));
                        nav.on_link(href.as_deref(), &mut page)
                    }
                    Op::History(i) => {
                        page.fragment = IDS.get(i).copied().unwrap_or("").to_string();
                        nav.on_history(&mut page)
                    }
                    Op::Finish => {
                        if let Some(ticket) = pending.take() {
                            let target = ticket.target();
                            prop_assert!(nav.finish(ticket));
                            prop_assert_eq!(nav.current_index(), target);
                        }
                        None
                    }
                };

                if let Some(transition) = started {
                    prop_assert!(!animating, "transition started while another was in flight");
                    prop_assert_eq!(page.fragment.as_str(), IDS[transition.plan.to]);
                    pending = Some(transition.ticket);
                }
                if animating && !finishing {
                    prop_assert_eq!(nav.current_index(), before);
                }
                prop_assert!(nav.current_index() < IDS.len());
            }
        }

        /// Any known fragment resolves back to its own index
        #[test]
        fn history_round_trip(start in 0usize..4, target in 0usize..4) {
            let mut nav = Navigator::new(SectionList::new(IDS), TransitionConfig::default());
            let mut page = FakePage::portfolio().at(IDS[start]);
            nav.init(&mut page);

            page.fragment = IDS[target].to_string();
            match nav.on_history(&mut page) {
                Some(transition) => {
                    prop_assert_ne!(start, target);
                    prop_assert!(nav.finish(transition.ticket));
                }
                None => prop_assert_eq!(start, target),
            }
            prop_assert_eq!(nav.current_index(), target);
        }
    }
}
