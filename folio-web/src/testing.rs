//! In-memory page used by unit tests

use crate::nav::{LinkBar, LinkTone, Location};

#[derive(Debug, Default)]
pub struct FakePage {
    pub fragment: String,
    /// Every fragment written through `push_fragment`, oldest first
    pub pushes: Vec<String>,
    pub hrefs: Vec<Option<String>>,
    /// Last tone painted per link; `None` if never painted
    pub tones: Vec<Option<LinkTone>>,
}

impl FakePage {
    pub fn with_links(hrefs: &[&str]) -> Self {
        Self {
            hrefs: hrefs.iter().map(|h| Some(h.to_string())).collect(),
            tones: vec![None; hrefs.len()],
            ..Default::default()
        }
    }

    /// Standard four-section page with one nav link per section
    pub fn portfolio() -> Self {
        Self::with_links(&["#home", "#about", "#work", "#contact"])
    }

    pub fn at(mut self, fragment: &str) -> Self {
        self.fragment = fragment.to_string();
        self
    }

    /// Index of the single active link, if exactly one is active
    pub fn active_link(&self) -> Option<usize> {
        let active: Vec<_> = self
            .tones
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Some(LinkTone::Active))
            .map(|(i, _)| i)
            .collect();
        match active.as_slice() {
            [i] => Some(*i),
            _ => None,
        }
    }
}

impl Location for FakePage {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn push_fragment(&mut self, id: &str) {
        self.fragment = id.to_string();
        self.pushes.push(id.to_string());
    }
}

impl LinkBar for FakePage {
    fn hrefs(&self) -> Vec<Option<String>> {
        self.hrefs.clone()
    }

    fn paint(&mut self, index: usize, tone: LinkTone) {
        self.tones[index] = Some(tone);
    }
}
