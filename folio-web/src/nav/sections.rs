//! Ordered section identifiers and fragment resolution

/// Fixed, ordered list of section ids; position is display order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<String>,
}

impl SectionList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Index of the section with this exact id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Index for a URL fragment (with or without `#`), falling back to 0
    pub fn resolve_fragment(&self, fragment: &str) -> usize {
        self.index_of(strip_hash(fragment)).unwrap_or(0)
    }
}

/// Drop one leading `#`
pub fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Anchor `href` pointing at a section id
pub fn href_for(id: &str) -> String {
    format!("#{}", id)
}
