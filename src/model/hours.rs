use std::collections::HashMap;

/// Hours booked against a single tag
#[derive(Debug, Clone, PartialEq)]
pub struct TagHours {
    pub tag: String,
    pub hours: f64,
}

impl TagHours {
    pub fn new(tag: impl Into<String>, hours: f64) -> Self {
        Self {
            tag: tag.into(),
            hours,
        }
    }
}

/// Lookup table from tag to hours
///
/// Inserting a tag twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursIndex {
    hours_by_tag: HashMap<String, f64>,
}

impl HoursIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, hours: f64) {
        self.hours_by_tag.insert(tag.into(), hours);
    }

    pub fn get(&self, tag: &str) -> Option<f64> {
        self.hours_by_tag.get(tag).copied()
    }

    /// Hours for `tag`, or zero if the tag was never recorded
    pub fn hours_or_zero(&self, tag: &str) -> f64 {
        self.get(tag).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.hours_by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours_by_tag.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for HoursIndex {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut index = HoursIndex::new();
        for (tag, hours) in iter {
            index.insert(tag, hours);
        }
        index
    }
}

/// Tag/hours entries in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursSequence {
    entries: Vec<TagHours>,
}

impl HoursSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TagHours) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TagHours] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort by hours, largest first
    ///
    /// The sort is stable: entries with equal hours keep their input order.
    pub fn sort_by_hours_desc(&mut self) {
        self.entries.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    }

    /// A ranked copy, leaving this sequence untouched
    pub fn ranked(&self) -> HoursSequence {
        let mut ranked = self.clone();
        ranked.sort_by_hours_desc();
        ranked
    }
}

impl From<Vec<TagHours>> for HoursSequence {
    fn from(entries: Vec<TagHours>) -> Self {
        Self { entries }
    }
}

impl FromIterator<TagHours> for HoursSequence {
    fn from_iter<I: IntoIterator<Item = TagHours>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
