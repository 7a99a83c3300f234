use std::collections::HashSet;

/// Event ids the user has bookmarked.
///
/// Ids are not checked against the catalog; views that join against it drop
/// the ones that no longer resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedEvents {
    ids: HashSet<String>,
}

impl SavedEvents {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn add(&mut self, id: &str) {
        if !self.ids.contains(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Returns whether `id` is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn all(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SavedEvents {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
