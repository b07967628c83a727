//! Presentation seam between the engine and whatever renders the items.
//!
//! The web frontend implements [`CarouselView`] over real DOM elements. The
//! [`RecordingView`] keeps the same state in memory so transitions can be
//! checked on the host.

use std::collections::BTreeSet;

/// Side effects the engine needs from the presentation layer.
///
/// Indices refer to positions in the model's item list.
pub trait CarouselView {
    fn add_class(&mut self, index: usize, class: &str);
    fn remove_class(&mut self, index: usize, class: &str);
    /// Currently displayed text of an item.
    fn label(&self, index: usize) -> String;
    fn set_label(&mut self, index: usize, text: &str);
    /// Toggle pointer interaction on the whole container.
    fn set_interactive(&mut self, enabled: bool);
}

#[derive(Clone, Debug)]
pub struct RecordingView {
    classes: Vec<BTreeSet<String>>,
    labels: Vec<String>,
    interactive: bool,
}

impl RecordingView {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self {
            classes: vec![BTreeSet::new(); labels.len()],
            labels,
            interactive: true,
        }
    }

    pub fn from_items(items: &[crate::Item]) -> Self {
        Self::new(items.iter().map(|it| it.label.clone()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn has_class(&self, index: usize, class: &str) -> bool {
        self.classes
            .get(index)
            .map(|set| set.contains(class))
            .unwrap_or(false)
    }

    pub fn classes(&self, index: usize) -> Vec<&str> {
        self.classes
            .get(index)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every index currently carrying `class`, ascending.
    pub fn holders(&self, class: &str) -> Vec<usize> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(class))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl CarouselView for RecordingView {
    fn add_class(&mut self, index: usize, class: &str) {
        if let Some(set) = self.classes.get_mut(index) {
            set.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, index: usize, class: &str) {
        if let Some(set) = self.classes.get_mut(index) {
            set.remove(class);
        }
    }

    fn label(&self, index: usize) -> String {
        self.labels.get(index).cloned().unwrap_or_default()
    }

    fn set_label(&mut self, index: usize, text: &str) {
        if let Some(l) = self.labels.get_mut(index) {
            *l = text.to_string();
        }
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.interactive = enabled;
    }
}
