use crate::view::CarouselView;

#[derive(Clone, Debug)]
struct HiddenLabel {
    index: usize,
    text: String,
}

/// Single-slot buffer for the label blanked on the active item.
///
/// The active item shows no text so it can't be selected by accident while
/// items slide; the text comes back when it leaves the active slot.
#[derive(Clone, Debug, Default)]
pub struct ContentGuard {
    hidden: Option<HiddenLabel>,
}

impl ContentGuard {
    pub fn hide<V: CarouselView>(&mut self, view: &mut V, index: usize) {
        if let Some(prev) = self.hidden.as_ref() {
            if prev.index != index {
                log::warn!(
                    "[carousel] hide({}) while item {} still hidden; restoring it first",
                    index,
                    prev.index
                );
                self.restore(view);
            } else {
                // Already blank; keep the captured text.
                return;
            }
        }
        let text = view.label(index);
        view.set_label(index, "");
        self.hidden = Some(HiddenLabel { index, text });
    }

    /// Put the buffered text back on the item it came from.
    ///
    /// Returns the restored index, or `None` when nothing was hidden.
    pub fn restore<V: CarouselView>(&mut self, view: &mut V) -> Option<usize> {
        let HiddenLabel { index, text } = self.hidden.take()?;
        view.set_label(index, &text);
        Some(index)
    }

    pub fn hidden_label(&self) -> Option<&str> {
        self.hidden.as_ref().map(|h| h.text.as_str())
    }

    pub fn hidden_index(&self) -> Option<usize> {
        self.hidden.as_ref().map(|h| h.index)
    }
}
