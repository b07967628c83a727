use carousel_core::CarouselView;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `#biomes` container and its item elements, in markup order.
pub struct DomView {
    container: web::HtmlElement,
    items: Vec<web::Element>,
}

impl DomView {
    /// Returns `None` when the container is missing or not an `HtmlElement`.
    pub fn find(document: &web::Document, selector: &str) -> Option<Self> {
        let container = document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let children = container.children();
        let items = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        Some(Self { container, items })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn items(&self) -> &[web::Element] {
        &self.items
    }
}

impl CarouselView for DomView {
    fn add_class(&mut self, index: usize, class: &str) {
        if let Some(el) = self.items.get(index) {
            _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, index: usize, class: &str) {
        if let Some(el) = self.items.get(index) {
            _ = el.class_list().remove_1(class);
        }
    }

    fn label(&self, index: usize) -> String {
        self.items
            .get(index)
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn set_label(&mut self, index: usize, text: &str) {
        if let Some(el) = self.items.get(index) {
            el.set_text_content(Some(text));
        }
    }

    fn set_interactive(&mut self, enabled: bool) {
        let value = if enabled { "auto" } else { "none" };
        _ = self.container.style().set_property("pointer-events", value);
    }
}
