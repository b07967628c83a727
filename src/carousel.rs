use crate::constants::CAROUSEL_SELECTOR;
use crate::dom;
use crate::storage::BrowserSession;
use crate::view::DomView;
use carousel_core::persistence;
use carousel_core::{Carousel, CarouselParams, ClickAction, Direction, Item};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The one owner of carousel state on the landing page.
pub struct Controller {
    pub carousel: Carousel,
    pub view: DomView,
}

pub type SharedController = Rc<RefCell<Controller>>;

/// Build the carousel from the `#biomes` markup.
///
/// A missing container yields `Ok(None)`; the page simply has no carousel.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<SharedController>> {
    let view = DomView::find(document, CAROUSEL_SELECTOR);
    if view.is_none() {
        log::debug!("[carousel] {} not found; navigation disabled", CAROUSEL_SELECTOR);
    }
    let stored = BrowserSession::open().and_then(|s| persistence::load(&s));
    let attached = Carousel::attach(
        view,
        |view: &DomView| {
            view.items()
                .iter()
                .map(|el| Item::new(el.id(), el.text_content().unwrap_or_default()))
                .collect()
        },
        stored.as_deref(),
        CarouselParams::default(),
    )?;
    Ok(attached.map(|(carousel, view)| Rc::new(RefCell::new(Controller { carousel, view }))))
}

/// Entry point shared by every input channel.
pub fn step(shared: &SharedController, direction: Direction) {
    let transition = {
        let mut ctl = shared.borrow_mut();
        let Controller { carousel, view } = &mut *ctl;
        carousel.step(direction, view)
    };
    let Some(t) = transition else {
        return;
    };
    let shared = shared.clone();
    dom::set_timeout(t.lock.as_millis() as i32, move || {
        let mut ctl = shared.borrow_mut();
        let Controller { carousel, view } = &mut *ctl;
        carousel.settle(view);
    });
}

pub fn click(shared: &SharedController, index: usize) {
    let action = shared.borrow().carousel.click_action(index);
    match action {
        ClickAction::Step(direction) => step(shared, direction),
        ClickAction::Navigate(i) => {
            let url = shared
                .borrow()
                .carousel
                .model()
                .item(i)
                .map(|it| it.target_url.clone());
            if let Some(url) = url {
                navigate(&url);
            }
        }
        ClickAction::Ignore => {}
    }
}

fn navigate(url: &str) {
    log::info!("[carousel] navigating to {}", url);
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }
}
