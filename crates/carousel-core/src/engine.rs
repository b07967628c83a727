use crate::constants::{
    CLASS_ANIMATE_ENTER, CLASS_NO_TRANSITION, SWIPE_THRESHOLD_PX, UI_LOCKED_DURATION,
};
use crate::error::CarouselError;
use crate::guard::ContentGuard;
use crate::model::{CarouselModel, Direction, Item, Role, Roles};
use crate::persistence::resolve_initial_index;
use crate::view::CarouselView;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselParams {
    pub lock_duration: Duration,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            lock_duration: UI_LOCKED_DURATION,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Lock window open; `settling` carries `no-transition` until [`Carousel::settle`].
    Transitioning { settling: usize },
}

/// Visual phase of one item, for hosts that don't animate through CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPhase {
    Idle,
    Entering,
    Active,
    Leaving,
}

/// Outcome of a completed step. The host must call [`Carousel::settle`]
/// once `lock` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub direction: Direction,
    pub from: usize,
    pub to: usize,
    pub lock: Duration,
}

/// What a click on an item means, looked up from its current role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    Step(Direction),
    Navigate(usize),
    Ignore,
}

pub struct Carousel {
    model: CarouselModel,
    guard: ContentGuard,
    phase: Phase,
    params: CarouselParams,
    entering: Option<usize>,
    leaving: Option<usize>,
}

impl Carousel {
    /// Validate the items and apply the initial roles to `view`. The returned
    /// carousel is mounted and ready to step.
    pub fn new<V: CarouselView>(
        items: Vec<Item>,
        initial: usize,
        params: CarouselParams,
        view: &mut V,
    ) -> Result<Self, CarouselError> {
        let mut carousel = Self {
            model: CarouselModel::new(items, initial)?,
            guard: ContentGuard::default(),
            phase: Phase::Idle,
            params,
            entering: None,
            leaving: None,
        };
        carousel.mount(view);
        Ok(carousel)
    }

    /// Seed the active index from a persisted item id; unknown ids start at 0.
    pub fn restore_from<V: CarouselView>(
        items: Vec<Item>,
        stored_id: Option<&str>,
        params: CarouselParams,
        view: &mut V,
    ) -> Result<Self, CarouselError> {
        let initial = resolve_initial_index(&items, stored_id);
        Self::new(items, initial, params, view)
    }

    /// Mount over a view that may not exist on this page.
    ///
    /// `None` means there is nothing to drive and is not an error. `items`
    /// reads the item list out of the view.
    pub fn attach<V: CarouselView>(
        view: Option<V>,
        items: impl FnOnce(&V) -> Vec<Item>,
        stored_id: Option<&str>,
        params: CarouselParams,
    ) -> Result<Option<(Self, V)>, CarouselError> {
        let Some(mut view) = view else {
            return Ok(None);
        };
        let items = items(&view);
        let carousel = Self::restore_from(items, stored_id, params, &mut view)?;
        Ok(Some((carousel, view)))
    }

    pub fn model(&self) -> &CarouselModel {
        &self.model
    }

    pub fn params(&self) -> &CarouselParams {
        &self.params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn active_index(&self) -> usize {
        self.model.active_index()
    }

    pub fn roles(&self) -> Roles {
        self.model.roles()
    }

    pub fn hidden_label(&self) -> Option<&str> {
        self.guard.hidden_label()
    }

    /// Apply the initial role classes and blank the active label.
    fn mount<V: CarouselView>(&mut self, view: &mut V) {
        let roles = self.model.roles();
        for role in Role::ALL {
            view.add_class(roles.index_of(role), role.class_name());
        }
        self.guard.hide(view, roles.active);
        log::info!(
            "[carousel] mounted {} items, active={} ({})",
            self.model.len(),
            roles.active,
            self.model.active_item().id
        );
    }

    /// Role-keyed dispatch table for clicks. Listeners stay bound for the
    /// page's lifetime and consult this at call time.
    pub fn click_action(&self, index: usize) -> ClickAction {
        match self.model.roles().role_of(index) {
            Some(Role::Prev) => ClickAction::Step(Direction::Backward),
            Some(Role::Next) => ClickAction::Step(Direction::Forward),
            Some(Role::Active) => ClickAction::Navigate(index),
            None => ClickAction::Ignore,
        }
    }

    pub fn slot_phase(&self, index: usize) -> SlotPhase {
        if self.is_locked() && self.leaving == Some(index) {
            SlotPhase::Leaving
        } else if index == self.model.active_index() {
            SlotPhase::Active
        } else if self.entering == Some(index) {
            SlotPhase::Entering
        } else {
            SlotPhase::Idle
        }
    }

    pub fn forward<V: CarouselView>(&mut self, view: &mut V) -> Option<Transition> {
        self.step(Direction::Forward, view)
    }

    pub fn backward<V: CarouselView>(&mut self, view: &mut V) -> Option<Transition> {
        self.step(Direction::Backward, view)
    }

    /// Rotate one position. Returns `None` while a previous step is settling,
    /// whichever input channel asked.
    pub fn step<V: CarouselView>(
        &mut self,
        direction: Direction,
        view: &mut V,
    ) -> Option<Transition> {
        if let Phase::Transitioning { settling } = self.phase {
            log::debug!(
                "[carousel] {:?} ignored, still settling item {}",
                direction,
                settling
            );
            return None;
        }
        let before = self.model.roles();
        let from = before.active;
        let offset = direction.offset();
        let trailing = direction.trailing_role();
        let leading = direction.leading_role();
        let to = self.model.wrap(from as isize + offset);
        self.phase = Phase::Transitioning { settling: to };

        // Item on the far side drops out of view.
        let vacated = before.index_of(trailing);
        view.remove_class(vacated, trailing.class_name());
        view.remove_class(vacated, CLASS_ANIMATE_ENTER);

        // Active item slides into the trailing slot and gets its text back.
        view.remove_class(from, Role::Active.class_name());
        view.add_class(from, trailing.class_name());
        if self.guard.restore(view) != Some(from) {
            log::warn!("[carousel] item {} left active without a hidden label", from);
        }

        let to = self.model.advance(direction);
        view.remove_class(to, leading.class_name());
        view.remove_class(to, CLASS_ANIMATE_ENTER);
        view.add_class(to, Role::Active.class_name());
        self.guard.hide(view, to);

        view.set_interactive(false);
        view.add_class(to, CLASS_NO_TRANSITION);

        let incoming = self.model.wrap(to as isize + offset);
        view.add_class(incoming, leading.class_name());
        view.add_class(incoming, CLASS_ANIMATE_ENTER);

        self.entering = Some(incoming);
        self.leaving = Some(from);
        log::info!(
            "[carousel] {:?}: {} -> {} ({})",
            direction,
            from,
            to,
            self.model.active_item().id
        );
        Some(Transition {
            direction,
            from,
            to,
            lock: self.params.lock_duration,
        })
    }

    /// Close the lock window. Returns false if no transition was pending.
    pub fn settle<V: CarouselView>(&mut self, view: &mut V) -> bool {
        let Phase::Transitioning { settling } = self.phase else {
            return false;
        };
        view.set_interactive(true);
        view.remove_class(settling, CLASS_NO_TRANSITION);
        self.phase = Phase::Idle;
        self.leaving = None;
        true
    }
}
