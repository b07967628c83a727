//! Ordered item ring and the index arithmetic behind it.
//!
//! Nothing here touches the DOM. The model only knows which index is active;
//! role classes and labels are applied by [`crate::Carousel`] through a
//! [`crate::CarouselView`].

use crate::constants::{CLASS_ACTIVE, CLASS_NEXT, CLASS_PREV, MIN_ITEMS, PAGE_DIR};
use crate::error::CarouselError;

/// One destination in the ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub target_url: String,
}

impl Item {
    /// Build an item whose destination is `pages/<id>.html`.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        let target_url = format!("{}/{}.html", PAGE_DIR, id);
        Self {
            id,
            label: label.into(),
            target_url,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Prev,
    Active,
    Next,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Prev, Role::Active, Role::Next];

    pub fn class_name(self) -> &'static str {
        match self {
            Role::Prev => CLASS_PREV,
            Role::Active => CLASS_ACTIVE,
            Role::Next => CLASS_NEXT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn offset(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Role taken by the item that leaves the active slot.
    #[inline]
    pub fn trailing_role(self) -> Role {
        match self {
            Direction::Forward => Role::Prev,
            Direction::Backward => Role::Next,
        }
    }

    /// Role the incoming item held before it became active.
    #[inline]
    pub fn leading_role(self) -> Role {
        match self {
            Direction::Forward => Role::Next,
            Direction::Backward => Role::Prev,
        }
    }
}

/// Indices holding each role for a given active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub prev: usize,
    pub active: usize,
    pub next: usize,
}

impl Roles {
    pub fn index_of(&self, role: Role) -> usize {
        match role {
            Role::Prev => self.prev,
            Role::Active => self.active,
            Role::Next => self.next,
        }
    }

    pub fn role_of(&self, index: usize) -> Option<Role> {
        // Active wins if slots ever alias.
        if index == self.active {
            Some(Role::Active)
        } else if index == self.prev {
            Some(Role::Prev)
        } else if index == self.next {
            Some(Role::Next)
        } else {
            None
        }
    }
}

/// Non-negative cyclic index.
///
/// Rust's `%` keeps the sign of the dividend, so `-1 % 5 == -1`; the extra
/// `+ len` folds negatives back into `[0, len)`.
///
/// # Panics
/// Panics if `len` is zero.
#[inline]
pub fn wrap_index(i: isize, len: usize) -> usize {
    let n = len as isize;
    (((i % n) + n) % n) as usize
}

#[derive(Clone, Debug)]
pub struct CarouselModel {
    items: Vec<Item>,
    active: usize,
}

impl CarouselModel {
    pub fn new(items: Vec<Item>, active: usize) -> Result<Self, CarouselError> {
        if items.len() < MIN_ITEMS {
            return Err(CarouselError::TooFewItems {
                found: items.len(),
                min: MIN_ITEMS,
            });
        }
        if active >= items.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: active,
                len: items.len(),
            });
        }
        Ok(Self { items, active })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item(&self) -> &Item {
        &self.items[self.active]
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }

    #[inline]
    pub fn wrap(&self, i: isize) -> usize {
        wrap_index(i, self.items.len())
    }

    pub fn roles_for(&self, active: usize) -> Roles {
        let a = active as isize;
        Roles {
            prev: self.wrap(a - 1),
            active: self.wrap(a),
            next: self.wrap(a + 1),
        }
    }

    pub fn roles(&self) -> Roles {
        self.roles_for(self.active)
    }

    /// Move the active index one step and return it.
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.active = self.wrap(self.active as isize + direction.offset());
        self.active
    }
}
