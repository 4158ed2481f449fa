use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

/// Cleared when the owning reactive scope is disposed, so async completions
/// that land after teardown can be dropped instead of applied.
#[derive(Clone)]
pub struct ViewLifetime {
    alive: Rc<Cell<bool>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let lifetime = Self::detached();
        let handle = lifetime.clone();
        on_cleanup(move || handle.expire());
        lifetime
    }

    /// A lifetime not tied to any scope; ends only on `expire`.
    pub fn detached() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn expire(&self) {
        self.alive.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
