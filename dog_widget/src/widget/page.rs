//! In-memory stand-ins for the page elements, served over HTTP.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{BreedOption, BreedSelect, FactDisplay};

/// The `dog-facts` text area. Empty until the first refresh completes.
#[derive(Default)]
pub struct FactPanel {
    text: RwLock<Option<String>>,
}

impl FactPanel {
    pub fn text(&self) -> Option<String> {
        read(&self.text).clone()
    }
}

impl FactDisplay for FactPanel {
    fn show_text(&self, text: &str) {
        *write(&self.text) = Some(text.to_owned());
    }
}

/// The `breed-select` control. Options only ever accumulate.
#[derive(Default)]
pub struct BreedMenu {
    options: RwLock<Vec<BreedOption>>,
}

impl BreedMenu {
    pub fn options(&self) -> Vec<BreedOption> {
        read(&self.options).clone()
    }
}

impl BreedSelect for BreedMenu {
    fn append_option(&self, option: BreedOption) {
        write(&self.options).push(option);
    }
}

// A writer can't leave either value half-updated, so a poisoned lock is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
