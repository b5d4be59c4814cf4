use crate::validation::validate_hex_color;

pub const MAX_COLOR_SLOTS: usize = 5;

/// Editable brand-color inputs as the user types them. Slots may be blank or
/// hold half-typed values; only [`crate::validation::prepare_request`] turns
/// them into request colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSlots {
    slots: Vec<String>,
}

impl Default for ColorSlots {
    fn default() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }
}

impl ColorSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds anything but whitespace.
    pub fn all_blank(&self) -> bool {
        self.slots.iter().all(|slot| slot.trim().is_empty())
    }

    pub fn can_add(&self) -> bool {
        self.slots.len() < MAX_COLOR_SLOTS
    }

    pub fn can_remove(&self) -> bool {
        self.slots.len() > 1
    }

    /// Appends a blank slot. Returns `false` when already at the limit.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.slots.push(String::new());
        true
    }

    /// Removing the only slot leaves a single blank one behind.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.slots.remove(index);
        if self.slots.is_empty() {
            self.slots.push(String::new());
        }
        true
    }

    pub fn update(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Color to preview next to a slot, if it holds a complete hex value.
    pub fn swatch(&self, index: usize) -> Option<&str> {
        self.slots
            .get(index)
            .map(String::as_str)
            .filter(|color| !color.is_empty() && validate_hex_color(color))
    }
}
