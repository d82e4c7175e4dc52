//! Numbered selection menus.
//!
//! Menus are shown to passengers with 1-based numbers. [`Menu`] keeps the
//! offset arithmetic in one place so callers only ever deal in the number
//! the passenger typed.

use std::fmt;

/// Error returned when a menu number is outside `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("selection {choice} is outside 1..={len}")]
pub struct OutOfRange {
    pub choice: i64,
    pub len: usize,
}

/// An ordered list of options with 1-based selection.
///
/// # Examples
///
/// ```
/// use train_booking::menu::Menu;
///
/// let menu = Menu::new("Please select an origin:", vec!["Holland", "Grand Rapids"]);
/// assert_eq!(menu.select(1).unwrap(), &"Holland");
/// assert_eq!(menu.select(2).unwrap(), &"Grand Rapids");
/// assert!(menu.select(0).is_err());
/// assert!(menu.select(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    title: String,
    items: Vec<T>,
}

impl<T> Menu<T> {
    /// Create a menu with a heading and its options, in display order.
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Returns true if there is nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `choice` names an option.
    pub fn contains(&self, choice: i64) -> bool {
        choice >= 1 && (choice as u64) <= self.items.len() as u64
    }

    /// Look up an option by its displayed number.
    pub fn select(&self, choice: i64) -> Result<&T, OutOfRange> {
        if !self.contains(choice) {
            return Err(OutOfRange {
                choice,
                len: self.items.len(),
            });
        }
        Ok(&self.items[(choice - 1) as usize])
    }
}

impl<T: fmt::Display> fmt::Display for Menu<T> {
    /// Renders the heading followed by one `\tN: option` line per option.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "\t{}: {}", i + 1, item)?;
        }
        Ok(())
    }
}
