//! Tri-state check values.

/// Check state of a tree node.
///
/// The numeric codes (`0`, `1`, `2`) are stable and are what
/// [`CheckState::as_u8`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Node is unchecked.
    #[default]
    Unchecked,
    /// Node is checked.
    Checked,
    /// Some but not all descendants are checked (indeterminate).
    PartiallyChecked,
}

impl CheckState {
    /// Returns `true` if the node is checked (fully or partially).
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Returns `true` if the node is fully checked.
    pub fn is_fully_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    /// Returns `true` if the node is indeterminate.
    pub fn is_partially_checked(&self) -> bool {
        matches!(self, CheckState::PartiallyChecked)
    }

    /// Returns the state a click moves to.
    ///
    /// A partially checked node becomes `Checked` when `optimistic` is set
    /// and `Unchecked` otherwise.
    pub fn toggle(&self, optimistic: bool) -> CheckState {
        match self {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::Checked => CheckState::Unchecked,
            CheckState::PartiallyChecked if optimistic => CheckState::Checked,
            CheckState::PartiallyChecked => CheckState::Unchecked,
        }
    }

    /// Returns the numeric code: `0` unchecked, `1` checked, `2` partial.
    pub fn as_u8(&self) -> u8 {
        match self {
            CheckState::Unchecked => 0,
            CheckState::Checked => 1,
            CheckState::PartiallyChecked => 2,
        }
    }

    /// Parses a numeric code.
    pub fn from_u8(code: u8) -> Option<CheckState> {
        match code {
            0 => Some(CheckState::Unchecked),
            1 => Some(CheckState::Checked),
            2 => Some(CheckState::PartiallyChecked),
            _ => None,
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(CheckState::Unchecked.toggle(true), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggle(true), CheckState::Unchecked);
        assert_eq!(CheckState::PartiallyChecked.toggle(true), CheckState::Checked);
        assert_eq!(CheckState::PartiallyChecked.toggle(false), CheckState::Unchecked);
    }

    #[test]
    fn test_codes() {
        for state in [
            CheckState::Unchecked,
            CheckState::Checked,
            CheckState::PartiallyChecked,
        ] {
            assert_eq!(CheckState::from_u8(state.as_u8()), Some(state));
        }
        assert_eq!(CheckState::from_u8(3), None);
    }
}
