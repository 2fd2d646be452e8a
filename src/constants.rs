//! Action bits and role levels

// Action bit constants (one bit per Action, see `Action::bit`)
pub const VIEW: u8 = 1;
pub const CREATE: u8 = 1 << 1;
pub const UPDATE: u8 = 1 << 2;
pub const DELETE: u8 = 1 << 3;

/// Every action bit set
pub const ALL_ACTIONS: u8 = VIEW | CREATE | UPDATE | DELETE;

// Hierarchy positions used by `has_role_level`. Not consulted by grant checks.
pub const ADMIN_LEVEL: u8 = 3;
pub const STAFF_LEVEL: u8 = 2;
pub const VIEWER_LEVEL: u8 = 1;

// Action name mappings
const ACTIONS: &[(&str, u8)] = &[
    ("view", VIEW),
    ("create", CREATE),
    ("update", UPDATE),
    ("delete", DELETE),
];

/// Convert an action mask to a list of action names
pub fn actions_to_names(mask: u8) -> Vec<&'static str> {
    ACTIONS
        .iter()
        .filter(|(_, b)| mask & b == *b)
        .map(|(n, _)| *n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_distinct() {
        assert_eq!(VIEW & CREATE, 0);
        assert_eq!(CREATE & UPDATE, 0);
        assert_eq!(UPDATE & DELETE, 0);
        assert_eq!(ALL_ACTIONS, 0b1111);
    }

    #[test]
    fn test_mask_to_names() {
        assert_eq!(actions_to_names(VIEW | UPDATE), vec!["view", "update"]);
        assert!(actions_to_names(0).is_empty());
        assert_eq!(actions_to_names(ALL_ACTIONS).len(), 4);
    }

    #[test]
    fn test_levels_ordered() {
        assert!(ADMIN_LEVEL > STAFF_LEVEL);
        assert!(STAFF_LEVEL > VIEWER_LEVEL);
    }
}
