//! Sidebar navigation entries
//!
//! The menu is static: built at compile time and never mutated.
//! An entry is either a direct link (`Leaf`) or an expandable group of
//! sub-links (`Group`), never both.

/// Icons used by the dashboard chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Analytics,
    Team,
    Documents,
    Profile,
    Settings,
    Logout,
    ChevronDown,
    ChevronUp,
    ChevronRight,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::Analytics => "📊",
            NavIcon::Team => "👥",
            NavIcon::Documents => "📄",
            NavIcon::Profile => "👤",
            NavIcon::Settings => "⚙️",
            NavIcon::Logout => "🚪",
            NavIcon::ChevronDown => "▾",
            NavIcon::ChevronUp => "▴",
            NavIcon::ChevronRight => "›",
        }
    }
}

/// Link shown inside an expanded group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Top-level sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Leaf {
        key: &'static str,
        label: &'static str,
        icon: NavIcon,
        href: &'static str,
    },
    Group {
        key: &'static str,
        label: &'static str,
        icon: NavIcon,
        sub_items: &'static [SubItem],
    },
}

impl MenuItem {
    pub fn key(&self) -> &'static str {
        match self {
            MenuItem::Leaf { key, .. } | MenuItem::Group { key, .. } => key,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Leaf { label, .. } | MenuItem::Group { label, .. } => label,
        }
    }

    pub fn icon(&self) -> NavIcon {
        match self {
            MenuItem::Leaf { icon, .. } | MenuItem::Group { icon, .. } => *icon,
        }
    }

    /// Every href reachable from this entry, in display order
    pub fn hrefs(&self) -> Vec<&'static str> {
        match self {
            MenuItem::Leaf { href, .. } => vec![*href],
            MenuItem::Group { sub_items, .. } => sub_items.iter().map(|s| s.href).collect(),
        }
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem::Leaf {
        key: "home",
        label: "Home",
        icon: NavIcon::Home,
        href: "/dashboard",
    },
    MenuItem::Group {
        key: "analytics",
        label: "Analytics",
        icon: NavIcon::Analytics,
        sub_items: &[
            SubItem { label: "Overview", href: "/dashboard/analytics/overview" },
            SubItem { label: "Reports", href: "/dashboard/analytics/reports" },
        ],
    },
    MenuItem::Group {
        key: "management",
        label: "Management",
        icon: NavIcon::Team,
        sub_items: &[
            SubItem { label: "Team", href: "/dashboard/management/team" },
            SubItem { label: "Projects", href: "/dashboard/management/projects" },
        ],
    },
    MenuItem::Leaf {
        key: "documents",
        label: "Documents",
        icon: NavIcon::Documents,
        href: "/dashboard/documents",
    },
    MenuItem::Leaf {
        key: "profile",
        label: "Profile",
        icon: NavIcon::Profile,
        href: "/dashboard/profile",
    },
    MenuItem::Leaf {
        key: "settings",
        label: "Settings",
        icon: NavIcon::Settings,
        href: "/dashboard/settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_has_six_entries_in_order() {
        let keys: Vec<_> = MENU_ITEMS.iter().map(MenuItem::key).collect();
        assert_eq!(
            keys,
            ["home", "analytics", "management", "documents", "profile", "settings"]
        );
    }

    #[test]
    fn test_groups_have_two_sub_items() {
        let groups: Vec<_> = MENU_ITEMS.iter().filter(|item| matches!(item, MenuItem::Group { .. })).collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label(), "Analytics");
        assert_eq!(groups[1].label(), "Management");

        for group in groups {
            match group {
                MenuItem::Group { sub_items, .. } => assert_eq!(sub_items.len(), 2),
                MenuItem::Leaf { .. } => unreachable!(),
            }
        }
    }

    #[test]
    fn test_hrefs_are_unique_and_scoped_to_dashboard() {
        let hrefs: Vec<_> = MENU_ITEMS.iter().flat_map(MenuItem::hrefs).collect();
        assert_eq!(hrefs.len(), 8);

        let unique: HashSet<_> = hrefs.iter().collect();
        assert_eq!(unique.len(), hrefs.len());
        assert!(hrefs.iter().all(|href| href.starts_with("/dashboard")));
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = MENU_ITEMS.iter().map(MenuItem::key).collect();
        assert_eq!(keys.len(), MENU_ITEMS.len());
    }

    #[test]
    fn test_settings_leaf() {
        let settings = MENU_ITEMS.last().copied();
        assert_eq!(
            settings,
            Some(MenuItem::Leaf {
                key: "settings",
                label: "Settings",
                icon: NavIcon::Settings,
                href: "/dashboard/settings",
            })
        );
        assert_eq!(NavIcon::Settings.glyph(), "⚙️");
    }
}
