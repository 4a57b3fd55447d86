//! Guild role permissions.
//!
//! Roles store their permissions as a comma separated list of keys (`edit.raid-loot,view.prios`).
//! The list is parsed once per request into a [`PermissionSet`] which handlers query.

/// A single permission a guild role can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    EditRaidLoot,
    EditItems,
    EditPrios,
    EditCharacters,
    ViewPrios,
    ViewWishlists,
    ViewOfficerNotes,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::EditRaidLoot,
        Permission::EditItems,
        Permission::EditPrios,
        Permission::EditCharacters,
        Permission::ViewPrios,
        Permission::ViewWishlists,
        Permission::ViewOfficerNotes,
    ];

    /// Key stored in the role's permission list
    pub fn key(self) -> &'static str {
        match self {
            Self::EditRaidLoot => "edit.raid-loot",
            Self::EditItems => "edit.items",
            Self::EditPrios => "edit.prios",
            Self::EditCharacters => "edit.characters",
            Self::ViewPrios => "view.prios",
            Self::ViewWishlists => "view.wishlists",
            Self::ViewOfficerNotes => "view.officer-notes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Set of permissions held by a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionSet(u32);

impl PermissionSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Parses a role's comma separated permission list, unknown keys are ignored
    pub fn from_role_permissions(permissions: &str) -> Self {
        permissions
            .split(',')
            .filter_map(|key| Permission::from_key(key.trim()))
            .collect()
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission.bit();
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        let mut set = Self::empty();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}
