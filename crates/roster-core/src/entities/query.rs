//! Store query filters for member listings

use super::role::MemberRole;

/// Which tier(s) a query is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Any,
    Only(MemberRole),
}

impl RoleFilter {
    pub fn matches(&self, role: MemberRole) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => *wanted == role,
        }
    }
}

/// Filters applied by the store; results come back ordered by last name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub role: RoleFilter,
    /// Exact last name match
    pub lastname: Option<String>,
    /// Case-insensitive substring over first or last name
    pub search: Option<String>,
}

impl MemberQuery {
    /// Every row
    pub fn all() -> Self {
        Self::default()
    }

    /// Rows of a single tier
    pub fn role(role: MemberRole) -> Self {
        Self {
            role: RoleFilter::Only(role),
            ..Self::default()
        }
    }

    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Evaluate the filter in memory
    pub fn matches(&self, role: MemberRole, firstname: &str, lastname: Option<&str>) -> bool {
        if !self.role.matches(role) {
            return false;
        }

        if let Some(wanted) = &self.lastname {
            if lastname != Some(wanted.as_str()) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = firstname.to_lowercase().contains(&term)
                || lastname.is_some_and(|l| l.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        true
    }
}
