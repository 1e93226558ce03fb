//! Member entity - one person on the roster

use std::cmp::Ordering;
use std::collections::BTreeMap;

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};

use super::role::MemberRole;

/// Social profile links keyed by platform name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(pub BTreeMap<String, String>);

impl SocialLinks {
    pub const FACEBOOK: &'static str = "facebook";

    /// Link for a platform, if set
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.0.get(platform).map(String::as_str)
    }

    pub fn facebook(&self) -> Option<&str> {
        self.get(Self::FACEBOOK)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SocialLinks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Roster member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: MemberRole,
    pub sociallinks: Option<SocialLinks>,
    /// Lower value means shown earlier; absent or zero means no precedence
    pub priority: Option<i32>,
}

impl Member {
    /// Priority used for ordering; zero counts as unset
    #[inline]
    pub fn effective_priority(&self) -> Option<i32> {
        self.priority.filter(|p| *p != 0)
    }

    /// Uppercased first character of the first name, used to group a page
    pub fn initial(&self) -> String {
        self.firstname
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Public display ordering
    ///
    /// Members with a priority come first, ascending. Ties, including two
    /// members without priority, fall back to first-name order.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        match (self.effective_priority(), other.effective_priority()) {
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) if a != b => a.cmp(&b),
            _ => compare_names(&self.firstname, &other.firstname),
        }
    }
}

thread_local! {
    /// Root-locale collator: tertiary strength, lowercase ahead of uppercase
    static NAME_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        options.case_first = Some(CaseFirst::LowerFirst);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Locale comparison of first names
///
/// Accents, punctuation and Thai prevowels order as a root-locale
/// collation does. Names the collator treats as equal fall back to code
/// points, lowercase first.
fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| b.cmp(a))
}

/// Sort members in public display order (stable)
pub fn sort_for_display(members: &mut [Member]) {
    members.sort_by(Member::display_cmp);
}

/// Member fields as written on insert or full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: MemberRole,
    pub sociallinks: Option<SocialLinks>,
    pub priority: Option<i32>,
}

impl NewMember {
    /// Create a regular member with only a first name
    pub fn new(firstname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: None,
            imageurl: None,
            role: MemberRole::Member,
            sociallinks: None,
            priority: None,
        }
    }

    /// Attach a store-assigned id
    pub fn into_member(self, id: i64) -> Member {
        Member {
            id,
            firstname: self.firstname,
            lastname: self.lastname,
            imageurl: self.imageurl,
            role: self.role,
            sociallinks: self.sociallinks,
            priority: self.priority,
        }
    }
}
