//! Member entity <-> model mapper

use roster_core::{Member, MemberRole, NewMember, SocialLinks};
use serde_json::Value;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            imageurl: model.imageurl,
            role: MemberRole::from_stored(model.role.as_deref()),
            sociallinks: model.sociallinks.as_ref().and_then(social_links_from_json),
            priority: model.priority,
        }
    }
}

/// Read a JSON object of links, keeping only string values
///
/// Rows edited by hand may hold `null` or non-string entries.
pub fn social_links_from_json(value: &Value) -> Option<SocialLinks> {
    let links: SocialLinks = value
        .as_object()?
        .iter()
        .filter_map(|(platform, url)| url.as_str().map(|url| (platform.clone(), url.to_string())))
        .collect();

    (!links.is_empty()).then_some(links)
}

/// Column values for an insert or full update
pub struct MemberWrite {
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: &'static str,
    pub sociallinks: Option<Value>,
    pub priority: Option<i32>,
}

impl MemberWrite {
    pub fn new(member: &NewMember) -> Self {
        Self {
            firstname: member.firstname.clone(),
            lastname: member.lastname.clone(),
            imageurl: member.imageurl.clone(),
            role: member.role.as_str(),
            sociallinks: member
                .sociallinks
                .as_ref()
                .and_then(|links| serde_json::to_value(links).ok()),
            priority: member.priority,
        }
    }
}
