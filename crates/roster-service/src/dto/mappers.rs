//! Entity to DTO mappers

use roster_core::Member;

use super::responses::MemberResponse;

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            firstname: member.firstname.clone(),
            lastname: member.lastname.clone(),
            imageurl: member.imageurl.clone(),
            role: member.role,
            sociallinks: member.sociallinks.clone(),
            priority: member.priority,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            firstname: member.firstname,
            lastname: member.lastname,
            imageurl: member.imageurl,
            role: member.role,
            sociallinks: member.sociallinks,
            priority: member.priority,
        }
    }
}

/// Convert a list of members, keeping order
pub fn member_responses(members: Vec<Member>) -> Vec<MemberResponse> {
    members.into_iter().map(MemberResponse::from).collect()
}
