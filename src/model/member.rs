use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberCharacterDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub level: Option<i32>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub spec: Option<String>,
    pub is_alt: bool,
    pub is_inactive: bool,
    pub raid_name: Option<String>,
    pub public_note: Option<String>,
    pub officer_note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberPageDto {
    pub member_id: i32,
    pub username: String,
    pub characters: Vec<MemberCharacterDto>,
}
