use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuildDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub expansion_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaidDto {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstanceDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Data shared by every page: the guild header, the current member and a pending flash message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutDto {
    pub guild: GuildDto,
    pub instances: Vec<InstanceDto>,
    pub member_name: String,
    pub member_url: String,
    pub flash: Option<String>,
}

impl LayoutDto {
    pub fn guild_url(&self) -> String {
        format!("/{}/{}", self.guild.id, self.guild.slug)
    }
}
