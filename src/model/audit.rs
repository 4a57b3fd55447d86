use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntryDto {
    pub id: i32,
    pub description: String,
    pub log_type: Option<String>,
    pub member_name: Option<String>,
    pub character_id: Option<i32>,
    pub character_name: Option<String>,
    pub item_id: Option<i32>,
    pub item_name: Option<String>,
    pub raid_name: Option<String>,
    pub batch_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchDto {
    pub id: i32,
    pub name: Option<String>,
    pub note: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLogPageDto {
    pub batch: Option<BatchDto>,
    pub character_id: Option<i32>,
    pub entries: Vec<AuditLogEntryDto>,
}
