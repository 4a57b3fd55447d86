//! Guild, member and raid repositories.

pub mod guild;
pub mod member;
pub mod raid;
