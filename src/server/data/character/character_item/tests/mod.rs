use entity::sea_orm_active_enums::ItemListType;
use lootledger_test_utils::prelude::*;

use crate::server::data::character::character_item::{CharacterItemRepository, NewReceivedItem};

mod close_prio_gap;
