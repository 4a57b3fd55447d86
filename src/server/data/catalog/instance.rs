use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct InstanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstanceRepository<'a, C> {
    /// Creates a new instance of [`InstanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an instance by slug within an expansion
    pub async fn find_by_slug(
        &self,
        expansion_id: i32,
        slug: &str,
    ) -> Result<Option<entity::instance::Model>, DbErr> {
        entity::prelude::Instance::find()
            .filter(entity::instance::Column::ExpansionId.eq(expansion_id))
            .filter(entity::instance::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Instances of an expansion in display order
    pub async fn get_by_expansion(
        &self,
        expansion_id: i32,
    ) -> Result<Vec<entity::instance::Model>, DbErr> {
        entity::prelude::Instance::find()
            .filter(entity::instance::Column::ExpansionId.eq(expansion_id))
            .order_by_asc(entity::instance::Column::Order)
            .order_by_asc(entity::instance::Column::Name)
            .all(self.db)
            .await
    }
}
