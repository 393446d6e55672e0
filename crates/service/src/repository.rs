//! Data-access seam: `save`, `find_by_id`, `find_all`, `exists_by_id`, `delete_by_id`.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, PrimaryKeyTrait, TryIntoModel,
};

use crate::errors::ServiceError;

/// Binds a marker type to a SeaORM entity with an `i32` primary key.
pub trait Stored: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel, PrimaryKey = Self::PrimaryKey>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TryIntoModel<Self::Model>
        + Send
        + Sync
        + 'static;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>;
}

#[async_trait]
pub trait Repository<S: Stored>: Send + Sync {
    /// Insert when the id is unset, otherwise update every set column.
    async fn save(&self, row: S::ActiveModel) -> Result<S::Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<S::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<S::Model>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository over a pool or an open transaction.
pub struct SeaOrmRepository<S, C = DatabaseConnection> {
    conn: C,
    _stored: PhantomData<S>,
}

impl<S, C> SeaOrmRepository<S, C> {
    pub fn new(conn: C) -> Self { Self { conn, _stored: PhantomData } }

    /// Hand back the connection, e.g. to commit a transaction.
    pub fn into_inner(self) -> C { self.conn }
}

#[async_trait]
impl<S, C> Repository<S> for SeaOrmRepository<S, C>
where
    S: Stored,
    C: ConnectionTrait + Send + Sync,
{
    async fn save(&self, row: S::ActiveModel) -> Result<S::Model, ServiceError> {
        let saved = row.save(&self.conn).await?;
        Ok(saved.try_into_model()?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<S::Model>, ServiceError> {
        let found = <S::Entity as EntityTrait>::find_by_id(id).one(&self.conn).await?;
        Ok(found)
    }

    async fn find_all(&self) -> Result<Vec<S::Model>, ServiceError> {
        let rows = <S::Entity as EntityTrait>::find().all(&self.conn).await?;
        Ok(rows)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let res = <S::Entity as EntityTrait>::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }
}
