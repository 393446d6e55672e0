use chrono::Utc;
use models::user;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::errors::{EntityKind, ServiceError};
use crate::repository::Stored;
use crate::validation::require_text;

/// `id` and `createdAt` are output-only; values sent by clients are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

pub struct Users;

impl Stored for Users {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type PrimaryKey = user::PrimaryKey;
}

impl Resource for Users {
    type Dto = UserDto;
    const KIND: EntityKind = EntityKind::User;
    const COLLECTION: &'static str = "users";

    fn validate(dto: &UserDto) -> Result<(), ServiceError> {
        require_text(dto.name.as_deref(), "name", "Name is required")?;
        require_text(dto.email.as_deref(), "email", "Email is required")
    }

    fn new_row(dto: UserDto) -> user::ActiveModel {
        user::ActiveModel {
            id: NotSet,
            name: Set(dto.name.unwrap_or_default()),
            email: Set(dto.email.unwrap_or_default()),
            created_at: Set(Utc::now().into()),
        }
    }

    fn overwrite(row: &mut user::ActiveModel, dto: UserDto) {
        row.name = Set(dto.name.unwrap_or_default());
        row.email = Set(dto.email.unwrap_or_default());
    }

    fn to_dto(m: user::Model) -> UserDto {
        UserDto { id: Some(m.id), name: Some(m.name), email: Some(m.email), created_at: Some(m.created_at) }
    }
}
