use chrono::Utc;
use models::account;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::errors::{EntityKind, ServiceError};
use crate::repository::Stored;
use crate::validation::require_text;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: Option<i32>,
    pub account_name: Option<String>,
    pub account_type: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

pub struct Accounts;

impl Stored for Accounts {
    type Entity = account::Entity;
    type Model = account::Model;
    type ActiveModel = account::ActiveModel;
    type PrimaryKey = account::PrimaryKey;
}

impl Resource for Accounts {
    type Dto = AccountDto;
    const KIND: EntityKind = EntityKind::Account;
    const COLLECTION: &'static str = "accounts";

    fn validate(dto: &AccountDto) -> Result<(), ServiceError> {
        require_text(dto.account_name.as_deref(), "accountName", "Account name is required")?;
        require_text(dto.account_type.as_deref(), "accountType", "Account type is required")
    }

    fn new_row(dto: AccountDto) -> account::ActiveModel {
        account::ActiveModel {
            id: NotSet,
            account_name: Set(dto.account_name.unwrap_or_default()),
            account_type: Set(dto.account_type.unwrap_or_default()),
            created_at: Set(Utc::now().into()),
        }
    }

    fn overwrite(row: &mut account::ActiveModel, dto: AccountDto) {
        row.account_name = Set(dto.account_name.unwrap_or_default());
        row.account_type = Set(dto.account_type.unwrap_or_default());
    }

    fn to_dto(m: account::Model) -> AccountDto {
        AccountDto {
            id: Some(m.id),
            account_name: Some(m.account_name),
            account_type: Some(m.account_type),
            created_at: Some(m.created_at),
        }
    }
}
