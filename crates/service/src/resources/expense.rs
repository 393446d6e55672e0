use chrono::{NaiveDate, Utc};
use models::expense;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::errors::{EntityKind, ServiceError};
use crate::repository::Stored;
use crate::validation::{require, require_text};

/// `expenseDate` travels as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseDto {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub expense_date: Option<NaiveDate>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

pub struct Expenses;

impl Stored for Expenses {
    type Entity = expense::Entity;
    type Model = expense::Model;
    type ActiveModel = expense::ActiveModel;
    type PrimaryKey = expense::PrimaryKey;
}

impl Resource for Expenses {
    type Dto = ExpenseDto;
    const KIND: EntityKind = EntityKind::Expense;
    const COLLECTION: &'static str = "expenses";

    fn validate(dto: &ExpenseDto) -> Result<(), ServiceError> {
        require_text(dto.title.as_deref(), "title", "Title is required")?;
        require(dto.amount.as_ref(), "amount", "Amount is required")?;
        require_text(dto.category.as_deref(), "category", "Category is required")?;
        require(dto.expense_date.as_ref(), "expenseDate", "Expense date is required")
    }

    fn new_row(dto: ExpenseDto) -> expense::ActiveModel {
        expense::ActiveModel {
            id: NotSet,
            title: Set(dto.title.unwrap_or_default()),
            amount: Set(dto.amount.unwrap_or_default()),
            category: Set(dto.category.unwrap_or_default()),
            expense_date: Set(dto.expense_date.unwrap_or(NaiveDate::MIN)),
            created_at: Set(Utc::now().into()),
        }
    }

    fn overwrite(row: &mut expense::ActiveModel, dto: ExpenseDto) {
        row.title = Set(dto.title.unwrap_or_default());
        row.amount = Set(dto.amount.unwrap_or_default());
        row.category = Set(dto.category.unwrap_or_default());
        row.expense_date = Set(dto.expense_date.unwrap_or(NaiveDate::MIN));
    }

    fn to_dto(m: expense::Model) -> ExpenseDto {
        ExpenseDto {
            id: Some(m.id),
            title: Some(m.title),
            amount: Some(m.amount),
            category: Some(m.category),
            expense_date: Some(m.expense_date),
            created_at: Some(m.created_at),
        }
    }
}
