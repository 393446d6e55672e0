use chrono::Utc;
use models::employee;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::crud::Resource;
use crate::errors::{EntityKind, ServiceError};
use crate::repository::Stored;

/// All fields are free text. An update that omits a field clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDto {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

pub struct Employees;

impl Stored for Employees {
    type Entity = employee::Entity;
    type Model = employee::Model;
    type ActiveModel = employee::ActiveModel;
    type PrimaryKey = employee::PrimaryKey;
}

impl Resource for Employees {
    type Dto = EmployeeDto;
    const KIND: EntityKind = EntityKind::Employee;
    const COLLECTION: &'static str = "employees";

    fn validate(_dto: &EmployeeDto) -> Result<(), ServiceError> { Ok(()) }

    fn new_row(dto: EmployeeDto) -> employee::ActiveModel {
        employee::ActiveModel {
            id: NotSet,
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email),
            department: Set(dto.department),
            created_at: Set(Utc::now().into()),
        }
    }

    fn overwrite(row: &mut employee::ActiveModel, dto: EmployeeDto) {
        row.first_name = Set(dto.first_name);
        row.last_name = Set(dto.last_name);
        row.email = Set(dto.email);
        row.department = Set(dto.department);
    }

    fn to_dto(m: employee::Model) -> EmployeeDto {
        EmployeeDto {
            id: Some(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            department: m.department,
            created_at: Some(m.created_at),
        }
    }
}
