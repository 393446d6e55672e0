//! One CRUD implementation shared by every simple resource.

use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, DatabaseTransaction, IntoActiveModel, TransactionTrait};
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::errors::{EntityKind, ServiceError};
use crate::logging::logged;
use crate::repository::{Repository, SeaOrmRepository, Stored};

/// A stored entity exposed through the uniform CRUD surface.
///
/// `new_row` must leave the primary key unset so the store assigns it;
/// `overwrite` replaces every mutable column with the supplied values.
pub trait Resource: Stored {
    /// Wire representation.
    type Dto: Serialize + DeserializeOwned + Send + Sync + 'static;

    const KIND: EntityKind;
    /// Path segment under `/api`.
    const COLLECTION: &'static str;

    fn validate(dto: &Self::Dto) -> Result<(), ServiceError>;
    fn new_row(dto: Self::Dto) -> Self::ActiveModel;
    fn overwrite(row: &mut Self::ActiveModel, dto: Self::Dto);
    fn to_dto(model: Self::Model) -> Self::Dto;
}

pub struct CrudService<R: Resource> {
    db: DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

impl<R: Resource> CrudService<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _resource: PhantomData } }

    fn repo(&self) -> SeaOrmRepository<R> { SeaOrmRepository::new(self.db.clone()) }

    #[instrument(skip_all, fields(entity = %R::KIND))]
    pub async fn create(&self, dto: R::Dto) -> Result<R::Dto, ServiceError> {
        logged(R::KIND, "create", async {
            R::validate(&dto)?;
            let saved = self.repo().save(R::new_row(dto)).await?;
            Ok(R::to_dto(saved))
        })
        .await
    }

    #[instrument(skip_all, fields(entity = %R::KIND))]
    pub async fn list(&self) -> Result<Vec<R::Dto>, ServiceError> {
        logged(R::KIND, "list", async {
            let rows = self.repo().find_all().await?;
            Ok(rows.into_iter().map(R::to_dto).collect())
        })
        .await
    }

    #[instrument(skip(self), fields(entity = %R::KIND))]
    pub async fn get_by_id(&self, id: i32) -> Result<R::Dto, ServiceError> {
        logged(R::KIND, "get_by_id", async {
            let found = self.repo().find_by_id(id).await?;
            found.map(R::to_dto).ok_or_else(|| ServiceError::not_found(R::KIND, id))
        })
        .await
    }

    /// Full-field overwrite inside one transaction: find, replace, save.
    #[instrument(skip(self, dto), fields(entity = %R::KIND))]
    pub async fn update(&self, id: i32, dto: R::Dto) -> Result<R::Dto, ServiceError> {
        logged(R::KIND, "update", async {
            R::validate(&dto)?;
            let txn = self.db.begin().await?;
            let repo = SeaOrmRepository::<R, DatabaseTransaction>::new(txn);
            let existing = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
            let mut row = existing.into_active_model();
            R::overwrite(&mut row, dto);
            let saved = repo.save(row).await?;
            repo.into_inner().commit().await?;
            Ok(R::to_dto(saved))
        })
        .await
    }

    #[instrument(skip(self), fields(entity = %R::KIND))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        logged(R::KIND, "delete", async {
            let repo = self.repo();
            if !repo.exists_by_id(id).await? {
                return Err(ServiceError::not_found(R::KIND, id));
            }
            repo.delete_by_id(id).await?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::resources::*;
    use crate::test_support::setup_test_db;

    #[tokio::test]
    async fn create_then_get_returns_input_with_id_and_timestamp() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let users = CrudService::<Users>::new(db.clone());
        let input = UserDto { id: Some(999), name: Some("Jane".into()), email: Some("jane@x.io".into()), created_at: None };

        let created = users.create(input.clone()).await?;
        assert!(created.id.is_some());
        assert_ne!(created.id, Some(999));
        assert!(created.created_at.is_some());

        let fetched = users.get_by_id(created.id.unwrap_or_default()).await?;
        assert_eq!(fetched, created);
        assert_eq!(UserDto { id: None, created_at: None, ..fetched }, UserDto { id: None, ..input });
        Ok(())
    }

    /// Create, fetch, and compare everything except the store-assigned fields.
    async fn assert_round_trip<R>(
        db: &sea_orm::DatabaseConnection,
        input: R::Dto,
        strip: impl Fn(R::Dto) -> R::Dto,
    ) -> Result<R::Dto, anyhow::Error>
    where
        R: Resource,
        R::Dto: Clone + PartialEq + std::fmt::Debug,
    {
        let svc = CrudService::<R>::new(db.clone());
        let created = svc.create(input.clone()).await?;
        assert_eq!(strip(created.clone()), strip(input));
        Ok(created)
    }

    #[tokio::test]
    async fn every_resource_round_trips_through_the_store() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;

        let account = AccountDto { account_name: Some("Travel Fund".into()), account_type: Some("budget".into()), ..Default::default() };
        let a = assert_round_trip::<Accounts>(&db, account.clone(), |d| AccountDto { id: None, created_at: None, ..d }).await?;
        let got = CrudService::<Accounts>::new(db.clone()).get_by_id(a.id.unwrap_or_default()).await?;
        assert!(a.id.is_some() && a.created_at.is_some());
        assert_eq!(got, a);
        assert_eq!(AccountDto { id: None, created_at: None, ..got }, account);

        let employee = EmployeeDto { first_name: Some("Ada".into()), email: Some("ada@x.io".into()), ..Default::default() };
        let e = assert_round_trip::<Employees>(&db, employee.clone(), |d| EmployeeDto { id: None, created_at: None, ..d }).await?;
        let got = CrudService::<Employees>::new(db.clone()).get_by_id(e.id.unwrap_or_default()).await?;
        assert!(e.id.is_some() && e.created_at.is_some());
        assert_eq!(got, e);
        assert_eq!(EmployeeDto { id: None, created_at: None, ..got }, employee);

        let expense = ExpenseDto {
            title: Some("Taxi".into()),
            amount: Some(23.5),
            category: Some("travel".into()),
            expense_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..Default::default()
        };
        let x = assert_round_trip::<Expenses>(&db, expense.clone(), |d| ExpenseDto { id: None, created_at: None, ..d }).await?;
        let expenses = CrudService::<Expenses>::new(db.clone());
        let got = expenses.get_by_id(x.id.unwrap_or_default()).await?;
        assert!(x.id.is_some() && x.created_at.is_some());
        assert_eq!(got, x);
        assert_eq!(ExpenseDto { id: None, created_at: None, ..got }, expense);

        assert_eq!(expenses.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_required_field() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let accounts = CrudService::<Accounts>::new(db);
        let err = accounts
            .create(AccountDto { account_name: Some("  ".into()), account_type: Some("x".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "accountName", .. }));
        assert!(accounts.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let users = CrudService::<Users>::new(db.clone());
        let expenses = CrudService::<Expenses>::new(db);

        let dto = UserDto { name: Some("n".into()), email: Some("e".into()), ..Default::default() };
        assert!(matches!(users.update(41, dto).await, Err(ServiceError::NotFound { entity: EntityKind::User, id: 41 })));
        assert!(matches!(users.delete(41).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(users.get_by_id(41).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(
            expenses.delete(5).await,
            Err(ServiceError::NotFound { entity: EntityKind::Expense, id: 5 })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_every_field() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let employees = CrudService::<Employees>::new(db);
        let created = employees
            .create(EmployeeDto {
                first_name: Some("Ada".into()),
                last_name: Some("Lovelace".into()),
                department: Some("R&D".into()),
                ..Default::default()
            })
            .await?;
        let id = created.id.unwrap_or_default();

        let updated = employees.update(id, EmployeeDto { first_name: Some("Grace".into()), ..Default::default() }).await?;
        assert_eq!(updated.first_name.as_deref(), Some("Grace"));
        assert_eq!(updated.last_name, None);
        assert_eq!(updated.department, None);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(employees.get_by_id(id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_row() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let users = CrudService::<Users>::new(db);
        let created = users.create(UserDto { name: Some("A".into()), email: Some("a@x".into()), ..Default::default() }).await?;
        let id = created.id.unwrap_or_default();

        let err = users.update(id, UserDto { name: Some("B".into()), ..Default::default() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
        assert_eq!(users.get_by_id(id).await?.name.as_deref(), Some("A"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_row() -> Result<(), anyhow::Error> {
        let (_dir, db) = setup_test_db().await?;
        let users = CrudService::<Users>::new(db);
        let created = users.create(UserDto { name: Some("A".into()), email: Some("a@x".into()), ..Default::default() }).await?;
        let id = created.id.unwrap_or_default();
        users.delete(id).await?;
        assert!(matches!(users.get_by_id(id).await, Err(ServiceError::NotFound { .. })));
        Ok(())
    }
}
