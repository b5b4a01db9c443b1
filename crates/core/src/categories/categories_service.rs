use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::categories_model::{Category, CategoryView, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::constants::DEFAULT_CATEGORIES;
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::TransactionRepositoryTrait;

/// Service managing system default categories and user-owned custom
/// categories. Name resolution spans both scopes; creation-time uniqueness
/// checks guarantee a name never resolves ambiguously.
pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl CategoryService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        CategoryService {
            category_repository,
            transaction_repository,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn ensure_default_categories(&self) -> Result<()> {
        for (name, category_type) in DEFAULT_CATEGORIES {
            if self.category_repository.exists_default_named(name)? {
                continue;
            }
            debug!("Seeding default category '{}'", name);
            self.category_repository
                .insert(Category {
                    id: Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    category_type,
                    is_custom: false,
                    owner_id: None,
                })
                .await?;
        }
        Ok(())
    }

    fn resolve(&self, name: &str, owner_id: &str) -> Result<Option<Category>> {
        self.category_repository.find_visible_to(name, owner_id)
    }

    fn list_categories(&self, owner_id: &str) -> Result<Vec<CategoryView>> {
        let categories = self.category_repository.list_visible_to(owner_id)?;
        Ok(categories.iter().map(CategoryView::from).collect())
    }

    async fn create_category(
        &self,
        new_category: NewCategory,
        owner_id: &str,
    ) -> Result<CategoryView> {
        // A custom name may neither shadow a default nor repeat within the
        // owner's own set.
        if self
            .category_repository
            .exists_default_named(&new_category.name)?
            || self
                .category_repository
                .exists_custom_named(&new_category.name, owner_id)?
        {
            return Err(Error::Conflict(
                "Category with this name already exists".to_string(),
            ));
        }

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: new_category.name,
            category_type: new_category.category_type,
            is_custom: true,
            owner_id: Some(owner_id.to_string()),
        };

        let saved = self.category_repository.insert(category).await?;
        Ok(CategoryView::from(&saved))
    }

    async fn delete_category(&self, name: &str, owner_id: &str) -> Result<()> {
        if self.category_repository.exists_default_named(name)? {
            return Err(Error::Forbidden(
                "Cannot delete default categories".to_string(),
            ));
        }

        // The name is not a default, so visibility can only match the
        // owner's own custom category.
        let category = self
            .category_repository
            .find_visible_to(name, owner_id)?
            .ok_or_else(|| Error::NotFound("Category not found".to_string()))?;

        if self
            .transaction_repository
            .exists_with_category(owner_id, name)?
        {
            return Err(ValidationError::CategoryInUse(name.to_string()).into());
        }

        self.category_repository.delete(&category.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::TransactionType;
    use crate::transactions::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    // ============== Mock repositories ==============

    struct MockCategoryRepository {
        categories: RwLock<Vec<Category>>,
    }

    impl MockCategoryRepository {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories: RwLock::new(categories),
            }
        }

        fn count(&self) -> usize {
            self.categories.read().unwrap().len()
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn find_visible_to(&self, name: &str, owner_id: &str) -> Result<Option<Category>> {
            Ok(self
                .categories
                .read()
                .unwrap()
                .iter()
                .find(|c| {
                    c.name == name
                        && (c.is_default() || c.owner_id.as_deref() == Some(owner_id))
                })
                .cloned())
        }

        fn list_visible_to(&self, owner_id: &str) -> Result<Vec<Category>> {
            Ok(self
                .categories
                .read()
                .unwrap()
                .iter()
                .filter(|c| c.is_default() || c.owner_id.as_deref() == Some(owner_id))
                .cloned()
                .collect())
        }

        fn exists_default_named(&self, name: &str) -> Result<bool> {
            Ok(self
                .categories
                .read()
                .unwrap()
                .iter()
                .any(|c| c.is_default() && c.name == name))
        }

        fn exists_custom_named(&self, name: &str, owner_id: &str) -> Result<bool> {
            Ok(self
                .categories
                .read()
                .unwrap()
                .iter()
                .any(|c| c.is_custom && c.name == name && c.owner_id.as_deref() == Some(owner_id)))
        }

        async fn insert(&self, category: Category) -> Result<Category> {
            self.categories.write().unwrap().push(category.clone());
            Ok(category)
        }

        async fn delete(&self, id: &str) -> Result<()> {
            self.categories.write().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    struct MockTransactionRepository {
        transactions: Vec<Transaction>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn find_by_id(&self, _id: &str, _owner_id: &str) -> Result<Option<Transaction>> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        fn find_in_range(
            &self,
            _owner_id: &str,
            _start_date: Option<NaiveDate>,
            _end_date: Option<NaiveDate>,
            _category_name: Option<&str>,
        ) -> Result<Vec<Transaction>> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        fn find_since(&self, _owner_id: &str, _start_date: NaiveDate) -> Result<Vec<Transaction>> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        fn find_for_month(
            &self,
            _owner_id: &str,
            _year: i32,
            _month: i32,
        ) -> Result<Vec<Transaction>> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        fn find_for_year(&self, _owner_id: &str, _year: i32) -> Result<Vec<Transaction>> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        fn exists_with_category(&self, owner_id: &str, category_name: &str) -> Result<bool> {
            Ok(self
                .transactions
                .iter()
                .any(|t| t.owner_id == owner_id && t.category_name == category_name))
        }

        async fn insert(&self, _transaction: Transaction) -> Result<Transaction> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        async fn update(&self, _transaction: Transaction) -> Result<Transaction> {
            Err(Error::Repository("not used in these tests".to_string()))
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Err(Error::Repository("not used in these tests".to_string()))
        }
    }

    fn custom(name: &str, owner_id: &str) -> Category {
        Category {
            id: format!("custom-{owner_id}-{name}"),
            name: name.to_string(),
            category_type: TransactionType::Expense,
            is_custom: true,
            owner_id: Some(owner_id.to_string()),
        }
    }

    fn service_with(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
    ) -> (CategoryService, Arc<MockCategoryRepository>) {
        let category_repository = Arc::new(MockCategoryRepository::new(categories));
        let service = CategoryService::new(
            category_repository.clone(),
            Arc::new(MockTransactionRepository { transactions }),
        );
        (service, category_repository)
    }

    async fn seeded_service() -> (CategoryService, Arc<MockCategoryRepository>) {
        let (service, repository) = service_with(vec![], vec![]);
        service.ensure_default_categories().await.unwrap();
        (service, repository)
    }

    // ============== bootstrap ==============

    #[tokio::test]
    async fn seeding_creates_each_default_exactly_once() {
        let (service, repository) = seeded_service().await;
        assert_eq!(repository.count(), DEFAULT_CATEGORIES.len());

        // Idempotent: a second run changes nothing.
        service.ensure_default_categories().await.unwrap();
        assert_eq!(repository.count(), DEFAULT_CATEGORIES.len());
    }

    #[tokio::test]
    async fn seeded_salary_is_income_and_the_rest_are_expenses() {
        let (service, _) = seeded_service().await;

        let salary = service.resolve("Salary", "user-1").unwrap().unwrap();
        assert_eq!(salary.category_type, TransactionType::Income);
        assert!(salary.is_default());

        let rent = service.resolve("Rent", "user-1").unwrap().unwrap();
        assert_eq!(rent.category_type, TransactionType::Expense);
    }

    // ============== resolution ==============

    #[tokio::test]
    async fn resolution_sees_defaults_and_own_customs_only() {
        let (service, _) = service_with(
            vec![custom("Books", "user-1"), custom("Hobbies", "user-2")],
            vec![],
        );
        service.ensure_default_categories().await.unwrap();

        assert!(service.resolve("Food", "user-1").unwrap().is_some());
        assert!(service.resolve("Books", "user-1").unwrap().is_some());
        // Another user's custom category is invisible.
        assert!(service.resolve("Hobbies", "user-1").unwrap().is_none());
        assert!(service.resolve("Unknown", "user-1").unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_combines_defaults_with_own_customs() {
        let (service, _) = service_with(
            vec![custom("Books", "user-1"), custom("Hobbies", "user-2")],
            vec![],
        );
        service.ensure_default_categories().await.unwrap();

        let views = service.list_categories("user-1").unwrap();
        assert_eq!(views.len(), DEFAULT_CATEGORIES.len() + 1);
        assert!(views.iter().any(|v| v.name == "Books" && v.is_custom));
        assert!(!views.iter().any(|v| v.name == "Hobbies"));
    }

    // ============== create ==============

    #[tokio::test]
    async fn creating_a_category_named_like_a_default_conflicts() {
        let (service, _) = seeded_service().await;

        let result = service
            .create_category(
                NewCategory {
                    name: "Salary".to_string(),
                    category_type: TransactionType::Income,
                },
                "user-1",
            )
            .await;

        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn creating_a_duplicate_custom_name_conflicts() {
        let (service, _) = service_with(vec![custom("Books", "user-1")], vec![]);

        let result = service
            .create_category(
                NewCategory {
                    name: "Books".to_string(),
                    category_type: TransactionType::Expense,
                },
                "user-1",
            )
            .await;

        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn two_users_may_share_a_custom_name() {
        let (service, _) = service_with(vec![custom("Books", "user-2")], vec![]);

        let view = service
            .create_category(
                NewCategory {
                    name: "Books".to_string(),
                    category_type: TransactionType::Expense,
                },
                "user-1",
            )
            .await
            .unwrap();

        assert!(view.is_custom);
        assert_eq!(view.name, "Books");
    }

    // ============== delete ==============

    #[tokio::test]
    async fn deleting_a_default_category_is_forbidden() {
        let (service, _) = seeded_service().await;

        let result = service.delete_category("Food", "user-1").await;
        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn deleting_a_missing_custom_category_is_not_found() {
        let (service, _) = seeded_service().await;

        let result = service.delete_category("Books", "user-1").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn deleting_an_in_use_category_is_rejected() {
        let transaction = Transaction {
            id: "tx-1".to_string(),
            amount: dec!(25),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category_name: "Books".to_string(),
            description: None,
            transaction_type: TransactionType::Expense,
            owner_id: "user-1".to_string(),
        };
        let (service, _) = service_with(vec![custom("Books", "user-1")], vec![transaction]);

        let result = service.delete_category("Books", "user-1").await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::CategoryInUse(_)))
        ));
    }

    #[tokio::test]
    async fn deleting_an_unused_custom_category_removes_it() {
        let (service, repository) = service_with(vec![custom("Books", "user-1")], vec![]);

        service.delete_category("Books", "user-1").await.unwrap();
        assert_eq!(repository.count(), 0);
    }
}
