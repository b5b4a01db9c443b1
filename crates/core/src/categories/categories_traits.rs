use crate::categories::categories_model::{Category, CategoryView, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations, implemented by the storage
/// layer. All name matching is case-sensitive exact match.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Find a category visible to the owner: a default, or a custom
    /// category the owner created.
    fn find_visible_to(&self, name: &str, owner_id: &str) -> Result<Option<Category>>;

    /// All categories visible to the owner (defaults plus own customs).
    fn list_visible_to(&self, owner_id: &str) -> Result<Vec<Category>>;

    /// Whether a default category with this name exists.
    fn exists_default_named(&self, name: &str) -> Result<bool>;

    /// Whether the owner already has a custom category with this name.
    fn exists_custom_named(&self, name: &str, owner_id: &str) -> Result<bool>;

    /// Persist a category the service has already validated.
    async fn insert(&self, category: Category) -> Result<Category>;

    /// Remove a category by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Seed the default categories, skipping any that already exist.
    async fn ensure_default_categories(&self) -> Result<()>;

    /// Resolve a name to the category visible to the owner, if any.
    ///
    /// Defaults and the owner's customs cannot collide, so the result is
    /// unambiguous.
    fn resolve(&self, name: &str, owner_id: &str) -> Result<Option<Category>>;

    /// All categories visible to the owner.
    fn list_categories(&self, owner_id: &str) -> Result<Vec<CategoryView>>;

    /// Create a custom category owned by the caller.
    async fn create_category(&self, new_category: NewCategory, owner_id: &str)
        -> Result<CategoryView>;

    /// Delete an unused custom category owned by the caller.
    async fn delete_category(&self, name: &str, owner_id: &str) -> Result<()>;
}
