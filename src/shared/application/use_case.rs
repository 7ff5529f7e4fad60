/// Base traits for use cases
///
/// Every user-visible action is one object with one dependency and one
/// `execute` entry point. Mutations implement [`UseCase`], reads implement
/// [`Query`].
///
/// # Example
///
/// ```rust,ignore
/// pub struct GetShowsUseCase {
///     show_repository: Arc<dyn ShowRepository>,
/// }
///
/// #[async_trait]
/// impl Query<u32, PaginatedResponse<Show>> for GetShowsUseCase {
///     async fn execute(&self, page: u32) -> AppResult<PaginatedResponse<Show>> {
///         self.show_repository.get_shows(page).await
///     }
/// }
/// ```
use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
