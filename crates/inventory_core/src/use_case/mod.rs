//! Fruit use-cases.
//!
//! # Responsibility
//! - Name each inventory operation as its own injectable seam.
//! - Delegate to the repository without adding business rules.
//!
//! # Invariants
//! - Use-cases only receive already-validated DTOs and ids.
//! - Use-cases stay storage-agnostic.

pub mod create_fruit;
pub mod delete_fruit;
pub mod get_fruit;
pub mod get_fruits;
pub mod update_fruit;

pub use create_fruit::CreateFruit;
pub use delete_fruit::DeleteFruit;
pub use get_fruit::GetFruit;
pub use get_fruits::GetFruits;
pub use update_fruit::UpdateFruit;
