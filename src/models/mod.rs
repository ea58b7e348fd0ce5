pub mod contact;
pub mod task;
pub mod user;

pub use contact::{Contact, ContactInput};
pub use task::{Task, TaskInput};
pub use user::User;
