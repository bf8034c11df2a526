pub mod route;
pub mod store;
pub mod todo_ops;
