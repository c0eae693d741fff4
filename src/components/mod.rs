//! UI Components
//!
//! Leptos components for the presentation surface.

mod new_item_form;
mod notice_bar;
mod todo_list;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use notice_bar::NoticeBar;
pub use todo_list::TodoList;
pub use todo_row::{HintItem, TodoRow};
