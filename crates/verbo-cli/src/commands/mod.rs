pub mod analyze;
pub mod check;
pub mod conjugate;
pub mod dispatch;
pub mod groups;
pub mod import;
pub mod info;
pub mod list;
pub mod mark;
pub mod migrate;
pub mod quiz;
pub mod schema;
pub mod shared;
