//! Общие контракты дашборда: view-модели, формы, результаты действий.
//!
//! Крейт не делает I/O и используется как backend'ом, так и любым UI-клиентом.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
