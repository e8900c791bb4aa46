//! Контракты каталога: агрегаты, DTO и общие типы валидации.
//!
//! Crate не зависит от UI и может использоваться любым потребителем
//! (frontend, тесты, будущий API).

pub mod domain;
pub mod shared;
