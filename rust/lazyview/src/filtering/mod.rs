//! Adaptors that drop elements: by predicate, by chooser, by duplication, by set
//! difference, and by failing to join. `take_while` and `skip_while` cut the
//! sequence where a predicate first fails.

pub mod choose;
pub mod except;
pub mod filter;
pub mod join_where;
pub mod take_while;
pub mod unique;
