//! ID type wrappers for type safety.

mod entity_id;
mod id_macro;

pub use entity_id::EntityId;
