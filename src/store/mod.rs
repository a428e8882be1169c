//! Ownership-checked persistence layer. Every function takes the resolved
//! owner id explicitly; nothing in this module reads request state. All
//! lookups on owned rows filter by (id, user_id), so a row belonging to
//! another user is indistinguishable from one that does not exist.

pub mod journals;
pub mod medications;
pub mod moods;
pub mod todos;
pub mod users;
