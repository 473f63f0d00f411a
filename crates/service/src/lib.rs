//! Service layer providing content operations on top of the document store.
//! - `storage`: the store adapter contract and its file-backed engine.
//! - `content`: typed, intention-revealing operations per collection.
//! - `seed`: idempotent bootstrap of default content.

pub mod content;
pub mod errors;
pub mod seed;
pub mod storage;
