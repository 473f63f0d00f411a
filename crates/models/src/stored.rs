use serde::{Deserialize, Serialize};

/// Boundary form of a persisted document: the store-assigned identifier as a
/// plain `id` string plus the declared fields of the kind. The store's native
/// key field never appears here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub doc: T,
}
