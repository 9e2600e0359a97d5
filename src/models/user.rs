//! User records as served by the remote dataset.

use serde::{Deserialize, Serialize};

/// A user from the remote dataset.
///
/// Users are fetched once per session and never mutated; every other
/// record in the dataset hangs off a user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Postal address nested inside a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Geographic coordinates. The dataset serves these as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Company nested inside a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}
