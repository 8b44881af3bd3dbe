pub mod admin;
pub mod auth;
pub mod body;
pub mod docs;
pub mod error;
pub mod events;
pub mod health;
pub mod matches;
pub mod players;
pub mod response;
pub mod routes;
