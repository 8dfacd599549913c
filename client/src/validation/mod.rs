//! Form validation rules applied before anything is sent to the API.

pub mod login;
