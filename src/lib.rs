pub mod collaborators;
pub mod models;
pub mod rules;
pub mod services;
