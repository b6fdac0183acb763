// Portfolio content: projects with case studies, and skills.
// Read-only, in memory; there is no persistence layer.

pub mod data;
pub mod handlers;
pub mod models;
