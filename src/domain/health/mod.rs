pub mod dto;
pub mod handler;

pub use handler::{health_check, render_metrics};
