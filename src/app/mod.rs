//! Host-side driver: decodes API responses, assembles the dashboard and
//! renders it as a standalone HTML page.

pub mod input;
pub mod page;
pub mod state;

pub use input::{parse_audit, parse_profile, parse_transactions};
pub use page::render_page;
pub use state::{AuditView, CategoryView, Dashboard};
