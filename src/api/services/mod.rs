pub mod dashboard;
pub mod frontend;
pub mod health;
pub mod helpers;
pub mod types;

pub use dashboard::{DashboardService, dashboard_routes};
pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use types::{ApiResponse, ErrorCode};
