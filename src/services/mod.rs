pub mod attendance;
pub mod dashboard;
pub mod marks;
pub mod reference;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::AttendanceService;
pub use dashboard::DashboardService;
pub use marks::MarkService;
pub use reference::ReferenceService;
