//! Page components

mod about;
mod dashboard;
mod docs;
mod home;
mod pricing;
mod privacy;

pub use about::About;
pub use dashboard::Dashboard;
pub use docs::Docs;
pub use home::Home;
pub use pricing::Pricing;
pub use privacy::Privacy;
