//! One component per top-level page.

mod auth;
mod books;
mod community;
mod dashboard;
mod home;
mod investment;
mod training;

pub use auth::AuthPage;
pub use books::BooksPage;
pub use community::CommunityPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use investment::InvestmentPage;
pub use training::TrainingPage;
