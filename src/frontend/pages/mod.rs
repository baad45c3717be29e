//! Page components for the TruView site

mod about;
mod contact;
mod gallery;
mod home;
mod privacy;
mod services;
mod terms;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use privacy::PrivacyPage;
pub use services::ServicesPage;
pub use terms::TermsPage;
