pub mod accommodation;
pub mod booking;
pub mod pricing;
pub mod sample;
pub mod validation;

pub use accommodation::{AdviceSection, AccommodationAdvisor};
pub use booking::BookingLinkBuilder;
pub use sample::SampleCatalog;
pub use validation::DraftValidator;
