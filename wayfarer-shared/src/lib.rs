pub mod models;
pub mod pii;

pub use models::package::{BookingSite, Compatibility, Package, PackageDraft, ScoredPackage};
pub use models::preferences::{PreferenceKey, Preferences, NOT_SPECIFIED};
pub use models::season::Season;
pub use pii::Masked;
