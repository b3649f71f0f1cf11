use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;
use wayfarer_core::repository::{PackageRepository, RepositoryResult};
use wayfarer_shared::{BookingSite, Package};

use crate::StoreError;

const FALLBACK_RATING: f64 = 4.2;
const FALLBACK_REVIEWS: u32 = 300;

/// On-disk shape of a package. Numbers are kept as text so hand-edited files
/// with odd values still load.
#[derive(Debug, Serialize, Deserialize)]
struct PackageRow {
    package_id: String,
    package_name: String,
    destination: String,
    budget: String,
    duration: String,
    travel_style: String,
    group_size: String,
    accommodation_type: String,
    activities: String,
    price_range: String,
    rating: String,
    reviews_count: String,
    includes: String,
    best_time: String,
    #[serde(default)]
    source: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    booking_links: BTreeMap<BookingSite, String>,
}

impl From<&Package> for PackageRow {
    fn from(p: &Package) -> Self {
        Self {
            package_id: p.id.clone(),
            package_name: p.name.clone(),
            destination: p.destination.clone(),
            budget: p.budget.clone(),
            duration: p.duration_days.map(|d| d.to_string()).unwrap_or_default(),
            travel_style: p.travel_style.clone(),
            group_size: p.group_size.clone(),
            accommodation_type: p.accommodation_type.clone(),
            activities: p.activities.clone(),
            price_range: p.price_range.clone(),
            rating: p.rating.to_string(),
            reviews_count: p.reviews_count.to_string(),
            includes: p.includes.clone(),
            best_time: p.best_time.clone(),
            source: p.source.clone().unwrap_or_default(),
            booking_links: p.booking_links.clone(),
        }
    }
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Self {
            id: row.package_id,
            name: row.package_name,
            destination: row.destination,
            budget: row.budget,
            duration_days: row.duration.trim().parse().ok(),
            travel_style: row.travel_style,
            group_size: row.group_size,
            accommodation_type: row.accommodation_type,
            activities: row.activities,
            price_range: row.price_range,
            rating: row
                .rating
                .trim()
                .parse()
                .ok()
                .filter(|r: &f64| r.is_finite())
                .unwrap_or(FALLBACK_RATING),
            reviews_count: row.reviews_count.trim().parse().unwrap_or(FALLBACK_REVIEWS),
            includes: row.includes,
            best_time: row.best_time,
            source: Some(row.source).filter(|s| !s.is_empty()),
            booking_links: row.booking_links,
        }
    }
}

/// Catalog kept in a single JSON file. A missing file reads as an empty
/// catalog.
pub struct FilePackageRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePackageRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self) -> Result<Vec<PackageRow>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_rows(&self, rows: &[PackageRow]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec_pretty(rows)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

#[async_trait]
impl PackageRepository for FilePackageRepository {
    async fn list_packages(&self) -> RepositoryResult<Vec<Package>> {
        let _guard = self.lock.lock().await;
        let rows = self.read_rows().await?;
        debug!(path = %self.path.display(), count = rows.len(), "Loaded package catalog");
        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn persist(&self, packages: &[Package]) -> RepositoryResult<()> {
        let _guard = self.lock.lock().await;
        let rows: Vec<PackageRow> = packages.iter().map(PackageRow::from).collect();
        self.write_rows(&rows).await?;
        debug!(path = %self.path.display(), count = rows.len(), "Persisted package catalog");
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPackageRepository {
    packages: Mutex<Vec<Package>>,
}

impl InMemoryPackageRepository {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages: Mutex::new(packages),
        }
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn list_packages(&self) -> RepositoryResult<Vec<Package>> {
        Ok(self.packages.lock().await.clone())
    }

    async fn persist(&self, packages: &[Package]) -> RepositoryResult<()> {
        *self.packages.lock().await = packages.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str, duration: Option<u32>) -> Package {
        Package {
            id: id.to_string(),
            name: "Historic Journey 1".to_string(),
            destination: "Rome, Italy".to_string(),
            budget: "$1000-2000".to_string(),
            duration_days: duration,
            travel_style: "cultural".to_string(),
            group_size: "4".to_string(),
            accommodation_type: "boutique".to_string(),
            activities: "Cultural sites, Historical tours, Art galleries".to_string(),
            price_range: "$1000-2000".to_string(),
            rating: 4.3,
            reviews_count: 712,
            includes: "Accommodation, Transportation, WiFi".to_string(),
            best_time: "Spring".to_string(),
            source: None,
            booking_links: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePackageRepository::new(dir.path().join("none.json"));
        assert!(repo.list_packages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persist_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePackageRepository::new(dir.path().join("nested").join("packages.json"));

        let mut online = package("ONLINE001", None);
        online.rating = 4.85;
        online.source = Some("https://www.kayak.com/flights/Rome".to_string());
        online
            .booking_links
            .insert(BookingSite::Kayak, "https://www.kayak.com/flights/Rome".to_string());
        let packages = vec![package("PKG001", Some(7)), online];

        repo.persist(&packages).await.unwrap();
        let loaded = repo.list_packages().await.unwrap();
        assert_eq!(loaded, packages);
    }

    #[tokio::test]
    async fn test_unparseable_numbers_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.json");
        let mut row = serde_json::to_value(PackageRow::from(&package("PKG009", Some(3)))).unwrap();
        row["rating"] = "excellent".into();
        row["reviews_count"] = "".into();
        row["duration"] = "a week".into();
        std::fs::write(&path, serde_json::to_vec(&vec![row]).unwrap()).unwrap();

        let loaded = FilePackageRepository::new(&path).list_packages().await.unwrap();
        assert_eq!(loaded[0].rating, 4.2);
        assert_eq!(loaded[0].reviews_count, 300);
        assert_eq!(loaded[0].duration_days, None);
    }

    #[tokio::test]
    async fn test_non_finite_rating_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.json");
        let rows: Vec<_> = ["NaN", "inf", "-infinity"]
            .into_iter()
            .map(|rating| {
                let mut row = serde_json::to_value(PackageRow::from(&package("PKG010", Some(4)))).unwrap();
                row["rating"] = rating.into();
                row
            })
            .collect();
        std::fs::write(&path, serde_json::to_vec(&rows).unwrap()).unwrap();

        let loaded = FilePackageRepository::new(&path).list_packages().await.unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().all(|p| p.rating == 4.2));
    }

    #[tokio::test]
    async fn test_in_memory_replace() {
        let repo = InMemoryPackageRepository::default();
        assert!(repo.list_packages().await.unwrap().is_empty());
        repo.persist(&[package("PKG001", Some(5))]).await.unwrap();
        assert_eq!(repo.list_packages().await.unwrap().len(), 1);
    }
}
