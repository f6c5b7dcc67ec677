//! Object-detector contract
//!
//! The estimator does not run a detection model itself. A [`Detector`]
//! implementation turns one photo into raw `(class, confidence)` detections;
//! this module filters weak detections, maps detector classes onto catalog
//! appliances, and combines several photos of the same room by taking the
//! largest count seen in any single photo.
//!
//! Precomputed detector output can also be loaded from a detections file:
//!
//! ```json
//! {
//!   "rooms": [
//!     {
//!       "name": "Living Room",
//!       "plug_points": 2,
//!       "photos": [
//!         [{ "class": "tv", "confidence": 0.91 }, { "class": "person", "confidence": 0.88 }],
//!         [{ "class": "tv", "confidence": 0.62 }]
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::catalog;
use crate::error::HomeCarbonError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::inventory::{HomeInventory, InventorySession, RoomInventory};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Detections below this confidence are ignored
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.35;

/// A single detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detector class name (e.g. "tv", "person")
    #[serde(rename = "class")]
    pub class_name: String,
    /// Detector confidence in `[0, 1]`
    pub confidence: f64,
}

impl Detection {
    /// Create a detection
    pub fn new(class_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
        }
    }
}

/// Something that finds objects in a room photo
pub trait Detector {
    /// Detect objects in one image
    fn detect(&self, image: &Path) -> Result<Vec<Detection>>;
}

/// Count appliances in one photo's detections
///
/// Detections under `threshold` and classes with no catalog appliance are
/// dropped without being reported.
///
/// # Examples
///
/// ```
/// use home_carbon::vision::{count_detections, Detection};
///
/// let detections = vec![
///     Detection::new("tv", 0.9),
///     Detection::new("tv", 0.2),
///     Detection::new("person", 0.99),
/// ];
/// let counts = count_detections(&detections, 0.35);
/// assert_eq!(counts.len(), 1);
/// assert_eq!(counts["tv"], 1);
/// ```
pub fn count_detections(detections: &[Detection], threshold: f64) -> RoomInventory {
    let mut counts = RoomInventory::new();
    for detection in detections {
        if detection.confidence < threshold {
            continue;
        }
        match catalog::detector_class_to_appliance(&detection.class_name) {
            Some(appliance) => *counts.entry(appliance.to_string()).or_insert(0) += 1,
            None => log::debug!("ignoring detector class '{}'", detection.class_name),
        }
    }
    counts
}

/// Combine counts from several photos of one room
///
/// Each appliance gets the largest count seen in any single photo, so the
/// same TV photographed twice is still one TV.
pub fn combine_max<I>(per_photo: I) -> RoomInventory
where
    I: IntoIterator<Item = RoomInventory>,
{
    let mut combined = RoomInventory::new();
    for counts in per_photo {
        for (appliance, count) in counts {
            let entry = combined.entry(appliance).or_insert(0);
            *entry = (*entry).max(count);
        }
    }
    combined
}

/// Run the detector over every photo of one room and combine the results
pub fn detect_room<D: Detector + ?Sized>(
    detector: &D,
    images: &[PathBuf],
    threshold: f64,
) -> Result<RoomInventory> {
    let per_photo = images
        .iter()
        .map(|image| {
            detector
                .detect(image)
                .map(|detections| count_detections(&detections, threshold))
                .with_context(|| format!("Detection failed for {}", image.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(combine_max(per_photo))
}

/// Photos of one room awaiting detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPhotos {
    /// Room name
    pub name: String,
    /// Image paths
    pub images: Vec<PathBuf>,
}

/// Detect every room in parallel
///
/// Rooms are independent, so they are processed concurrently; the output
/// keeps the input room order.
pub fn detect_rooms<D: Detector + Sync + ?Sized>(
    detector: &D,
    rooms: &[RoomPhotos],
    threshold: f64,
) -> Result<Vec<(String, RoomInventory)>> {
    rooms
        .par_iter()
        .map(|room| {
            detect_room(detector, &room.images, threshold)
                .map(|counts| (room.name.clone(), counts))
        })
        .collect()
}

/// One room in a detections file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetections {
    /// Room name
    pub name: String,
    /// Manually counted plug points (0-20)
    #[serde(default)]
    pub plug_points: u32,
    /// Detections per photo
    #[serde(default)]
    pub photos: Vec<Vec<Detection>>,
}

/// Precomputed detector output for a household
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionsFile {
    /// Rooms in processing order
    #[serde(default)]
    pub rooms: Vec<RoomDetections>,
}

impl DetectionsFile {
    /// Count, combine and add plug points, room by room
    ///
    /// Each room name may appear only once.
    pub fn into_inventory(self, threshold: f64) -> Result<HomeInventory, HomeCarbonError> {
        let mut session = InventorySession::new();
        for room in self.rooms {
            if session.inventory().room(&room.name).is_some() {
                return Err(HomeCarbonError::DuplicateRoom { room: room.name });
            }
            let counts = combine_max(
                room.photos
                    .iter()
                    .map(|photo| count_detections(photo, threshold)),
            );
            session.record_detection(&room.name, counts, room.plug_points)?;
        }
        Ok(session.into_inventory())
    }
}

/// Load a detections file (`.json`)
pub fn load_detections(path: &Path) -> Result<DetectionsFile> {
    load_detections_with_fs(path, &RealFileSystem)
}

/// Load a detections file with a custom filesystem implementation
pub fn load_detections_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<DetectionsFile> {
    let contents = match fs.read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HomeCarbonError::InventoryNotFound {
                path: path.to_path_buf(),
                source: e,
            }
            .into());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let file = serde_json::from_str(&contents).map_err(|e| HomeCarbonError::InvalidInventory {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(file)
}
