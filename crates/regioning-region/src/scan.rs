//! First raster pass: provisional labels and equivalences
//!
//! The mask is copied into a `u32` working buffer that overlays three
//! meanings on one integer domain:
//!
//! - `0` background
//! - `1` unlabeled foreground
//! - `>= 2` a provisional label
//!
//! Pixels are visited in raster order. A foreground pixel takes the smallest
//! label among its causal neighbors, or a fresh label if none is labeled.
//! When the neighbors carry several distinct labels, each pair
//! `(min, other)` is recorded as an equivalence for the resolution stage.
//!
//! Once a pixel holds a provisional label it is never read as unlabeled
//! again. Input samples other than 0 and 1 violate the mask contract; they
//! are not rejected and behave like labels assigned before the scan.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use regioning_core::Raster;

/// Background value in the working buffer
pub const BACKGROUND: u32 = 0;

/// Unlabeled foreground marker
pub const MARKER: u32 = 1;

/// First provisional label issued by the scan
pub const FIRST_LABEL: u32 = 2;

/// The working buffer after the first pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionalLabels {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl ProvisionalLabels {
    /// Copy a mask into a fresh working buffer.
    pub fn from_raster(raster: &Raster) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            data: raster.data().iter().map(|&v| u32::from(v)).collect(),
        }
    }

    /// Get the raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the value at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get raw access to the row-major values.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Largest value present in the buffer.
    pub fn max_value(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(BACKGROUND)
    }

    /// Provisional label of a causal neighbor, if it has one.
    #[inline]
    fn neighbor_label(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<u32> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        if nx >= self.width || ny >= self.height {
            return None;
        }
        let val = self.data[ny as usize * self.width as usize + nx as usize];
        (val > MARKER).then_some(val)
    }
}

/// A label collision found during the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equivalence {
    /// The label the pixel received (smallest among its neighbors)
    pub min_label: u32,
    /// Another label present among the same neighbors
    pub other_label: u32,
}

/// Unordered multiset of recorded equivalences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceRecord {
    pairs: Vec<Equivalence>,
}

impl EquivalenceRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `min_label` and `other_label` belong to the same region.
    pub fn push(&mut self, min_label: u32, other_label: u32) {
        self.pairs.push(Equivalence {
            min_label,
            other_label,
        });
    }

    /// Number of recorded pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether no collision was recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the recorded pairs.
    pub fn iter(&self) -> impl Iterator<Item = &Equivalence> {
        self.pairs.iter()
    }
}

/// Result of the first pass
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Working buffer with every foreground pixel labeled
    pub labels: ProvisionalLabels,
    /// Next label that would have been issued; labels are `2..next_label`
    pub next_label: u32,
    /// Collisions to resolve
    pub equivalences: EquivalenceRecord,
}

impl ScanOutcome {
    /// Number of provisional labels issued.
    pub fn provisional_count(&self) -> u32 {
        self.next_label - FIRST_LABEL
    }

    /// Disjoint-set size that covers every label in the buffer.
    ///
    /// This is `next_label` for well-formed masks. Out-of-contract input
    /// values larger than that still get a slot, so lookups stay in range.
    pub fn capacity(&self) -> usize {
        let highest = self.labels.max_value().saturating_add(1);
        self.next_label.max(highest) as usize
    }
}

/// Largest raster, in pixels, whose worst-case label count fits in `u32`.
const MAX_PIXELS: u64 = u32::MAX as u64 - FIRST_LABEL as u64;

/// Check that a raster of this size cannot exhaust the label space.
///
/// Every pixel isolated is the worst case: one label per pixel on top of
/// the two reserved values.
///
/// # Errors
///
/// Returns [`RegionError::CapacityOverflow`] if `width * height` exceeds
/// `u32::MAX - 2`.
pub fn check_label_capacity(width: u32, height: u32) -> RegionResult<()> {
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(RegionError::CapacityOverflow { width, height });
    }
    Ok(())
}

/// Run the first raster pass.
///
/// # Arguments
///
/// * `raster` - Binary mask (`0` background, `1` foreground)
/// * `connectivity` - Which causal neighbors are examined
///
/// # Errors
///
/// Returns [`RegionError::CapacityOverflow`] if the raster has so many pixels
/// that every-pixel-isolated input could exhaust the label space. The check
/// happens before any pixel is scanned.
pub fn scan_and_label(raster: &Raster, connectivity: ConnectivityType) -> RegionResult<ScanOutcome> {
    let width = raster.width();
    let height = raster.height();
    check_label_capacity(width, height)?;

    let mut labels = ProvisionalLabels::from_raster(raster);
    let mut equivalences = EquivalenceRecord::new();
    let mut next_label = FIRST_LABEL;
    let offsets = connectivity.causal_offsets();

    // At most four causal neighbors
    let mut found = [0u32; 4];

    for y in 0..height {
        for x in 0..width {
            let idx = y as usize * width as usize + x as usize;
            if labels.data[idx] != MARKER {
                continue;
            }

            let mut n = 0;
            for &(dx, dy) in offsets {
                if let Some(label) = labels.neighbor_label(x, y, dx, dy)
                    && !found[..n].contains(&label)
                {
                    found[n] = label;
                    n += 1;
                }
            }

            let distinct = &found[..n];
            let Some(&min_label) = distinct.iter().min() else {
                labels.data[idx] = next_label;
                next_label += 1;
                continue;
            };

            labels.data[idx] = min_label;
            for &other in distinct.iter().filter(|&&l| l != min_label) {
                equivalences.push(min_label, other);
            }
        }
    }

    Ok(ScanOutcome {
        labels,
        next_label,
        equivalences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> Raster {
        let rows: Vec<Vec<u16>> = rows
            .iter()
            .map(|r| r.bytes().map(|b| u16::from(b == b'#')).collect())
            .collect();
        Raster::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_background_untouched() {
        let raster = mask(&["....", "...."]);
        let out = scan_and_label(&raster, ConnectivityType::FourWay).unwrap();
        assert!(out.labels.data().iter().all(|&v| v == BACKGROUND));
        assert_eq!(out.next_label, FIRST_LABEL);
        assert_eq!(out.provisional_count(), 0);
        assert!(out.equivalences.is_empty());
    }

    #[test]
    fn test_fresh_labels_in_raster_order() {
        let raster = mask(&["#.#", "...", "#.#"]);
        let out = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.labels.get(0, 0), Some(2));
        assert_eq!(out.labels.get(2, 0), Some(3));
        assert_eq!(out.labels.get(0, 2), Some(4));
        assert_eq!(out.labels.get(2, 2), Some(5));
        assert_eq!(out.next_label, 6);
    }

    #[test]
    fn test_no_marker_left_behind() {
        let raster = mask(&["##.#", "#.##", "####"]);
        let out = scan_and_label(&raster, ConnectivityType::FourWay).unwrap();
        for (src, &dst) in raster.data().iter().zip(out.labels.data()) {
            if *src == 0 {
                assert_eq!(dst, BACKGROUND);
            } else {
                assert!(dst >= FIRST_LABEL);
            }
        }
    }

    #[test]
    fn test_u_shape_records_collision_and_takes_min() {
        // Two arms labeled 2 and 3 meet in the bottom row
        let raster = mask(&["#.#", "###"]);
        let out = scan_and_label(&raster, ConnectivityType::FourWay).unwrap();
        assert_eq!(out.labels.get(0, 0), Some(2));
        assert_eq!(out.labels.get(2, 0), Some(3));
        assert_eq!(out.labels.get(0, 1), Some(2));
        assert_eq!(out.labels.get(1, 1), Some(2));
        // Left neighbor 2, top neighbor 3
        assert_eq!(out.labels.get(2, 1), Some(2));
        let pairs: Vec<_> = out.equivalences.iter().copied().collect();
        assert_eq!(
            pairs,
            vec![Equivalence {
                min_label: 2,
                other_label: 3
            }]
        );
    }

    #[test]
    fn test_diagonal_only_seen_with_eight_way() {
        let raster = mask(&["#.", ".#"]);

        let four = scan_and_label(&raster, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.labels.get(1, 1), Some(3));

        let eight = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.labels.get(1, 1), Some(2));
        assert_eq!(eight.next_label, 3);
    }

    #[test]
    fn test_top_right_neighbor_used_with_eight_way() {
        let raster = mask(&[".#", "#."]);
        let out = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.labels.get(0, 1), Some(2));
        assert!(out.equivalences.is_empty());
    }

    #[test]
    fn test_eight_way_collision_from_top_left_and_top_right() {
        let raster = mask(&["#.#", ".#."]);
        let out = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.labels.get(1, 1), Some(2));
        assert_eq!(out.equivalences.len(), 1);
    }

    #[test]
    fn test_duplicate_neighbor_labels_not_recorded() {
        // Left and top both carry label 2
        let raster = mask(&["##", "##"]);
        let out = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert!(out.equivalences.is_empty());
        assert!(out.labels.data().iter().all(|&v| v == 2));
    }

    #[test]
    fn test_capacity_covers_out_of_contract_values() {
        let raster = Raster::from_vec(3, 1, vec![1, 0, 40]).unwrap();
        let out = scan_and_label(&raster, ConnectivityType::FourWay).unwrap();
        assert_eq!(out.next_label, 3);
        assert_eq!(out.capacity(), 41);
    }

    #[test]
    fn test_label_capacity_limit() {
        assert!(check_label_capacity(4096, 4096).is_ok());
        assert!(check_label_capacity(0, u32::MAX).is_ok());

        // Exactly u32::MAX - 2 pixels still fits
        assert!(check_label_capacity(u32::MAX - 2, 1).is_ok());
        assert!(matches!(
            check_label_capacity(u32::MAX - 1, 1),
            Err(RegionError::CapacityOverflow { height: 1, .. })
        ));

        let err = check_label_capacity(65536, 65536).unwrap_err();
        assert!(matches!(
            err,
            RegionError::CapacityOverflow {
                width: 65536,
                height: 65536
            }
        ));
    }

    #[test]
    fn test_zero_area_raster() {
        let raster = Raster::from_shape(&[0, 5], vec![]).unwrap();
        let out = scan_and_label(&raster, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.next_label, FIRST_LABEL);
        assert!(out.labels.data().is_empty());
        assert_eq!(out.capacity(), FIRST_LABEL as usize);
    }
}
