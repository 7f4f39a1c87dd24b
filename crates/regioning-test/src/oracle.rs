//! Reference region counter
//!
//! A breadth-first flood fill that shares no code with the two-pass
//! labeling engine. Any disagreement between the two is a bug in one of them.

use regioning_core::Raster;
use std::collections::VecDeque;

/// Count the regions of a mask by flood fill.
///
/// A pixel is foreground when its sample is non-zero. With `eight_way`
/// set, diagonal neighbors are adjacent.
pub fn reference_region_count(mask: &Raster, eight_way: bool) -> usize {
    let width = mask.width() as i64;
    let height = mask.height() as i64;
    let data = mask.data();
    let mut visited = vec![false; data.len()];
    let mut queue = VecDeque::new();
    let mut count = 0;

    for start in 0..data.len() {
        if data[start] == 0 || visited[start] {
            continue;
        }
        count += 1;
        visited[start] = true;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            let x = idx as i64 % width;
            let y = idx as i64 / width;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    if (dx == 0 && dy == 0) || (!eight_way && dx != 0 && dy != 0) {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue;
                    }
                    let n = (ny * width + nx) as usize;
                    if data[n] != 0 && !visited[n] {
                        visited[n] = true;
                        queue.push_back(n);
                    }
                }
            }
        }
    }

    count
}
