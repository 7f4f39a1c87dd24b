//! Connectivity rules
//!
//! A raster scan visits row 0 first and each row left to right, so when a
//! pixel is processed only its upper neighbors and its left neighbor have
//! been visited. These are the causal neighbors; the labeling pass never
//! looks below or to the right of the current pixel.

/// Connectivity type for region labeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Causal neighbor offsets `(dx, dy)` for 4-way connectivity: left, top.
const CAUSAL_FOUR: [(i32, i32); 2] = [(-1, 0), (0, -1)];

/// Causal neighbor offsets for 8-way connectivity: left, top, top-left, top-right.
const CAUSAL_EIGHT: [(i32, i32); 4] = [(-1, 0), (0, -1), (-1, -1), (1, -1)];

impl ConnectivityType {
    /// Select 8-way connectivity when `n8` is true, 4-way otherwise.
    pub fn from_n8(n8: bool) -> Self {
        if n8 {
            ConnectivityType::EightWay
        } else {
            ConnectivityType::FourWay
        }
    }

    /// Check whether diagonal neighbors count as adjacent.
    pub fn is_eight_way(self) -> bool {
        self == ConnectivityType::EightWay
    }

    /// Offsets of the neighbors already visited in raster order.
    pub fn causal_offsets(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &CAUSAL_FOUR,
            ConnectivityType::EightWay => &CAUSAL_EIGHT,
        }
    }
}
