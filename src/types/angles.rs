//! Per-sensor angle series.

use serde::{Deserialize, Serialize};

/// Angle readings for one sensor as seen from one station.
///
/// The three sequences are parallel; entry `i` of each comes from the same
/// scanning cycle. `x` and `y` are tick deltas from the sweep epoch to the
/// center of the sensor's lit period, directly proportional to the
/// horizontal and vertical angles. `t` is the horizontal sweep's epoch for
/// both axes even though the vertical measurement happens later in the
/// cycle; downstream pose solving treats the rig as rigid within a cycle,
/// so consumers must not read sub-cycle timing out of `t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorAngles {
    pub x: Vec<u32>,
    pub y: Vec<u32>,
    pub t: Vec<f64>,
}

impl SensorAngles {
    /// Number of readings collected for this sensor.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub(crate) fn push(&mut self, x: u32, y: u32, t: f64) {
        self.x.push(x);
        self.y.push(y);
        self.t.push(t);
    }
}
