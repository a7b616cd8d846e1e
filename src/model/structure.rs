use serde::{Deserialize, Serialize};

/// Decoded tensegrity geometry.
///
/// `nodes` holds one xyz triple per node; `bars` and `cables` pair node
/// indices per link. `actuators` lists the cable indices driven by motors
/// (all cables by default after decoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub nodes: Vec<[f64; 3]>,
    pub bars: Vec<[usize; 2]>,
    pub cables: Vec<[usize; 2]>,
    pub actuators: Vec<usize>,
}

impl Structure {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Uniformly scale all node coordinates.
    pub fn scale(&mut self, factor: f64) {
        for node in &mut self.nodes {
            for coordinate in node.iter_mut() {
                *coordinate *= factor;
            }
        }
    }
}
