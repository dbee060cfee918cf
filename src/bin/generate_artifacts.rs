use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};

use water_quality_predictor::data::model::{FeatureSchema, Pollutant};
use water_quality_predictor::data::regressor::{ForestModel, ModelArtifact, Tree, TreeNode};

const N_STATIONS: usize = 22;
const N_TREES: usize = 40;
const SCHEMA_PATH: &str = "model_columns.json";
const MODEL_PATH: &str = "pollution_model.json";

/// Typical river concentrations (mg/L), canonical pollutant order.
const BASELINE: [f64; 6] = [7.5, 4.0, 0.06, 80.0, 0.08, 60.0];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Baseline scaled per pollutant by a factor in `[lo, hi)`.
fn profile(rng: &mut SimpleRng, lo: f64, hi: f64) -> Vec<f64> {
    BASELINE
        .iter()
        .map(|b| b * (lo + rng.next_f64() * (hi - lo)))
        .collect()
}

/// Stump on one station indicator, with a year split for that station:
///
/// ```text
/// 0: id_k <= 0.5 ? 1 : 2
/// 1: leaf (other stations)
/// 2: year <= t ? 3 : 4
/// 3: leaf (station k, early)
/// 4: leaf (station k, late)
/// ```
fn station_tree(rng: &mut SimpleRng) -> Tree {
    let station_feature = 1 + rng.below(N_STATIONS);
    let year_split = 2005.0 + rng.below(15) as f64 + 0.5;

    // Some stations drift towards polluted: less oxygen, more of the rest.
    let polluted = rng.next_f64() < 0.3;
    let mut late = profile(rng, 0.8, 1.3);
    if polluted {
        late[Pollutant::O2.index()] *= 0.5;
        for v in late.iter_mut().skip(1) {
            *v *= 2.5;
        }
    }

    Tree {
        nodes: vec![
            TreeNode::Split {
                feature: station_feature,
                threshold: 0.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf {
                value: profile(rng, 0.9, 1.1),
            },
            TreeNode::Split {
                feature: 0,
                threshold: year_split,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf {
                value: profile(rng, 0.7, 1.2),
            },
            TreeNode::Leaf { value: late },
        ],
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut columns = vec![FeatureSchema::YEAR_COLUMN.to_string()];
    columns.extend((1..=N_STATIONS).map(|i| FeatureSchema::indicator_column(&i.to_string())));

    let model = ModelArtifact::Forest(ForestModel {
        n_features: columns.len(),
        n_outputs: Pollutant::ALL.len(),
        trees: (0..N_TREES).map(|_| station_tree(&mut rng)).collect(),
    });
    model.validate().context("generated model is invalid")?;

    let file = File::create(SCHEMA_PATH).context("creating schema file")?;
    serde_json::to_writer_pretty(BufWriter::new(file), &columns).context("writing schema")?;

    let file = File::create(MODEL_PATH).context("creating model file")?;
    serde_json::to_writer(BufWriter::new(file), &model).context("writing model")?;

    println!(
        "Wrote {SCHEMA_PATH} ({} columns) and {MODEL_PATH} ({N_TREES} trees)",
        columns.len()
    );
    Ok(())
}
