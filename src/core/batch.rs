use crate::config::{BatchPlan, Config};
use crate::core::generator::LogFixtureGenerator;
use crate::errors::AppResult;
use crate::models::Scenario;
use crate::ui::messages::{header, info, step, success};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Files written by one batch run, in generation order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<(Scenario, PathBuf)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn count_for(&self, scenario: Scenario) -> usize {
        self.files.iter().filter(|(s, _)| *s == scenario).count()
    }
}

/// Generate every file of `plan`, scenario by scenario, indices from 1.
///
/// The output directory is created on the first write; the first I/O error
/// aborts the whole run.
pub fn run_batch<R: Rng>(
    generator: &mut LogFixtureGenerator<'_, R>,
    plan: &BatchPlan,
) -> AppResult<BatchReport> {
    header("🚀 Generating sample driving logs");

    let steps: Vec<Scenario> = Scenario::ALL
        .into_iter()
        .filter(|s| plan.count(*s) > 0)
        .collect();

    let mut report = BatchReport::default();
    for (i, scenario) in steps.iter().enumerate() {
        let count = plan.count(*scenario);
        step(
            i + 1,
            steps.len(),
            format!("Generating {}... ({count})", scenario.label()),
        );

        for idx in 1..=count {
            let path = generator.generate(*scenario, idx)?;
            success(format!("Created: {}", path.display()));
            report.files.push((*scenario, path));
        }
    }

    println!();
    header(format!("✅ {} log files generated", report.total()));
    info(format!("📁 Output path: {}", generator.out_dir().display()));

    Ok(report)
}

/// Build a generator over `out_dir` and run `plan` with it.
///
/// With `seed` the run is reproducible, otherwise the thread RNG is used.
pub fn generate_batch(
    cfg: &Config,
    out_dir: &Path,
    plan: &BatchPlan,
    seed: Option<u64>,
) -> AppResult<BatchReport> {
    match seed {
        Some(seed) => {
            let rng = StdRng::seed_from_u64(seed);
            let mut generator = LogFixtureGenerator::new(cfg, out_dir, rng);
            run_batch(&mut generator, plan)
        }
        None => {
            let mut generator = LogFixtureGenerator::new(cfg, out_dir, rand::rng());
            run_batch(&mut generator, plan)
        }
    }
}
