use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use tenseg::config::StructureConfig;
use tenseg::config::traits::ConfigSection;
use tenseg::engines::generation::GenomeCodec;
use tenseg::model::MujocoBuilder;

/// Sample a random tensegrity, decode it and emit its MuJoCo model.
///
/// Usage: tenseg [strut_num] [output_dir] [seed]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let strut_num = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    let output_dir: PathBuf = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));
    let seed: Option<u64> = args.get(3).and_then(|s| s.parse().ok());

    let config = StructureConfig {
        strut_num,
        ..Default::default()
    };
    config.validate().context("invalid structure configuration")?;

    println!("Configuration:");
    println!("  Struts:     {}", config.strut_num);
    println!("  Output dir: {}", output_dir.display());
    println!();

    let codec = GenomeCodec::new(config.strut_num).context("failed to build codec")?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let genome = codec.create_individual(&mut rng);
    let mut structure = codec.decode(&genome).context("failed to decode genome")?;
    structure.scale(2.0);

    println!(
        "Decoded structure: {} nodes, {} bars, {} cables, {} actuators",
        structure.node_count(),
        structure.bars.len(),
        structure.cables.len(),
        structure.actuators.len()
    );

    let model_path = MujocoBuilder::new("tensegrity")
        .stiffness(config.stiffness)
        .damping(config.damping)
        .write(&structure, &output_dir)
        .context("failed to write MuJoCo model")?;

    println!("Model written to {}", model_path.display());

    Ok(())
}
