use std::f64::consts::TAU;
use qpkr::{
    config::{ Config, EnsembleConfig, RotorConfig },
    drive::Drive,
};

// quasi-periodic kicked rotor on the localized side of the Anderson
// transition; pass a TOML file to override
fn default_config() -> anyhow::Result<(RotorConfig, EnsembleConfig)> {
    let drive = Drive::new(
        4.0, // k0
        2.89, // hbar
        0.5, // eps
        TAU * 5.0_f64.sqrt(), // w2
        TAU * 13.0_f64.sqrt(), // w3
        0.0,
        0.0,
    )?;
    let rotor = RotorConfig { basis_size: 1 << 10, total_time: 1000, drive };
    let ensemble = EnsembleConfig { configs: 32, seed: Some(10546) };
    Ok((rotor, ensemble))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_secs()
        .init();

    let (rotor_config, ensemble_config)
        = match std::env::args().nth(1) {
            Some(path) => {
                let config = Config::load(&path)?;
                let (rotor, ensemble) = default_config()?;
                (
                    config.rotor.unwrap_or(rotor),
                    config.ensemble.unwrap_or(ensemble),
                )
            },
            None => default_config()?,
        };
    log::info!("rotor: {rotor_config:?}");
    log::info!("ensemble: {ensemble_config:?}");

    let rotor = rotor_config.build()?;
    let p2 = ensemble_config.average(&rotor)?;
    println!("# t <p^2>");
    for (t, p2t) in p2.iter().enumerate() {
        println!("{} {:.6e}", t + 1, p2t);
    }
    Ok(())
}
