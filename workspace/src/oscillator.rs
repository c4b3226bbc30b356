use lib::oscillator::{ Potential, spectrum };

// eigenvalue report for the truncated harmonic and quartic oscillators
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_secs()
        .init();

    const N: usize = 20;
    const S: f64 = 1.0;
    for potential in [Potential::Harmonic, Potential::Quartic] {
        let evals = spectrum(N, S, potential)?;
        log::info!("computed {} eigenvalues", evals.len());
        println!("eigenvalues of the {potential:?} Hamiltonian (N = {N}):");
        for (k, e) in evals.iter().enumerate() {
            println!("{k:3} {e:.6}");
        }
    }
    Ok(())
}
