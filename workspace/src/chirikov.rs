use lib::classical::KickedRotor;
use rand::prelude as rnd;

// trajectories of the standard map for a few kicking strengths, below and
// above the onset of global chaos at K ≈ 0.97
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_secs()
        .init();

    const NSTEPS: usize = 500;
    let mut rng = rnd::thread_rng();
    for k in [0.5, 0.97, 5.0] {
        let rotor = KickedRotor::new(k, None, &mut rng)?;
        log::info!("K = {k}, initial point = {:?}", rotor.get_initial());
        let traj = rotor.phase_space(NSTEPS, true);
        let diff = rotor.diffusion(NSTEPS);
        println!("# K = {k}");
        println!("# step theta p p^2/2K");
        for (i, (col, d)) in traj.columns().into_iter().zip(&diff).enumerate() {
            println!("{i} {:.6} {:.6} {:.6e}", col[0], col[1], d);
        }
    }
    Ok(())
}
