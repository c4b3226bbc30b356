use qpkr::{ config::Config, otoc::{ Basis, OtocParams } };

// usage: otoc [config.toml | -] [position | momentum]
//
// the evolved operator diagonals grow quickly, so longer runs overflow to NaN
// after a few steps
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_secs()
        .init();

    let mut args = std::env::args().skip(1);
    let default = OtocParams { n: 32, m: 1.0, k: 0.5, t: 4 };
    let params
        = match args.next() {
            Some(path) if path != "-" => {
                Config::load(&path)?.otoc.unwrap_or(default)
            },
            _ => default,
        };
    let basis: Option<Basis> = args.next().map(|s| s.parse()).transpose()?;
    log::info!("otoc: {params:?}");

    let data = params.build()?.evolve_full()?;
    println!("# step Tr(c)");
    for (i, tr) in data.c_trace.iter().enumerate().take(params.t - 1) {
        println!("{i} {tr:.6e}");
    }
    if let Some(basis) = basis {
        let ops = match basis {
            Basis::Position => &data.x,
            Basis::Momentum => &data.p,
        };
        println!("# {basis:?} operator diagonal at step {}", params.t - 1);
        println!("# index re im");
        for (j, z) in ops.row(params.t - 1).iter().enumerate() {
            println!("{j} {:.6e} {:.6e}", z.re, z.im);
        }
    }
    Ok(())
}
