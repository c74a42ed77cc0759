//! Chambers native runner
//!
//! Runs a chamber headless with a handful of random balls and logs what
//! happens. The WASM build is driven by the host through `platform::wasm`
//! instead.
//!
//! Usage: `chambers [simple|guard|portals] [--tuning FILE] [--frames N] [--seed S] [--balls N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::fs;
    use std::path::PathBuf;

    use chambers::consts::ARENA_HEIGHT;
    use chambers::sim::Ball;
    use chambers::{ChamberKind, Session, Tuning};
    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FRAME_DT: f32 = 1.0 / 60.0;
    const BALL_RADIUS: f32 = 0.02;
    const CANVAS_WIDTH: usize = 320;
    const CANVAS_HEIGHT: usize = (CANVAS_WIDTH as f32 * ARENA_HEIGHT) as usize;

    fn parse_kind(name: &str) -> Result<ChamberKind, String> {
        ChamberKind::from_name(name).ok_or_else(|| {
            let known: Vec<_> = ChamberKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown chamber '{name}' (expected one of: {})", known.join(", "))
        })
    }

    /// Run a chamber headless and log ball statistics
    #[derive(Parser, Debug)]
    #[command(name = "chambers")]
    #[command(version, about = "Headless chamber runner", long_about = None)]
    pub struct Args {
        /// Chamber to run: simple, guard or portals
        #[arg(value_parser = parse_kind, default_value = "guard")]
        pub kind: ChamberKind,

        /// JSON tuning file; missing fields keep their defaults
        #[arg(long)]
        pub tuning: Option<PathBuf>,

        /// Number of 1/60 s frames to simulate
        #[arg(long, default_value = "600")]
        pub frames: u32,

        /// Seed for the ball spawner
        #[arg(long, default_value = "3298079717")]
        pub seed: u64,

        /// Number of balls
        #[arg(long, default_value = "8")]
        pub balls: usize,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::from_json(&fs::read_to_string(path)?)?,
            None => Tuning::default(),
        };

        log::info!(
            "running {} with {} balls, {} prediction, seed {}",
            args.kind.as_str(),
            args.balls,
            tuning.guard.prediction.as_str(),
            args.seed
        );

        let mut session = Session::new(
            args.kind,
            args.balls,
            CANVAS_WIDTH * CANVAS_HEIGHT,
            &tuning,
        );
        let mut rng = Pcg32::seed_from_u64(args.seed);
        for ball in session.balls_mut() {
            *ball = Ball::random_in(&mut rng, BALL_RADIUS, tuning.guard.arena_height);
        }

        for frame in 0..args.frames {
            session.step(args.balls, FRAME_DT);
            session.render(CANVAS_WIDTH, CANVAS_HEIGHT);

            if frame % 60 == 0 {
                let lowest = session
                    .balls()
                    .iter()
                    .map(|b| b.pos.y)
                    .fold(f32::INFINITY, f32::min);
                let fastest = session
                    .balls()
                    .iter()
                    .map(|b| b.vel.length())
                    .fold(0.0, f32::max);
                log::info!(
                    "frame {:>5}: lowest ball y={:.3}, fastest {:.2} u/s",
                    frame,
                    lowest,
                    fastest
                );
            }
        }

        session.save();
        log::info!(
            "{} done after {} frames, save blob {} bytes",
            session.chamber().name(),
            args.frames,
            session.save_bytes().len()
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let args = Args::try_parse_from(["chambers"]).unwrap();
            assert_eq!(args.kind, ChamberKind::Guard);
            assert_eq!(args.frames, 600);
            assert_eq!(args.balls, 8);
            assert!(args.tuning.is_none());
        }

        #[test]
        fn test_chamber_and_flags() {
            let args = Args::try_parse_from([
                "chambers", "portals", "--frames", "30", "--seed", "7", "--balls", "2",
                "--tuning", "t.json",
            ])
            .unwrap();
            assert_eq!(args.kind, ChamberKind::Portals);
            assert_eq!((args.frames, args.seed, args.balls), (30, 7, 2));
            assert_eq!(args.tuning, Some(PathBuf::from("t.json")));
        }

        #[test]
        fn test_rejects_unknown_chamber_and_bad_numbers() {
            assert!(Args::try_parse_from(["chambers", "pinball"]).is_err());
            assert!(Args::try_parse_from(["chambers", "--frames", "many"]).is_err());
        }

        #[test]
        fn test_short_run_completes() {
            let args = Args::try_parse_from(["chambers", "simple", "--frames", "5"]).unwrap();
            assert!(run(args).is_ok());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = native::Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = native::run(args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host drives the library exports; nothing to do here
}
