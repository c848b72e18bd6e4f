// demos/sierpinski.rs
// Run with:
//   RUST_LOG=debug cargo run --example sierpinski -- no_repeat_square 20000 7 > points.csv

use chaos_game::presets;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "sierpinski_triangle".to_owned());
    let points: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let Some(preset) = presets::by_name(&name) else {
        eprintln!("unknown preset '{name}'; available:");
        for p in presets::all() {
            eprintln!("  {}", p.name);
        }
        std::process::exit(2);
    };

    match preset.with_points(points).run(seed) {
        Ok(out) => {
            println!("x,y");
            for p in &out.points {
                println!("{},{}", p.x, p.y);
            }
        }
        Err(e) => {
            eprintln!("{}: {e}", preset.name);
            std::process::exit(1);
        }
    }
}
