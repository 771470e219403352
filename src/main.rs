use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use noisegrid::NoiseParams;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let size: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(256);
    let interval: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(12);
    let height: f32 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let octaves: f32 = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let out_path: Option<PathBuf> = args.get(6).map(PathBuf::from);

    let params = NoiseParams {
        autogenerate: false,
        noise_size: size,
        seed,
        interval,
        height,
        octaves,
    };

    eprintln!(
        "Generating {}x{} noise with seed={}, interval={}, height={}, octaves={}",
        size, size, seed, interval, height, octaves
    );

    let (grid, timings) = noisegrid::generate(&params).expect("generation failed");

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    let (min, max) = grid.range();
    eprintln!("\nRange: [{:.4}, {:.4}]", min, max);
    eprintln!(
        "Corner samples: {:.4} {:.4} {:.4} {:.4}",
        grid.sample(0, 0),
        grid.sample(size as i32 - 1, 0),
        grid.sample(0, size as i32 - 1),
        grid.sample(size as i32 - 1, size as i32 - 1),
    );

    // Optional raw dump: little-endian f32, row-major, no header.
    if let Some(path) = out_path {
        let file = File::create(&path).expect("failed to create output file");
        let mut writer = BufWriter::new(file);
        for &v in &grid.data {
            writer
                .write_all(&v.to_le_bytes())
                .expect("failed to write output file");
        }
        writer.flush().expect("failed to write output file");
        eprintln!("Saved {} ({} bytes)", path.display(), grid.data.len() * 4);
    }

    eprintln!("\nDone.");
}
