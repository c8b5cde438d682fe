//! Print the surfaces of every 2-bridge link with beta <= 12 for mu in {0, 1, 2}.
//!
//! Run: `cargo run -p twobridge --example genus_table`

use twobridge::sample::enumerate_links;
use twobridge::surface::compute_surfaces;

fn main() -> Result<(), twobridge::GenusError> {
    for (alpha, beta) in enumerate_links(12) {
        for mu in 0..=2 {
            let surfaces = compute_surfaces(alpha, beta, mu)?;
            let summary: Vec<String> = surfaces
                .iter()
                .map(|s| format!("{}[{}] g={} b={}", s.name, s.kind, s.genus, s.boundary_components))
                .collect();
            println!("{alpha}/{beta} mu={mu}: {}", summary.join("; "));
        }
    }
    Ok(())
}
