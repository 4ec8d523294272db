//! Writes a deterministic `spacex_launch_dash.csv` so the dashboard runs
//! out of the box.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = [
        "CCAFS LC-40",
        "VAFB SLC-4E",
        "KSC LC-39A",
        "CCAFS SLC-40",
    ];
    let booster_categories = ["v1.0", "v1.1", "FT", "B4", "B5"];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let total_flights = 56u32;
    for flight in 1..=total_flights {
        let progress = flight as f64 / total_flights as f64;

        let site = sites[(rng.next_f64() * sites.len() as f64) as usize % sites.len()];
        // Booster categories roll over chronologically.
        let booster_idx =
            ((progress * booster_categories.len() as f64) as usize).min(booster_categories.len() - 1);
        let booster = booster_categories[booster_idx];

        // Payloads grow over the program's lifetime; success rate improves.
        let payload = rng.gauss(2000.0 + 5500.0 * progress, 1500.0).clamp(0.0, 9600.0);
        let class = if rng.next_f64() < 0.35 + 0.6 * progress { 1 } else { 0 };

        writer
            .write_record([
                flight.to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                booster.to_string(),
            ])
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {total_flights} launch records to {output_path}");
}
