use powerups::{ActiveWeights, ItemCatalog, MinorMode, PowerupSampler, PowerupType, PowerupWeights};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let json = include_str!("../assets/powerup.json");
    let weights = PowerupWeights::<PowerupType>::from_json_str(json)?;

    let mode: MinorMode = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("normal-race")
        .parse()?;
    let mut active = ActiveWeights::new();
    active.select(&weights, mode)?;

    let mut rng = rand::rng();
    for distance in [0.0f32, 45.0, 120.0, 300.0] {
        let mut hist: HashMap<(PowerupType, u32), u64> = HashMap::default();
        for _ in 0..100_000 {
            let p = active.random_powerup_with(distance, &mut rng)?;
            *hist.entry((p.kind, p.count)).or_default() += 1;
        }

        println!("{mode} at distance {distance}:");
        let mut v: Vec<_> = hist.into_iter().collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        for ((kind, count), hits) in v {
            println!("{hits:>6} {count}x {}", kind.name());
        }
        println!();
    }

    Ok(())
}
