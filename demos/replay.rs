//! Two peers seeded alike grant the same items without exchanging them.

use powerups::{ActiveWeights, ItemCatalog, MinorMode, PowerupSampler, PowerupType, PowerupWeights};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let weights = PowerupWeights::<PowerupType>::from_json_str(include_str!("../assets/powerup.json"))?;

    let mut server = ActiveWeights::new();
    let mut client = ActiveWeights::new();
    server.select(&weights, MinorMode::NormalRace)?;
    client.select(&weights, MinorMode::NormalRace)?;

    let mut server_rng = Pcg32::seed_from_u64(0xC0FFEE);
    let mut client_rng = Pcg32::seed_from_u64(0xC0FFEE);

    for (tick, distance) in [0.0f32, 12.5, 31.0, 99.9, 100.0, 260.0].into_iter().enumerate() {
        let a = server.random_powerup_with(distance, &mut server_rng)?;
        let b = client.random_powerup_with(distance, &mut client_rng)?;
        assert_eq!(a, b, "peers diverged at tick {tick}");
        println!("tick {tick}: {}x {} at {distance}", a.count, a.kind.name());
    }

    Ok(())
}
