use murmur_hash::MurmurHash3;

fn main() {
    let data = b"Important message";

    // Different seeds give independent hash functions over the same data.
    // This is useful for bloom filters, consistent hashing and sharding.
    println!("Hashing {:?} with different seeds:", data);
    for seed in 0..5u32 {
        let hasher = MurmurHash3::new(seed);
        println!("  Seed {}: 0x{:08x}", seed, hasher.hash(data));
    }

    // Simple bloom filter simulation
    println!("\nSimple bloom filter example:");
    let num_bits = 64;
    let mut bloom_filter = vec![false; num_bits];

    let item = b"example@email.com";
    for k in 0..3u32 {
        let h = MurmurHash3::new(k).hash(item);
        let bit_index = h as usize % num_bits;
        bloom_filter[bit_index] = true;
        println!("  Set bit {} for hash function {}", bit_index, k);
    }

    let present = (0..3u32).all(|k| bloom_filter[MurmurHash3::new(k).hash(item) as usize % num_bits]);
    assert!(present);

    // Shard selection
    println!("\nShard assignment across 8 shards:");
    let shards = 8;
    let sharder = MurmurHash3::default();
    for key in ["alice", "bob", "charlie", "david", "eve"] {
        println!("  {} -> shard {}", key, sharder.hash(key) % shards);
    }
}
