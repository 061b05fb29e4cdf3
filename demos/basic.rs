use murmur_hash::{hash, MurmurHash2, MurmurHash3, Variant};

fn main() {
    // Default variant (MurmurHash3) with seed 0
    let data = b"Hello, world!";
    let h = hash(data, 0u32);
    println!("Hash of {:?}: 0x{:08x}", data, h);

    // Both revisions, explicitly
    let v2 = MurmurHash2::new(0u32);
    let v3 = MurmurHash3::new(0u32);
    println!("MurmurHash2: 0x{:08x}", v2.hash(data));
    println!("MurmurHash3: 0x{:08x}", v3.hash(data));

    // Using different seeds produces different hashes
    let seeded = MurmurHash3::new(0xDEADBEEFu32);
    println!("Hash with custom seed: 0x{:08x}", seeded.hash(data));

    // Selecting the variant by name
    for name in ["v2", "v3"] {
        match name.parse::<Variant>() {
            Ok(variant) => println!("{}: 0x{:08x}", variant, variant.hash(data, 0u32)),
            Err(e) => eprintln!("{}", e),
        }
    }

    // Demonstrate hash stability
    assert_eq!(h, v3.hash(data), "Hashes should be stable!");
    println!("Hash stability verified!");
}
