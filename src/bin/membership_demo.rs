use bitsieve::BloomFilter;

fn main() {
    println!("bitsieve membership demo");
    println!("{}", "=".repeat(40));

    // 1000 expected keys at a 1% false positive target
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    println!(
        "Sized for 1000 keys at 1%: {} bits, {} hash rounds",
        filter.num_bits(),
        filter.num_hashes()
    );
    println!();

    for key in ["foo", "bar", "baz"] {
        filter.insert(key.as_bytes());
        println!("inserted {:?}", key);
    }
    println!();

    // Inserted keys always answer true; the rest should answer false
    // (each with a ~1% chance of a false positive)
    for key in [
        "foo",
        "ishouldbefalse",
        "metoo",
        "bar",
        "idontbelonghere",
        "foo",
    ] {
        println!("contains {:?}: {}", key, filter.contains(key.as_bytes()));
    }

    println!();
    println!("{}", filter.stats());
}
