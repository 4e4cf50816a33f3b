//! Print the digests of a few sample messages.
//!
//! Run with: `cargo run --example samples`

const SAMPLES: &[&[u8]] = &[
    b"",
    b"The quick brown fox jumps over the lazy dog",
    b"The quick brown fox jumps over the lazy dog.",
    b"The quick brown fox jumps over the lazy dog once again.",
    b"A group of birds flew over the mountain during the sunset.",
    b"In the quiet evening, the city lights began to flicker one by one.",
    b"She whispered softly into the night, hoping her words would be heard.",
    b"Under the bright moonlight, the forest seemed both peaceful and alive.",
    b"As the rain gently tapped on the window, she sat by the fire, lost in thought, with a book in hand, letting her mind wander far beyond the room.",
    b"On a warm summer evening, the stars twinkled brightly above, while the ocean waves crashed softly against the shore, lulling everyone to sleep.",
    b"The concert hall was filled with the sound of violins, and the audience sat in awe as the symphony played a melody that resonated deep within their hearts.",
    b"embedded\0zero",
];

fn main() -> Result<(), md5_block::Error> {
    for sample in SAMPLES {
        let digest = md5_block::compute(sample)?;
        println!("MD5 of {:?}:", String::from_utf8_lossy(sample));
        println!("{:x}\n", digest);
    }
    Ok(())
}
