use digest_rs::{Minimizer, Result, SyncmerBuilder, SyncmerPolicy};

fn main() -> Result<()> {
    // a long sequence arriving in chunks, e.g. from a chunked reader
    let chunks: [&[u8]; 4] = [
        b"ACGTTGCATTGACCAG",
        b"GTTACANNACGTTGCA",
        b"TTGACCAGGTTACACG",
        b"TTGCATTGACCAGGTT",
    ];

    let mut digester = SyncmerBuilder::new(chunks[0])
        .k(8)
        .small_k(4)
        .policy(SyncmerPolicy::Either)
        .finish()?;

    let mut positions = Vec::new();
    positions.extend(digester.roll_next_n_minimizers(usize::MAX));
    for chunk in &chunks[1..] {
        digester.append_seq(chunk)?;
        positions.extend(digester.roll_next_n_minimizers(usize::MAX));
    }

    println!("syncmer positions across {} chunks: {:?}", chunks.len(), positions);
    Ok(())
}
