use digest_rs::{Minimizer, ModMinBuilder, Result};

fn main() -> Result<()> {
    let seq = b"ATCGTACGATGCATGCATGCTGACG";
    let k: u16 = 6;

    let mut digester = ModMinBuilder::new(seq).k(k).modulus(4).finish()?;

    while digester.roll_next_minimizer() {
        let pos = digester.minimizer_pos().unwrap();
        let kmer = digester.hasher().kmer().unwrap();
        println!(
            "{:>3}  {}  {:#018x}",
            pos,
            String::from_utf8_lossy(&kmer),
            digester.hasher().selected_hash()
        );
    }

    Ok(())
}
