use digest_rs::{DigestError, MinimizedHash, Minimizer, ModMin, ModMinBuilder};

fn generate_dna(len: usize, seed: u64, with_n: bool) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if with_n && (state >> 13) % 101 == 0 {
                b'N'
            } else {
                BASES[(state >> 33) as usize % 4]
            }
        })
        .collect()
}

fn revcomp(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|c| match c {
            b'A' => b'T',
            b'C' => b'G',
            b'G' => b'C',
            b'T' => b'A',
            other => *other,
        })
        .collect()
}

#[test]
fn modulus_one_keeps_every_valid_kmer() {
    let mut d = ModMin::new(b"ACGTACGT", 4, 1, 0, MinimizedHash::Canonical).unwrap();
    assert_eq!(d.roll_next_n_minimizers(usize::MAX), vec![0, 1, 2, 3, 4]);
    // exhausted: further requests yield nothing
    assert!(!d.roll_next_minimizer());
}

#[test]
fn ambiguous_windows_are_skipped() {
    let mut d = ModMin::new(b"ACGTNACGT", 4, 1, 0, MinimizedHash::Canonical).unwrap();
    assert_eq!(d.roll_next_n_minimizers(usize::MAX), vec![0, 5]);
}

#[test]
fn sequence_shorter_than_k_yields_nothing() {
    let mut d = ModMin::new(b"ACGT", 5, 1, 0, MinimizedHash::Canonical).unwrap();
    assert_eq!(d.roll_next_n_minimizers(usize::MAX), vec![]);
}

#[test]
fn bad_parameters_are_rejected() {
    assert_eq!(
        ModMin::new(b"ACGT", 4, 0, 0, MinimizedHash::Canonical).unwrap_err(),
        DigestError::BadConstruction("modulus must be greater than 0")
    );
    assert!(matches!(
        ModMin::new(b"ACGT", 0, 17, 0, MinimizedHash::Canonical),
        Err(DigestError::BadConstruction(_))
    ));
    assert!(matches!(
        ModMin::new(b"ACGT", 4, 17, 4, MinimizedHash::Canonical),
        Err(DigestError::BadConstruction(_))
    ));
}

#[test]
fn two_runs_are_identical() {
    let seq = generate_dna(4000, 42, true);
    let run = |seq: &[u8]| {
        ModMinBuilder::new(seq)
            .k(16)
            .modulus(17)
            .finish()
            .unwrap()
            .roll_next_n_minimizers(usize::MAX)
    };
    assert_eq!(run(&seq), run(&seq));
}

#[test]
fn density_approaches_one_over_modulus() {
    let seq = generate_dna(50_000, 5, false);
    let k = 16u16;
    let modulus = 4u64;
    let positions = ModMinBuilder::new(&seq)
        .k(k)
        .modulus(modulus)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let kmers = (seq.len() - k as usize + 1) as f64;
    let density = positions.len() as f64 / kmers;
    let expected = 1.0 / modulus as f64;
    assert!(
        (density - expected).abs() < expected * 0.3,
        "density {} too far from {}",
        density,
        expected
    );
}

#[test]
fn selection_is_translation_invariant() {
    let seq = generate_dna(500, 23, false);
    let k = 8u16;
    let whole = ModMinBuilder::new(&seq)
        .k(k)
        .modulus(4)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let offset = 100;
    let sub = &seq[offset..offset + 200];
    let within = ModMinBuilder::new(sub)
        .k(k)
        .modulus(4)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let expected: Vec<usize> = whole
        .iter()
        .filter(|&&p| p >= offset && p + k as usize <= offset + 200)
        .map(|&p| p - offset)
        .collect();
    assert_eq!(within, expected);
}

#[test]
fn canonical_selection_reflects_under_reverse_complement() {
    let seq = generate_dna(300, 9, true);
    let rc = revcomp(&seq);
    let k = 8u16;
    let fwd = ModMinBuilder::new(&seq)
        .k(k)
        .modulus(4)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let rev = ModMinBuilder::new(&rc)
        .k(k)
        .modulus(4)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let mut reflected: Vec<usize> = fwd
        .iter()
        .map(|&p| seq.len() - p - k as usize)
        .collect();
    reflected.sort_unstable();
    assert_eq!(rev, reflected);
}

#[test]
fn positions_iterator_matches_manual_rolling() {
    let seq = generate_dna(600, 31, true);
    let collected: Vec<usize> = ModMinBuilder::new(&seq)
        .k(12)
        .modulus(8)
        .finish()
        .unwrap()
        .positions()
        .collect();
    let mut d = ModMinBuilder::new(&seq).k(12).modulus(8).finish().unwrap();
    let manual = d.roll_next_n_minimizers(usize::MAX);
    assert_eq!(collected, manual);
}

#[test]
fn forward_hash_selection_differs_from_canonical() {
    // not a strict requirement of any single sequence, but over a few
    // hundred k-mers the two orderings must disagree somewhere
    let seq = generate_dna(800, 17, false);
    let canonical = ModMinBuilder::new(&seq)
        .k(10)
        .modulus(8)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    let forward = ModMinBuilder::new(&seq)
        .k(10)
        .modulus(8)
        .minimized_h(MinimizedHash::Forward)
        .finish()
        .unwrap()
        .roll_next_n_minimizers(usize::MAX);
    assert_ne!(canonical, forward);
}
