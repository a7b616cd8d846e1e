use rand::rngs::StdRng;
use rand::SeedableRng;
use tenseg::engines::generation::GenomeCodec;
use tenseg::TensegError;

#[test]
fn test_genome_length_scales_with_strut_count() {
    for strut_num in [2, 3, 6, 12] {
        let codec = GenomeCodec::new(strut_num).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let genome = codec.create_individual(&mut rng);
        assert_eq!(genome.len(), 38 * strut_num);
        assert_eq!(genome.len(), codec.genome_len());
    }
}

#[test]
fn test_template_topology_for_two_struts() {
    let codec = GenomeCodec::new(2).unwrap();

    assert_eq!(
        codec.template(),
        &[
            [0, 1],
            [0, 2],
            [1, 2],
            [1, 3],
            [2, 3],
            [2, 0],
            [3, 0],
            [3, 1],
        ]
    );
    assert_eq!(codec.strut_slots(), &[0, 4]);
    assert_eq!(codec.cable_slots(), &[1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_decode_is_deterministic_and_leaves_template_untouched() {
    let codec = GenomeCodec::new(3).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let first = codec.create_individual(&mut rng);
    let second = codec.create_individual(&mut rng);

    let decoded_once = codec.decode(&first).unwrap();
    // Decoding an unrelated genome in between must not bleed into the next
    // decode of the first one.
    let _ = codec.decode(&second).unwrap();
    let decoded_again = codec.decode(&first).unwrap();

    assert_eq!(decoded_once, decoded_again);
}

#[test]
fn test_decode_never_produces_degenerate_links() {
    for strut_num in [2, 4, 6] {
        let codec = GenomeCodec::new(strut_num).unwrap();
        let mut rng = StdRng::seed_from_u64(strut_num as u64);

        for _ in 0..25 {
            let genome = codec.create_individual(&mut rng);
            let structure = codec.decode(&genome).unwrap();

            assert_eq!(structure.bars.len(), strut_num);
            assert_eq!(structure.cables.len(), 3 * strut_num);
            for link in structure.bars.iter().chain(structure.cables.iter()) {
                assert_ne!(link[0], link[1], "degenerate link {:?}", link);
            }
        }
    }
}

#[test]
fn test_decode_applies_valid_swaps_and_rejects_degenerate_ones() {
    let codec = GenomeCodec::new(2).unwrap();

    // Positions are arbitrary; the rewiring tail is crafted by hand:
    // - strut records pair up and cancel exactly,
    // - the first cable record swaps slot 1 and slot 2 at endpoint 0,
    // - record (3, 7, 0, 0) would leave slot 3 as (3, 3) and must be
    //   rejected every time it appears.
    let mut genome: Vec<f64> = (0..12).map(|i| i as f64 / 12.0).collect();
    let mut records: Vec<[usize; 4]> = vec![
        [0, 4, 0, 0],
        [0, 4, 0, 0],
        [0, 4, 1, 1],
        [0, 4, 1, 1],
        [1, 2, 0, 0],
    ];
    records.extend(std::iter::repeat([3, 7, 0, 0]).take(11));
    for record in &records {
        genome.extend(record.iter().map(|&v| v as f64));
    }
    assert_eq!(genome.len(), codec.genome_len());

    let structure = codec.decode(&genome).unwrap();

    assert_eq!(structure.bars, vec![[0, 1], [2, 3]]);
    assert_eq!(
        structure.cables,
        vec![[1, 2], [0, 2], [1, 3], [2, 0], [3, 0], [3, 1]]
    );
    assert_eq!(structure.actuators, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(structure.nodes.len(), 4);
    assert_eq!(structure.nodes[1], [3.0 / 12.0, 4.0 / 12.0, 5.0 / 12.0]);
}

#[test]
fn test_decode_rejects_wrong_genome_length() {
    let codec = GenomeCodec::new(2).unwrap();

    let result = codec.decode(&vec![0.0; 10]);
    match result {
        Err(TensegError::GenomeLength { expected, actual }) => {
            assert_eq!(expected, 76);
            assert_eq!(actual, 10);
        }
        other => panic!("expected GenomeLength error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_too_few_struts_rejected() {
    for strut_num in [0, 1] {
        assert!(matches!(
            GenomeCodec::new(strut_num),
            Err(TensegError::Configuration(_))
        ));
    }
}
