use super::genome::{Genome, GenomeLayout};
use crate::error::{Result, TensegError};
use crate::model::Structure;
use rand::seq::index::sample;
use rand::Rng;

/// Translates between flat genomes and structural descriptions.
///
/// The codec owns the fixed link-slot template for its strut count: for node
/// `i`, slot `2i` connects `i -> (i+1) mod 2S` and slot `2i+1` connects
/// `i -> (i+2) mod 2S`. Slots `{4k}` carry rigid bars, the remaining `3S`
/// slots carry cables. The template is read-only shared state; `decode`
/// rewires a private copy per call.
pub struct GenomeCodec {
    layout: GenomeLayout,
    links: Vec<[usize; 2]>,
    struts: Vec<usize>,
    cables: Vec<usize>,
}

impl GenomeCodec {
    pub fn new(strut_num: usize) -> Result<Self> {
        // With fewer than 2 struts the slot template degenerates (i+2 wraps
        // onto i) and rewire records cannot pick two distinct strut slots.
        if strut_num < 2 {
            return Err(TensegError::Configuration(
                "Strut count must be at least 2".to_string(),
            ));
        }

        let layout = GenomeLayout::new(strut_num);

        let mut links = vec![[0usize; 2]; layout.link_num];
        for i in 0..layout.node_num {
            links[2 * i] = [i, (i + 1) % layout.node_num];
            links[2 * i + 1] = [i, (i + 2) % layout.node_num];
        }

        let struts: Vec<usize> = (0..strut_num).map(|k| 4 * k).collect();
        let cables: Vec<usize> = (0..layout.link_num)
            .filter(|slot| slot % 4 != 0)
            .collect();

        Ok(Self {
            layout,
            links,
            struts,
            cables,
        })
    }

    pub fn layout(&self) -> &GenomeLayout {
        &self.layout
    }

    pub fn genome_len(&self) -> usize {
        self.layout.total_len()
    }

    /// Slot template rows: the node pair occupying each link slot.
    pub fn template(&self) -> &[[usize; 2]] {
        &self.links
    }

    pub fn strut_slots(&self) -> &[usize] {
        &self.struts
    }

    pub fn cable_slots(&self) -> &[usize] {
        &self.cables
    }

    /// Generate a fresh random genome.
    ///
    /// Positions are independent uniforms in `[0, 1)`; rewire records pick
    /// two distinct slots from the respective slot set plus two endpoint
    /// choices. No validation happens here: records that would degenerate a
    /// link are filtered at decode time.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Genome {
        let mut genes = Vec::with_capacity(self.layout.total_len());

        for _ in 0..self.layout.position_len() {
            genes.push(rng.gen::<f64>());
        }

        self.push_rewire_records(&mut genes, &self.struts, self.layout.strut_records(), rng);
        self.push_rewire_records(&mut genes, &self.cables, self.layout.cable_records(), rng);

        genes
    }

    fn push_rewire_records<R: Rng>(
        &self,
        genes: &mut Genome,
        slots: &[usize],
        records: usize,
        rng: &mut R,
    ) {
        for _ in 0..records {
            let picked = sample(rng, slots.len(), 2);
            genes.push(slots[picked.index(0)] as f64);
            genes.push(slots[picked.index(1)] as f64);
            genes.push(rng.gen_range(0..=1) as f64);
            genes.push(rng.gen_range(0..=1) as f64);
        }
    }

    /// Decode a genome into node coordinates plus bar/cable topology.
    ///
    /// Rewire records are applied strictly in genome order; each applied
    /// swap mutates the working copy and affects later records. A swap of
    /// `links[a][end_a]` and `links[b][end_b]` is rejected when it would
    /// leave either slot with two equal endpoints.
    pub fn decode(&self, genome: &Genome) -> Result<Structure> {
        let expected = self.layout.total_len();
        if genome.len() != expected {
            return Err(TensegError::GenomeLength {
                expected,
                actual: genome.len(),
            });
        }

        let nodes: Vec<[f64; 3]> = genome[..self.layout.position_len()]
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        // Working copy; the shared template must survive decode untouched.
        let mut links = self.links.clone();

        for record in genome[self.layout.position_len()..].chunks_exact(4) {
            let slot_a = record[0] as usize;
            let slot_b = record[1] as usize;
            let end_a = record[2] as usize;
            let end_b = record[3] as usize;

            let kept_a = links[slot_a][1 - end_a];
            let kept_b = links[slot_b][1 - end_b];
            let moved_a = links[slot_a][end_a];
            let moved_b = links[slot_b][end_b];

            if kept_a == moved_b || kept_b == moved_a {
                continue;
            }

            links[slot_a][end_a] = moved_b;
            links[slot_b][end_b] = moved_a;
        }

        let bars: Vec<[usize; 2]> = self.struts.iter().map(|&slot| links[slot]).collect();
        let cables: Vec<[usize; 2]> = self.cables.iter().map(|&slot| links[slot]).collect();
        let actuators: Vec<usize> = (0..cables.len()).collect();

        Ok(Structure {
            nodes,
            bars,
            cables,
            actuators,
        })
    }
}
