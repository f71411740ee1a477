//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function, which replays the sample scenarios of
// both structures and compares the disjoint set optimizations
//--------------------------------------------------------------------

extern crate classic_structures;

mod logging;

use std::collections::HashSet;
use std::error::Error;
use std::time::Instant;
use log::{info, warn};
use classic_structures::{DisjointSet, Optimization, RangeMinTree};

fn range_min_samples() -> Result<(), Box<dyn Error>> {
    let mut rmt = RangeMinTree::new(vec![5, 7, 9, 8, 10])?;
    info!("min of [2, 3] over {:?}: {}", rmt.values(), rmt.query(2, 3)?);

    rmt.update(4, 1)?;
    info!("min of [0, 4] over {:?}: {}", rmt.values(), rmt.query(0, 4)?);

    if let Err(err) = rmt.query(3, 1) { warn!("query(3, 1) rejected: {}", err); }
    Ok(())
}

fn disjoint_set_sample<E>(elements: Vec<E>, pairs: &[(E, E)], opt: Optimization) -> Result<(), Box<dyn Error>>
    where E: Eq + std::hash::Hash + Clone + std::fmt::Debug {
    let mut ds = DisjointSet::new(elements.clone(), opt);

    let mut roots = HashSet::new();
    for x in elements.iter() { roots.insert(ds.find(x)?.clone()); }
    if roots.len() == elements.len() { info!("{}: initialization was correct", opt); }
    else { warn!("{}: initialization was not correct", opt); }

    for (a, b) in pairs { ds.union(a, b)?; }

    let mut joined = true;
    for (a, b) in pairs { joined &= ds.same_set(a, b)?; }
    if joined { info!("{}: union works, groups {:?}", opt, ds.groups()); }
    else { warn!("{}: union is not working", opt); }

    Ok(())
}

// Chains the elements the worst way for naive linking and reports the resulting height
fn compare_heights(n: u32) -> Result<(), Box<dyn Error>> {
    for &opt in Optimization::ALL.iter() {
        let then = Instant::now();
        let mut ds = DisjointSet::new(0..n, opt);
        for i in 0..n-1 { ds.union(&i, &(i + 1))?; }

        let height = ds.depth(&0)?;
        for i in 0..n { ds.find(&i)?; }
        let now = Instant::now();

        info!("{}: chain of {} elements has height {}, took {:?}", opt, n, height, now.duration_since(then));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::try_init()?;

    range_min_samples()?;

    disjoint_set_sample(vec![1, 2, 10, 20], &[(1, 10), (2, 20)], Optimization::Naive)?;
    disjoint_set_sample(vec![1, 2, 10, 20], &[(1, 10), (2, 20)], Optimization::UnionByRank)?;
    disjoint_set_sample(vec!['a', 'b', 'z', 'x'], &[('a', 'z'), ('x', 'b')], Optimization::Full)?;

    compare_heights(2000)?;
    Ok(())
}
