// Reference model for Llrb, a counted multiset over keys 0..capacity.
struct RefKeys {
    counts: Vec<usize>,
}

impl RefKeys {
    fn new(capacity: usize) -> RefKeys {
        RefKeys {
            counts: vec![0; capacity],
        }
    }

    fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    fn has(&self, key: u64) -> bool {
        self.counts[key as usize] > 0
    }

    fn replace_or_insert(&mut self, key: u64) -> bool {
        let count = &mut self.counts[key as usize];
        if *count > 0 {
            true
        } else {
            *count = 1;
            false
        }
    }

    fn insert_no_replace(&mut self, key: u64) {
        self.counts[key as usize] += 1;
    }

    fn delete(&mut self, key: u64) -> bool {
        let count = &mut self.counts[key as usize];
        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    fn delete_min(&mut self) -> Option<u64> {
        let key = self.iter().next()?;
        self.delete(key);
        Some(key)
    }

    fn delete_max(&mut self) -> Option<u64> {
        let key = self.iter().last()?;
        self.delete(key);
        Some(key)
    }

    fn iter(&self) -> std::vec::IntoIter<u64> {
        self.range(Bound::Unbounded, Bound::Unbounded)
    }

    fn range(&self, low: Bound<u64>, high: Bound<u64>) -> std::vec::IntoIter<u64> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(key, _)| (low, high).contains(&(*key as u64)))
            .flat_map(|(key, n)| std::iter::repeat(key as u64).take(*n))
            .collect::<Vec<u64>>()
            .into_iter()
    }

    fn reverse(&self, low: Bound<u64>, high: Bound<u64>) -> std::vec::IntoIter<u64> {
        let mut keys: Vec<u64> = self.range(low, high).collect();
        keys.reverse();
        keys.into_iter()
    }
}

fn random_low_high(size: usize) -> (Bound<u64>, Bound<u64>) {
    let size = size as u64;
    let low = random::<u64>() % size;
    let high = random::<u64>() % size;
    let low = match random::<u8>() % 3 {
        0 => Bound::Included(low),
        1 => Bound::Excluded(low),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    let high = match random::<u8>() % 3 {
        0 => Bound::Included(high),
        1 => Bound::Excluded(high),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    (low, high)
}
