use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionCount {
    pub name: String,
    pub games: usize,
}

/// Occurrence counter that remembers the order champions were first seen.
pub struct ChampionTally {
    counts: Vec<ChampionCount>,
    index: HashMap<String, usize>,
}

impl ChampionTally {
    pub fn new() -> Self {
        ChampionTally {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, champion_name: &str) {
        match self.index.get(champion_name) {
            Some(&slot) => self.counts[slot].games += 1,
            None => {
                self.index.insert(champion_name.to_string(), self.counts.len());
                self.counts.push(ChampionCount {
                    name: champion_name.to_string(),
                    games: 1,
                });
            }
        }
    }

    /// Most played champion. Ties go to the one encountered first.
    pub fn most_frequent(&self) -> Option<&ChampionCount> {
        self.counts
            .iter()
            .fold(None, |best: Option<&ChampionCount>, c| match best {
                Some(b) if b.games >= c.games => Some(b),
                _ => Some(c),
            })
    }

    /// Counts sorted by games played, descending; equal counts keep
    /// first-encountered order.
    pub fn distribution(&self) -> Vec<ChampionCount> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.games.cmp(&a.games));
        sorted
    }
}

impl<'a> FromIterator<&'a str> for ChampionTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = ChampionTally::new();
        for name in iter {
            tally.add(name);
        }
        tally
    }
}
