//! Итеративный генератор сочетаний C(n, k).
//!
//! Нужен детектору особых рук: перебор разбиений 13 карт на 3/5/5
//! делаем явными сочетаниями индексов, без рекурсии — глубина стека
//! фиксирована, сложность видна невооружённым глазом.

/// Итератор по всем сочетаниям k индексов из 0..n
/// в лексикографическом порядке.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Классический "одометр": ищем справа позицию, которую можно
        // сдвинуть, и перестраиваем хвост за ней.
        let k = self.k;
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
