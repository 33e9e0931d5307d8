// ============================================================
// Layer 5 - Keyed Vectors
// ============================================================
// The trained model: one dense vector per vocabulary token,
// stored as the rows of a [vocab, dim] matrix.
//
// Every query works on a unit-normalised copy of the matrix,
// computed once at construction, so a dot product between two
// rows is their cosine similarity:
//
//   cos(a, b) = (a · b) / (|a| |b|) = â · b̂
//
// Ranking the whole vocabulary against a query is then a single
// matrix-vector product.
//
// Analogies ("king - man + woman") average the +1 / -1 weighted
// unit vectors of the query tokens, normalise the result and
// rank the whole vocabulary against it, leaving the query tokens
// themselves out of the answer.
//
// Reference: Mikolov et al. (2013) Linguistic Regularities in
//            Continuous Space Word Representations

use std::collections::{HashMap, HashSet};

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, DataMut, Ix1};

use crate::domain::error::VectorsError;
use crate::domain::traits::VectorSpace;

#[derive(Debug, Clone)]
pub struct KeyedVectors {
    words:   Vec<String>,
    index:   HashMap<String, usize>,
    vectors: Array2<f32>,
    unit:    Array2<f32>,
}

impl KeyedVectors {
    /// Build from tokens and a matrix with one row per token.
    ///
    /// Fails if the row count does not match the token count or a
    /// token appears twice.
    pub fn new(words: Vec<String>, vectors: Array2<f32>) -> Result<Self, VectorsError> {
        if vectors.nrows() != words.len() {
            return Err(VectorsError::Format {
                line:   0,
                reason: format!("{} tokens but {} vector rows", words.len(), vectors.nrows()),
            });
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, w) in words.iter().enumerate() {
            if index.insert(w.clone(), i).is_some() {
                return Err(VectorsError::Format {
                    line:   i + 2,
                    reason: format!("duplicate token '{w}'"),
                });
            }
        }

        let mut unit = vectors.clone();
        for mut row in unit.rows_mut() {
            normalise(&mut row);
        }

        Ok(Self { words, index, vectors, unit })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Raw vector by row index
    pub fn row(&self, i: usize) -> ArrayView1<'_, f32> {
        self.vectors.row(i)
    }

    fn index_of(&self, token: &str) -> Result<usize, VectorsError> {
        self.index
            .get(token)
            .copied()
            .ok_or_else(|| VectorsError::UnknownToken(token.to_string()))
    }

    /// Rank every row against a unit-length query, skipping `exclude`.
    fn rank(&self, query: &Array1<f32>, topn: usize, exclude: &HashSet<usize>) -> Vec<(String, f32)> {
        let scores = self.unit.dot(query);

        let mut scored: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !exclude.contains(i))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(topn);

        scored
            .into_iter()
            .map(|(i, score)| (self.words[i].clone(), score))
            .collect()
    }
}

impl VectorSpace for KeyedVectors {
    fn dimensions(&self) -> usize {
        self.vectors.ncols()
    }

    fn vocab_len(&self) -> usize {
        self.words.len()
    }

    fn vector(&self, token: &str) -> Option<ArrayView1<'_, f32>> {
        self.index.get(token).map(|&i| self.row(i))
    }

    fn most_similar(
        &self,
        positive: &[&str],
        negative: &[&str],
        topn: usize,
    ) -> Result<Vec<(String, f32)>, VectorsError> {
        if positive.is_empty() && negative.is_empty() {
            return Err(VectorsError::EmptyQuery);
        }

        let mut mean = Array1::<f32>::zeros(self.dimensions());
        let mut exclude = HashSet::new();

        let weighted = positive
            .iter()
            .map(|t| (t, 1.0f32))
            .chain(negative.iter().map(|t| (t, -1.0f32)));

        for (token, weight) in weighted {
            let i = self.index_of(token)?;
            exclude.insert(i);
            mean.scaled_add(weight, &self.unit.row(i));
        }

        mean /= (positive.len() + negative.len()) as f32;
        normalise(&mut mean);

        Ok(self.rank(&mean, topn, &exclude))
    }

    fn similar_by_vector(&self, vector: &[f32], topn: usize) -> Vec<(String, f32)> {
        if vector.len() != self.dimensions() {
            return Vec::new();
        }
        let mut query = Array1::from(vector.to_vec());
        if !normalise(&mut query) {
            return Vec::new();
        }
        self.rank(&query, topn, &HashSet::new())
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32, VectorsError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.unit.row(ia).dot(&self.unit.row(ib)))
    }

    fn doesnt_match(&self, tokens: &[&str]) -> Result<String, VectorsError> {
        let mut known = Vec::with_capacity(tokens.len());
        for &token in tokens {
            match self.index.get(token) {
                Some(&i) => known.push(i),
                None => tracing::warn!("Ignoring '{}': not in vocabulary", token),
            }
        }
        if known.is_empty() {
            return Err(VectorsError::EmptyQuery);
        }

        let mut mean = Array1::<f32>::zeros(self.dimensions());
        for &i in &known {
            mean += &self.unit.row(i);
        }
        normalise(&mut mean);

        // First token with the lowest similarity to the group mean
        let mut odd = known[0];
        let mut lowest = f32::INFINITY;
        for &i in &known {
            let score = self.unit.row(i).dot(&mean);
            if score < lowest {
                lowest = score;
                odd = i;
            }
        }
        Ok(self.words[odd].clone())
    }
}

/// Scale to unit length in place. Zero vectors stay zero; returns
/// false for them.
fn normalise<S>(v: &mut ArrayBase<S, Ix1>) -> bool
where
    S: DataMut<Elem = f32>,
{
    let norm = v.mapv(|x| x * x).sum().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return false;
    }
    v.mapv_inplace(|x| x / norm);
    true
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::array;

    /// Hand-built 2-D space where man→king and woman→queen differ by
    /// the same offset.
    pub(crate) fn royal_space() -> KeyedVectors {
        let words = ["king", "queen", "man", "woman", "apple"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let vectors = array![
            [1.0, 1.0],   // king
            [1.0, -1.0],  // queen
            [0.8, 0.6],   // man
            [0.6, -0.8],  // woman
            [-1.0, 0.05]  // apple
        ];
        KeyedVectors::new(words, vectors).unwrap()
    }

    #[test]
    fn test_vector_lookup() {
        let kv = royal_space();
        assert_eq!(kv.vector("man").unwrap().to_vec(), vec![0.8, 0.6]);
        assert_eq!(kv.vector("ship"), None);
        assert_eq!(kv.dimensions(), 2);
        assert_eq!(kv.vocab_len(), 5);
    }

    #[test]
    fn test_similarity_is_cosine() {
        let kv = royal_space();
        let s = kv.similarity("king", "queen").unwrap();
        assert!(s.abs() < 1e-6, "orthogonal vectors, got {s}");
        let same = kv.similarity("man", "man").unwrap();
        assert!((same - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_most_similar_excludes_query_and_is_sorted() {
        let kv = royal_space();
        let result = kv.most_similar(&["king"], &[], 10).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|(w, _)| w != "king"));
        assert_eq!(result[0].0, "man");
        assert!(result.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_analogy() {
        let kv = royal_space();
        let result = kv.most_similar(&["king", "woman"], &["man"], 1).unwrap();
        assert_eq!(result[0].0, "queen");
    }

    #[test]
    fn test_topn_truncates() {
        let kv = royal_space();
        assert_eq!(kv.most_similar(&["apple"], &[], 2).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let kv = royal_space();
        let err = kv.most_similar(&["ship"], &[], 3).unwrap_err();
        assert!(matches!(err, VectorsError::UnknownToken(t) if t == "ship"));
        assert!(matches!(kv.most_similar(&[], &[], 3), Err(VectorsError::EmptyQuery)));
    }

    #[test]
    fn test_similar_by_vector() {
        let kv = royal_space();
        let result = kv.similar_by_vector(&[2.0, 2.0], 1);
        assert_eq!(result[0].0, "king");
        assert!((result[0].1 - 1.0).abs() < 1e-6);
        assert!(kv.similar_by_vector(&[0.0, 0.0], 3).is_empty());
    }

    #[test]
    fn test_doesnt_match() {
        let kv = royal_space();
        assert_eq!(kv.doesnt_match(&["king", "man", "apple"]).unwrap(), "apple");
        // unknown tokens are ignored
        assert_eq!(kv.doesnt_match(&["king", "ship", "man", "apple"]).unwrap(), "apple");
        assert!(matches!(kv.doesnt_match(&["ship"]), Err(VectorsError::EmptyQuery)));
    }

    #[test]
    fn test_rejects_shape_mismatch_and_duplicates() {
        let err = KeyedVectors::new(vec!["a".into()], Array2::zeros((2, 3))).unwrap_err();
        assert!(matches!(err, VectorsError::Format { .. }));

        let err = KeyedVectors::new(vec!["a".into(), "a".into()], array![[1.0], [2.0]]).unwrap_err();
        assert!(matches!(err, VectorsError::Format { .. }));
    }
}
