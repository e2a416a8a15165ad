/// One grouped request to the translation service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Slot number assigned by [`partition`].
    pub index: usize,
    terms: Vec<String>,
}

impl Batch {
    pub fn new(index: usize, terms: Vec<String>) -> Self {
        Self { index, terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Request body: one term per line, each line newline-terminated.
    pub fn block(&self) -> String {
        self.terms.iter().fold(String::new(), |mut block, term| {
            block.push_str(term);
            block.push('\n');
            block
        })
    }
}

/// Distribute `terms` round-robin over `batch_count` slots.
///
/// Term `i` lands in slot `i % batch_count`. All slots are returned, empty
/// ones included; callers skip individual empty batches and never stop at
/// the first one.
pub fn partition(terms: &[String], batch_count: usize) -> Vec<Batch> {
    let batch_count = batch_count.max(1);
    let mut batches: Vec<Batch> = (0..batch_count)
        .map(|index| Batch::new(index, Vec::new()))
        .collect();

    for (i, term) in terms.iter().enumerate() {
        batches[i % batch_count].terms.push(term.clone());
    }

    batches
}
