use crate::search::state::CandidateCursor;

/// One pending step of the search, tagged with the split it belongs to
#[derive(Debug, Clone)]
pub(crate) struct WorkItem {
    pub split_point: usize,
    pub state: SearchState,
}

/// What the next pop from the work stack does
#[derive(Debug, Clone)]
pub(crate) enum SearchState {
    /// Cut both sides along the given bitmasks, then queue the next pattern
    Tokenize { left_mask: u64, right_mask: u64 },
    /// Step through candidate expressions for two fixed token sequences
    Candidates(CandidateState),
}

/// Enumeration position inside one tokenized split
#[derive(Debug, Clone)]
pub(crate) struct CandidateState {
    pub left_tokens: Vec<u64>,
    pub right_tokens: Vec<u64>,
    pub cursor: CandidateCursor,
    /// Evaluated left side, reused while only the right dimensions move
    pub left_value: Option<f64>,
}
