use fitts_analysis::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// Recorded sequences with complete trial data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceCollection {
    pub sequences: Vec<RecordedSequence>,
}

/// One sequence together with the code identifying it (participant,
/// block and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSequence {
    pub code: String,
    #[serde(flatten)]
    pub sequence: Sequence,
}
