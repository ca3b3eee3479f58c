use wordboard_core::errors::BoardError;
use wordboard_core::word::WordId;

/// Why a weight transition was refused. No state changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("word has decayed to zero")]
    Expired,

    #[error("word has reached the maximum weight {max_weight}")]
    MaxWeight { max_weight: f64 },
}

impl Rejection {
    /// Attach the word the transition was attempted on.
    pub fn into_board_error(self, word_id: WordId) -> BoardError {
        match self {
            Rejection::Expired => BoardError::WordExpired { word_id },
            Rejection::MaxWeight { max_weight } => BoardError::MaxWeightReached {
                word_id,
                max_weight,
            },
        }
    }
}
