use faro_domain::{lifecycle::TransitionError, records::RecordError, scorer::ScoreError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid input: {message}")]
	Validation { message: String },
	#[error("Rule table unusable: {message}")]
	Configuration { message: String },
	#[error("Invalid lifecycle transition: {message}")]
	InvalidTransition { message: String },
	#[error("Record source failed: {message}")]
	Source { message: String },
}

impl From<ScoreError> for Error {
	fn from(err: ScoreError) -> Self {
		match err {
			ScoreError::EmptyTitle => Self::Validation { message: err.as_str().to_string() },
			ScoreError::EmptyRuleTable =>
				Self::Configuration { message: err.as_str().to_string() },
		}
	}
}

impl From<TransitionError> for Error {
	fn from(err: TransitionError) -> Self {
		Self::InvalidTransition { message: err.as_str().to_string() }
	}
}

impl From<RecordError> for Error {
	fn from(err: RecordError) -> Self {
		Self::Validation { message: err.as_str().to_string() }
	}
}
