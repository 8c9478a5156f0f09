use crate::records::TenderStatus;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionError {
	/// The record is discarded; nothing transitions out of that state.
	Terminal,
	Invalid,
}

impl TransitionError {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Terminal => "Discarded tenders cannot transition.",
			Self::Invalid => "Transition is not part of the tender lifecycle.",
		}
	}
}

/// `new -> viewed -> tracking`, with `discarded` reachable from any live state.
pub fn can_transition(from: TenderStatus, to: TenderStatus) -> bool {
	use TenderStatus::*;

	match (from, to) {
		(Discarded, _) => false,
		(_, Discarded) => true,
		(New, Viewed) => true,
		(Viewed, Tracking) => true,
		_ => false,
	}
}

pub fn transition(from: TenderStatus, to: TenderStatus) -> Result<TenderStatus, TransitionError> {
	if from == TenderStatus::Discarded {
		return Err(TransitionError::Terminal);
	}
	if !can_transition(from, to) {
		return Err(TransitionError::Invalid);
	}

	Ok(to)
}

#[cfg(test)]
mod tests {
	use super::*;
	use TenderStatus::*;

	#[test]
	fn follows_the_forward_path() {
		assert_eq!(transition(New, Viewed), Ok(Viewed));
		assert_eq!(transition(Viewed, Tracking), Ok(Tracking));
	}

	#[test]
	fn any_live_state_can_be_discarded() {
		for from in [New, Viewed, Tracking] {
			assert_eq!(transition(from, Discarded), Ok(Discarded));
		}
	}

	#[test]
	fn discarded_is_terminal() {
		for to in [New, Viewed, Tracking, Discarded] {
			assert_eq!(transition(Discarded, to), Err(TransitionError::Terminal));
		}
	}

	#[test]
	fn skipping_viewed_is_invalid() {
		assert_eq!(transition(New, Tracking), Err(TransitionError::Invalid));
	}

	#[test]
	fn backwards_moves_are_invalid() {
		assert_eq!(transition(Tracking, Viewed), Err(TransitionError::Invalid));
		assert_eq!(transition(Viewed, New), Err(TransitionError::Invalid));
	}
}
