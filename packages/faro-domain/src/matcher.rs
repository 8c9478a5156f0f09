use faro_config::Config;
use time::OffsetDateTime;

use crate::{
	normalize,
	records::{DuplicateCandidate, LeadDraft, LeadRecord, MatchKind, SuggestedAction},
};

/// Compare an import batch against a snapshot of the existing lead collection.
/// At most one candidate per incoming row; an exact email match always wins
/// over a fuzzy one. Neither input is mutated.
pub fn find_duplicates(
	incoming: &[LeadDraft],
	existing: &[LeadRecord],
	cfg: &Config,
) -> Vec<DuplicateCandidate> {
	let threshold = cfg.matching.fuzzy_similarity_threshold;
	let mut out = Vec::new();

	for (row_index, draft) in incoming.iter().enumerate() {
		let candidate = exact_match(row_index, draft, existing)
			.or_else(|| best_fuzzy_match(row_index, draft, existing, threshold));

		if let Some(candidate) = candidate {
			out.push(candidate);
		}
	}

	out
}

fn exact_match(
	row_index: usize,
	draft: &LeadDraft,
	existing: &[LeadRecord],
) -> Option<DuplicateCandidate> {
	let email = normalize::normalize_email(draft.email.as_deref()?);

	if email.is_empty() {
		return None;
	}

	existing
		.iter()
		.find(|lead| normalize::normalize_email(&lead.email) == email)
		.map(|lead| DuplicateCandidate {
			row_index,
			lead_id: lead.id,
			kind: MatchKind::Exact,
			similarity: 1.0,
			action: SuggestedAction::Skip,
		})
}

fn best_fuzzy_match(
	row_index: usize,
	draft: &LeadDraft,
	existing: &[LeadRecord],
	threshold: f32,
) -> Option<DuplicateCandidate> {
	// Both names are required for a fuzzy match; rows without a contact can
	// only be caught by their email.
	let contact = draft.contact.as_deref()?;
	let mut best: Option<(f32, OffsetDateTime, &LeadRecord)> = None;

	for lead in existing {
		let company_similarity = normalize::name_similarity(&draft.company, &lead.company);
		let contact_similarity = normalize::name_similarity(contact, &lead.contact);

		if company_similarity < threshold || contact_similarity < threshold {
			continue;
		}

		let combined = (company_similarity + contact_similarity) / 2.0;
		let better = match best {
			None => true,
			Some((best_similarity, best_updated_at, _)) =>
				combined > best_similarity
					|| (combined == best_similarity && lead.updated_at > best_updated_at),
		};

		if better {
			best = Some((combined, lead.updated_at, lead));
		}
	}

	best.map(|(similarity, _, lead)| DuplicateCandidate {
		row_index,
		lead_id: lead.id,
		kind: MatchKind::Fuzzy,
		similarity,
		action: SuggestedAction::Skip,
	})
}
