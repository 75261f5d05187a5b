use crate::domain::model::{Candidate, EligibilityCriteria, InvitationBatch};
use chrono::{DateTime, Duration, Months, Utc};

/// Decides whether a candidate may be invited. The rules are sequential
/// short-circuit guards, evaluated in order:
///
/// 1. id must be non-empty
/// 2. level must reach the configured minimum
/// 3. language must match exactly when a filter is configured
/// 4. when only-active is set, the account must be older than one month and
///    the last login newer than four days; otherwise the candidate passes
///
/// Rule 4 replaces the trailing pass-through, it does not stack on top of it.
/// A record without a created timestamp passes the age guard and one without
/// a login timestamp fails the recency guard.
pub fn is_eligible(
    candidate: &Candidate,
    criteria: &EligibilityCriteria,
    now: DateTime<Utc>,
) -> bool {
    if candidate.id.is_empty() {
        return false;
    }

    if candidate.stats.level < criteria.min_level {
        return false;
    }

    if let Some(language) = &criteria.language {
        if candidate.preferences.language != *language {
            return false;
        }
    }

    if criteria.only_active {
        let created_before = now - Months::new(1);
        let logged_in_after = now - Duration::days(4);

        let timestamps = &candidate.auth.timestamps;
        return timestamps.created.map_or(true, |t| t < created_before)
            && timestamps.logged_in.map_or(false, |t| t > logged_in_after);
    }

    true
}

/// Maps a candidate list to the ids worth inviting, preserving service order.
pub fn select_eligible(
    candidates: &[Candidate],
    criteria: &EligibilityCriteria,
    now: DateTime<Utc>,
) -> InvitationBatch {
    let uuids = candidates
        .iter()
        .filter(|candidate| is_eligible(candidate, criteria, now))
        .map(|candidate| candidate.id.clone())
        .collect();

    InvitationBatch { uuids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Auth, Preferences, Stats, Timestamps};

    fn candidate(id: &str, level: i64, language: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            auth: Auth::default(),
            preferences: Preferences {
                language: language.to_string(),
            },
            stats: Stats { level },
        }
    }

    fn criteria(min_level: i64, language: Option<&str>, only_active: bool) -> EligibilityCriteria {
        EligibilityCriteria {
            min_level,
            language: language.map(str::to_string),
            only_active,
        }
    }

    fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }

    #[test]
    fn test_empty_id_always_excluded() {
        let now = Utc::now();
        let c = candidate("", 99, "en");
        assert!(!is_eligible(&c, &criteria(0, None, false), now));
        assert!(!is_eligible(&c, &criteria(0, Some("en"), true), now));
    }

    #[test]
    fn test_level_below_minimum_excluded() {
        let now = Utc::now();
        assert!(!is_eligible(&candidate("u1", 2, "en"), &criteria(3, None, false), now));
        assert!(is_eligible(&candidate("u1", 3, "en"), &criteria(3, None, false), now));
    }

    #[test]
    fn test_language_filter_exact_match() {
        let now = Utc::now();
        let rules = criteria(0, Some("de"), false);
        assert!(is_eligible(&candidate("u1", 1, "de"), &rules, now));
        assert!(!is_eligible(&candidate("u1", 1, "en"), &rules, now));
        assert!(!is_eligible(&candidate("u1", 1, ""), &rules, now));
        // Case-sensitive, no normalization.
        assert!(!is_eligible(&candidate("u1", 1, "DE"), &rules, now));
    }

    #[test]
    fn test_language_unconfigured_has_no_effect() {
        let now = Utc::now();
        assert!(is_eligible(&candidate("u1", 1, "fr"), &criteria(0, None, false), now));
        assert!(is_eligible(&candidate("u1", 1, ""), &criteria(0, None, false), now));
    }

    #[test]
    fn test_only_active_off_ignores_timestamps() {
        let now = Utc::now();
        let mut c = candidate("u1", 5, "en");
        c.auth.timestamps = Timestamps {
            created: Some(days_ago(now, 1)),
            logged_in: Some(days_ago(now, 365)),
            updated: None,
        };
        assert!(is_eligible(&c, &criteria(0, None, false), now));
    }

    #[test]
    fn test_only_active_windows() {
        let now = Utc::now();
        let rules = criteria(0, None, true);

        // Created 40 days ago, logged in yesterday: in.
        let mut c = candidate("u1", 5, "en");
        c.auth.timestamps.created = Some(days_ago(now, 40));
        c.auth.timestamps.logged_in = Some(days_ago(now, 1));
        assert!(is_eligible(&c, &rules, now));

        // Account only 10 days old: out.
        c.auth.timestamps.created = Some(days_ago(now, 10));
        assert!(!is_eligible(&c, &rules, now));

        // Old account but last login 10 days ago: out.
        c.auth.timestamps.created = Some(days_ago(now, 40));
        c.auth.timestamps.logged_in = Some(days_ago(now, 10));
        assert!(!is_eligible(&c, &rules, now));
    }

    #[test]
    fn test_only_active_missing_timestamps() {
        let now = Utc::now();
        let rules = criteria(0, None, true);

        // No login timestamp ever recorded: out.
        let mut c = candidate("u1", 5, "en");
        c.auth.timestamps.created = Some(days_ago(now, 40));
        assert!(!is_eligible(&c, &rules, now));

        // Missing created counts as old enough.
        c.auth.timestamps.created = None;
        c.auth.timestamps.logged_in = Some(days_ago(now, 1));
        assert!(is_eligible(&c, &rules, now));
    }

    #[test]
    fn test_earlier_rules_guard_only_active() {
        let now = Utc::now();
        // Active by timestamps but below level: the level guard fires first.
        let mut c = candidate("u1", 1, "en");
        c.auth.timestamps.created = Some(days_ago(now, 40));
        c.auth.timestamps.logged_in = Some(days_ago(now, 1));
        assert!(!is_eligible(&c, &criteria(10, None, true), now));
    }

    #[test]
    fn test_select_eligible_preserves_order() {
        let now = Utc::now();
        let candidates = vec![
            candidate("u1", 5, "en"),
            candidate("", 10, "en"),
            candidate("u3", 1, "en"),
            candidate("u4", 7, "en"),
        ];
        let batch = select_eligible(&candidates, &criteria(3, None, false), now);
        assert_eq!(batch.uuids, vec!["u1", "u4"]);
    }
}
