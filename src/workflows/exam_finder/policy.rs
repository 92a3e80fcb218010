use super::config::ExamFinderConfig;

/// Saturating percentage: `round(score / max_score * 100)`, clamped to
/// `[0, match_cap]`. Scores above `max_score` all land on the cap.
pub(crate) fn match_percentage(score: i32, config: &ExamFinderConfig) -> u8 {
    if config.max_score <= 0.0 {
        return 0;
    }

    let scaled = (score as f32 / config.max_score * 100.0).round();
    scaled.clamp(0.0, f32::from(config.match_cap)) as u8
}

/// Split a ranked list into the recommended head and the optional backup tier.
pub(crate) fn tier<T>(
    mut ranked: Vec<T>,
    wants_backup: bool,
    config: &ExamFinderConfig,
) -> (Vec<T>, Vec<T>) {
    let head = ranked.len().min(config.recommended_limit);
    let mut rest = ranked.split_off(head);

    if !wants_backup {
        return (ranked, Vec::new());
    }

    rest.truncate(config.backup_limit);
    (ranked, rest)
}
