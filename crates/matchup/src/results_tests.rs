use super::*;

fn sample() -> MatchupResults {
    let mut results = MatchupResults::new(MatchConfig::default());
    // hard 7-2-1 against easy, then easy 1-3-0 against medium
    results.add_match(
        Difficulty::Hard,
        Difficulty::Easy,
        MatchResult {
            wins: 7,
            losses: 2,
            draws: 1,
        },
    );
    results.add_match(
        Difficulty::Easy,
        Difficulty::Medium,
        MatchResult {
            wins: 1,
            losses: 3,
            draws: 0,
        },
    );
    results
}

#[test]
fn test_wins_aggregate_across_seats() {
    let results = sample();
    assert_eq!(results.wins_for(Difficulty::Hard), 7);
    // 2 as second seat of the first match, 1 as first seat of the second
    assert_eq!(results.wins_for(Difficulty::Easy), 3);
    assert_eq!(results.wins_for(Difficulty::Medium), 3);
}

#[test]
fn test_report_lists_every_match_and_level() {
    let report = sample().generate_report();
    assert!(report.contains("hard"));
    assert!(report.contains("7"));
    for level in Difficulty::ALL {
        assert!(report.contains(level.as_str()));
    }
}
