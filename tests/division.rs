//! Integration tests for division construction and lookups.

use division_elimination::{Division, DivisionError, Team};

fn three_teams() -> Vec<Team> {
    vec![
        Team::new("Red", 10, 4, 5, vec![0, 2, 1]),
        Team::new("Blue", 8, 6, 4, vec![2, 0, 2]),
        Team::new("Green", 5, 9, 3, vec![1, 2, 0]),
    ]
}

#[test]
fn lookups_by_name() {
    let d = Division::new(three_teams()).unwrap();
    assert_eq!(d.number_of_teams(), 3);
    assert_eq!(d.teams().collect::<Vec<_>>(), vec!["Red", "Blue", "Green"]);
    assert_eq!(d.wins("Blue"), Ok(8));
    assert_eq!(d.losses("Blue"), Ok(6));
    assert_eq!(d.remaining("Blue"), Ok(4));
    assert_eq!(d.max_possible_wins("Green"), Ok(8));
    assert_eq!(d.index_of("Green"), Ok(2));
}

#[test]
fn against_is_symmetric() {
    let d = Division::new(three_teams()).unwrap();
    let names: Vec<_> = d.teams().collect();
    for a in &names {
        for b in &names {
            assert_eq!(d.against(a, b), d.against(b, a));
        }
    }
    assert_eq!(d.against("Red", "Blue"), Ok(2));
    assert_eq!(d.against("Red", "Red"), Ok(0));
}

#[test]
fn unknown_team_lookups_fail() {
    let d = Division::new(three_teams()).unwrap();
    let unknown = Err(DivisionError::UnknownTeam("Nonexistent".to_string()));
    assert_eq!(d.wins("Nonexistent"), unknown);
    assert_eq!(d.losses("Nonexistent"), unknown);
    assert_eq!(d.remaining("Nonexistent"), unknown);
    assert_eq!(d.against("Red", "Nonexistent"), unknown);
    assert_eq!(d.against("Nonexistent", "Red"), unknown);
}

#[test]
fn empty_division_rejected() {
    assert_eq!(Division::new(Vec::new()).unwrap_err(), DivisionError::EmptyDivision);
}

#[test]
fn duplicate_and_blank_names_rejected() {
    let mut teams = three_teams();
    teams[2].name = "Red".to_string();
    assert_eq!(
        Division::new(teams).unwrap_err(),
        DivisionError::DuplicateTeamName("Red".to_string())
    );

    let mut teams = three_teams();
    teams[1].name = "  ".to_string();
    assert_eq!(Division::new(teams).unwrap_err(), DivisionError::EmptyTeamName);
}

#[test]
fn malformed_schedules_rejected() {
    let mut teams = three_teams();
    teams[1].against[0] = 3;
    assert!(matches!(
        Division::new(teams),
        Err(DivisionError::AsymmetricSchedule { .. })
    ));

    let mut teams = three_teams();
    teams[0].against[0] = 1;
    assert_eq!(
        Division::new(teams).unwrap_err(),
        DivisionError::SelfScheduled("Red".to_string())
    );

    let mut teams = three_teams();
    teams[2].against.pop();
    assert!(matches!(
        Division::new(teams),
        Err(DivisionError::WrongScheduleLength {
            expected: 3,
            found: 2,
            ..
        })
    ));

    let mut teams = three_teams();
    teams[1].remaining = 3;
    assert_eq!(
        Division::new(teams).unwrap_err(),
        DivisionError::RemainingTooSmall {
            team: "Blue".to_string(),
            remaining: 3,
            scheduled: 4,
        }
    );
}

#[test]
fn games_outside_the_division_are_allowed() {
    let mut teams = three_teams();
    teams[0].remaining = 20;
    assert!(Division::new(teams).is_ok());
}

#[test]
fn json_input_goes_through_validation() {
    let ok = r#"[
        {"name": "A", "wins": 3, "losses": 1, "remaining": 2, "against": [0, 2]},
        {"name": "B", "wins": 2, "losses": 2, "remaining": 2, "against": [2, 0]}
    ]"#;
    let d: Division = serde_json::from_str(ok).unwrap();
    assert_eq!(d.against("A", "B"), Ok(2));

    let asymmetric = r#"[
        {"name": "A", "wins": 3, "losses": 1, "remaining": 2, "against": [0, 2]},
        {"name": "B", "wins": 2, "losses": 2, "remaining": 2, "against": [1, 0]}
    ]"#;
    assert!(serde_json::from_str::<Division>(asymmetric).is_err());
}

#[test]
fn counts_that_overflow_are_rejected() {
    let teams = vec![
        Team::new("A", u32::MAX, 0, 1, vec![0, 0]),
        Team::new("B", 0, 0, 0, vec![0, 0]),
    ];
    assert_eq!(
        Division::new(teams).unwrap_err(),
        DivisionError::CountOverflow("A".to_string())
    );

    let teams = vec![
        Team::new("A", 0, 0, u32::MAX, vec![0, 3_000_000_000, 3_000_000_000]),
        Team::new("B", 0, 0, u32::MAX, vec![3_000_000_000, 0, 0]),
        Team::new("C", 0, 0, u32::MAX, vec![3_000_000_000, 0, 0]),
    ];
    assert_eq!(
        Division::new(teams).unwrap_err(),
        DivisionError::CountOverflow("A".to_string())
    );
}

#[test]
fn largest_accepted_counts_still_answer() {
    let d = Division::new(vec![
        Team::new("A", u32::MAX - 1, 0, 1, vec![0, 1]),
        Team::new("B", 5, 0, 1, vec![1, 0]),
    ])
    .unwrap();
    assert_eq!(d.max_possible_wins("A"), Ok(u32::MAX));
    assert!(division_elimination::is_eliminated(&d, "B").unwrap());
    assert!(!division_elimination::is_eliminated(&d, "A").unwrap());
}
