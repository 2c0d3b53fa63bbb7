//! Randomised cross-check of the max-flow answer against exhaustive subset search.

use division_elimination::{certificate_of_elimination, is_eliminated, Division, Team};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_division(rng: &mut StdRng) -> Division {
    let n = rng.gen_range(1..=6);
    let mut against = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let games = if rng.gen_bool(0.3) { 0 } else { rng.gen_range(1..=6) };
            against[i][j] = games;
            against[j][i] = games;
        }
    }
    let teams = against
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let scheduled: u32 = row.iter().sum();
            Team::new(
                format!("T{i}"),
                rng.gen_range(0..=25),
                rng.gen_range(0..=25),
                scheduled + rng.gen_range(0..=3),
                row,
            )
        })
        .collect();
    Division::new(teams).unwrap()
}

/// `tested` is eliminated iff some non-empty set R of other teams has
/// `wins(R) + games(R) > |R| * max_possible_wins(tested)`.
fn eliminated_by_subset_search(d: &Division, tested: usize) -> bool {
    let n = d.number_of_teams();
    let ceiling = u64::from(d.team(tested).max_possible_wins());
    let others: Vec<usize> = (0..n).filter(|&i| i != tested).collect();
    (1u32..(1 << others.len())).any(|mask| {
        let members: Vec<usize> = others
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &i)| i)
            .collect();
        let wins: u64 = members.iter().map(|&i| u64::from(d.team(i).wins)).sum();
        let mut games = 0u64;
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                games += u64::from(d.team(i).against[j]);
            }
        }
        wins + games > ceiling * members.len() as u64
    })
}

#[test]
fn max_flow_agrees_with_subset_search() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let d = random_division(&mut rng);
        for (i, team) in d.teams().enumerate() {
            let certificate = certificate_of_elimination(&d, team).unwrap();
            assert_eq!(
                certificate.is_some(),
                eliminated_by_subset_search(&d, i),
                "{} in {:?}",
                team,
                d.team_records()
            );
            assert_eq!(is_eliminated(&d, team).unwrap(), certificate.is_some());
            if let Some(certificate) = certificate {
                assert!(!certificate.contains(team));
                assert!(certificate.proves_elimination(&d, team));
            }
        }
    }
}
