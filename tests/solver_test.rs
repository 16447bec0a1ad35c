//! End-to-end solver behavior on generated and built-in catalogs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_timetable::csp::{backtracking_search, SolverConfig, SolverStatus, TimetableSolver};
use u_timetable::models::{Catalog, ViolationType};
use u_timetable::{report, verify};

const GROUP_NAMES: [&str; 4] = ["MI", "ab", "TK-1", "xy"];

fn random_catalog(rng: &mut StdRng) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..rng.random_range(1..=2) {
        catalog = catalog.with_subject(format!("Subject {i}"));
    }
    for i in 0..rng.random_range(1..=2) {
        catalog = catalog.with_teacher(format!("Teacher {i}"));
    }
    for name in GROUP_NAMES.iter().take(rng.random_range(1..=2)) {
        catalog = catalog.with_group(*name, rng.random_range(5..=30));
    }
    for i in 0..rng.random_range(1..=2) {
        catalog = catalog.with_room(format!("Room_{i}"), rng.random_range(10..=40));
    }
    for i in 0..rng.random_range(1..=3) {
        catalog = catalog.with_weekday(format!("Day {i}"));
    }
    for i in 0..rng.random_range(1..=2) {
        catalog = catalog.with_time_slot(format!("Slot {i}"));
    }
    catalog
}

/// Feasible exactly when there is one candidate, or when only the weekday
/// varies and the single group fits the single room: any other second
/// candidate shares a teacher or room on some day with another one.
fn expect_feasible(catalog: &Catalog) -> bool {
    if catalog.candidate_count() <= 1 {
        return true;
    }
    let only_weekdays_vary = catalog.subjects.len() == 1
        && catalog.teachers.len() == 1
        && catalog.groups.len() == 1
        && catalog.rooms.len() == 1
        && catalog.time_slots.len() == 1;
    only_weekdays_vary && catalog.rooms[0].fits(&catalog.groups[0])
}

#[test]
fn test_random_catalogs_complete_or_fail() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng);
        let solution = TimetableSolver::new().solve(&catalog);

        match solution.status {
            SolverStatus::Feasible => {
                let assignment = solution.assignment.as_ref().unwrap();
                assert_eq!(assignment.len(), catalog.candidate_count());
            }
            SolverStatus::Infeasible => assert!(solution.assignment.is_none()),
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(
            solution.is_solution_found(),
            expect_feasible(&catalog),
            "catalog: {catalog:?}"
        );
    }
}

#[test]
fn test_random_solutions_have_no_clashes() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng);
        let Some(assignment) = backtracking_search(&catalog) else {
            continue;
        };
        let violations = verify::check(&catalog, &assignment);

        assert!(violations.iter().all(|v| !matches!(
            v.violation_type,
            ViolationType::TeacherClash | ViolationType::RoomClash | ViolationType::GroupClash
        )));
        // Capacity is only compared between two slots
        if assignment.len() >= 2 {
            assert!(violations.is_empty(), "{violations:?}");
        }
    }
}

#[test]
fn test_repeated_runs_identical() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let catalog = random_catalog(&mut rng);
        let first = TimetableSolver::new().solve(&catalog);
        let second = TimetableSolver::new().solve(&catalog);
        assert_eq!(first.status, second.status);
        assert_eq!(first.assignment, second.assignment);
        assert_eq!(first.stats, second.stats);
    }
}

#[test]
fn test_week_of_lectures() {
    let catalog = Catalog::new()
        .with_subject("12 Compiler Design")
        .with_teacher("12 Ivanchenko")
        .with_group("TTP-42", 24)
        .with_room("Room_2", 50)
        .with_weekday("Monday")
        .with_weekday("Tuesday")
        .with_weekday("Wednesday")
        .with_weekday("Thursday")
        .with_weekday("Friday")
        .with_time_slot("12:20-13:55");

    let assignment = backtracking_search(&catalog).unwrap();
    assert!(verify::is_valid(&catalog, &assignment));

    let text = report::render(&catalog, &assignment);
    let days: Vec<&str> = text
        .lines()
        .skip(2)
        .map(|row| row.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        days,
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
    );
}

#[test]
fn test_university_catalog_times_out() {
    let solver = TimetableSolver::new().with_config(SolverConfig::new().with_time_limit_ms(200));
    let solution = solver.solve(&Catalog::university());

    assert_eq!(solution.status, SolverStatus::Timeout);
    assert!(solution.assignment.is_none());
}

#[test]
fn test_catalog_file_round_trip() {
    let path = std::env::temp_dir().join(format!("u-timetable-{}.json", std::process::id()));
    let catalog = Catalog::new()
        .with_subject("S")
        .with_teacher("T")
        .with_group("MI", 15)
        .with_room("Room_0", 50)
        .with_weekday("Monday")
        .with_weekday("Tuesday")
        .with_time_slot("8:40-10:15");
    std::fs::write(&path, catalog.to_json_string().unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, catalog);
    let solution = TimetableSolver::new().solve_checked(&loaded).unwrap();
    assert_eq!(solution.status, SolverStatus::Feasible);
}
