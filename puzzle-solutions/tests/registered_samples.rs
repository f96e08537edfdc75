//! Every 2022 solver reached the way the CLI reaches it: through the plugin
//! registry, with answers read back from the type-erased instance.

use puzzle_solutions as _;
use puzzle_solver::{RegistryBuilder, SolverError, SolverRegistry};

const BLIZZARDS: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";

const BLUEPRINTS: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

const VALVES: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2022)
        .unwrap()
        .build()
}

fn answers(registry: &SolverRegistry, day: u8, input: &str) -> Vec<String> {
    let mut solver = registry.create_solver(2022, day, input).unwrap();
    (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().answer)
        .collect()
}

#[test]
fn test_all_days_registered_with_tags() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = registry();
    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![16, 19, 24]);
    assert!(registry.iter_info().all(|info| info.parts == 2));
    assert!(
        registry
            .iter_info()
            .all(|info| info.tags.contains(&"search"))
    );
    assert_eq!(
        registry.info(2022, 24).map(|info| info.tags),
        Some(&["search", "grid", "shortest-path"][..])
    );
}

#[test]
fn test_blizzard_basin_sample() {
    assert_eq!(answers(&registry(), 24, BLIZZARDS), vec!["18", "54"]);
}

#[test]
fn test_blueprint_sample() {
    assert_eq!(answers(&registry(), 19, BLUEPRINTS), vec!["33", "3472"]);
}

#[test]
fn test_valve_sample() {
    assert_eq!(answers(&registry(), 16, VALVES), vec!["1651", "1707"]);
}

#[test]
fn test_parse_failures_surface_as_parse_errors() {
    let registry = registry();
    for (day, input) in [(16, "Valve ZZ\n"), (19, "Blueprint x"), (24, "#.#\n")] {
        assert!(
            matches!(
                registry.create_solver(2022, day, input),
                Err(SolverError::ParseError(_))
            ),
            "day {day} accepted {input:?}"
        );
    }
    assert!(matches!(
        registry.create_solver(2022, 1, ""),
        Err(SolverError::NotFound(2022, 1))
    ));
}
