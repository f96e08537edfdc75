//! Puzzle solutions with automatic registration
//!
//! Each solution derives `PuzzleSolver` for part dispatch and
//! `AutoRegisterSolver` to submit itself to the plugin registry; linking this
//! crate is enough for `RegistryBuilder::register_all_plugins` to find them.
//!
//! | puzzle | engine |
//! |--------|--------|
//! | 2022 day 16, valves | memoized search |
//! | 2022 day 19, robot factory | branch and bound |
//! | 2022 day 24, blizzard basin | shortest path |

pub mod year_2022;
