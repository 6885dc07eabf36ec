// Shared test grids. Leading and trailing blank lines are ignored by the builder.

pub(crate) const SQUARE: &str = "
.....
.S-7.
.|.|.
.L-J.
.....
";

pub(crate) const WINDING: &str = "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

pub(crate) const SQUEEZE: &str = "
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

// same loop as SQUEEZE, with stray pipe outside it
pub(crate) const SQUEEZE_WITH_JUNK: &str = "
7-L|F7J.-F
JS------7|
.|F----7|L
.||-7FJ||.
.||L|J7||-
.|L-7F-J|.
F|..||..|7
.L--JL--J.
-J|.L7F-..
";

pub(crate) const WIDE_SQUEEZE: &str = "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

pub(crate) const LARGER: &str = "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

pub(crate) const JUNK_HEAVY: &str = "
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

// the start still has two facing neighbors, but the strand never comes back
pub(crate) const OPEN_STRAND: &str = "
.....
.S-7.
.|.|.
.L-..
.....
";

/// Every closed fixture with its expected farthest distance (where known) and enclosed count.
pub(crate) const CLOSED: [(&str, Option<usize>, usize); 7] = [
    (SQUARE, Some(4), 1),
    (WINDING, Some(8), 1),
    (SQUEEZE, None, 4),
    (SQUEEZE_WITH_JUNK, None, 4),
    (WIDE_SQUEEZE, None, 4),
    (LARGER, None, 8),
    (JUNK_HEAVY, None, 10),
];
